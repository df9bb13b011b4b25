use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    /// Presentation form, `text - author`.
    pub fn formatted(&self) -> String {
        format!("{} - {}", self.text, self.author)
    }
}

pub const LEGEND_QUOTES: [Quote; 8] = [
    Quote {
        text: "A team of undisciplined stars will never beat a disciplined team of ordinary players.",
        author: "Arrigo Sacchi",
    },
    Quote {
        text: "Don't miss the bus.",
        author: "Alex Ferguson",
    },
    Quote {
        text: "I have my own style. I don't copy anyone.",
        author: "Neymar",
    },
    Quote {
        text: "Let the ball do the work. The ball never gets tired.",
        author: "Johan Cruyff",
    },
    Quote {
        text: "Only those who have the courage to take a penalty can miss one.",
        author: "Roberto Baggio",
    },
    Quote {
        text: "Effort is not rewarded by itself. You keep working until it is.",
        author: "Lionel Messi",
    },
    Quote {
        text: "The strong do not always win. The winners are the strong ones.",
        author: "Franz Beckenbauer",
    },
    Quote {
        text: "Surpass who you were yesterday.",
        author: "Keisuke Honda",
    },
];

/// Picks one quote from `pool`. Returns `None` only for an empty pool.
pub fn select_quote<'a, R: Rng + ?Sized>(pool: &'a [Quote], rng: &mut R) -> Option<&'a Quote> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.gen_range(0..pool.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn same_seed_selects_same_quote() {
        let first = select_quote(&LEGEND_QUOTES, &mut ChaCha8Rng::seed_from_u64(42));
        let second = select_quote(&LEGEND_QUOTES, &mut ChaCha8Rng::seed_from_u64(42));
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(select_quote(&[], &mut rng).is_none());
    }

    #[test]
    fn formatted_joins_text_and_author() {
        assert_eq!(
            LEGEND_QUOTES[3].formatted(),
            "Let the ball do the work. The ball never gets tired. - Johan Cruyff"
        );
    }
}
