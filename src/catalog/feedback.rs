use crate::types::scoring::Score;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub intelligence: &'static str,
    pub advice: &'static str,
}

const fn entry(intelligence: &'static str, advice: &'static str) -> FeedbackEntry {
    FeedbackEntry {
        intelligence,
        advice,
    }
}

/// Five entries indexed by score level minus one.
pub type FeedbackLevels = [FeedbackEntry; 5];

const DEFAULT_LEVELS: FeedbackLevels = [
    entry(
        "This is a clear weak point right now. The basic movement pattern needs rebuilding before speed or power is added.",
        "Small daily reps beat one long session a week. Give this fifteen focused minutes every day.",
    ),
    entry(
        "The foundation is there but it breaks down under pressure. Consistency is the next step.",
        "Film yourself once a week and compare. Seeing the change keeps you honest.",
    ),
    entry(
        "A solid, average level. Nothing holds you back here, but nothing sets you apart either.",
        "Average is a starting line. Pick one detail to sharpen every week.",
    ),
    entry(
        "A genuine strength. The challenge is producing it when tired, late in a match.",
        "Do not settle. Train this at the end of sessions when your legs are heavy.",
    ),
    entry(
        "Top of the group. This is a weapon opponents will have to plan around.",
        "Staying on top is harder than getting there. Keep polishing it like it is your weakest skill.",
    ),
];

const RUN10M_LEVELS: FeedbackLevels = [
    entry(
        "Reaction at the start is late. You are moving after the signal instead of being ready for it.",
        "Preparation is everything. Be set and leaning before the whistle ever sounds.",
    ),
    entry(
        "Your stance is too upright and the first step carries no weight. Stay low and drive the ground hard.",
        "Do not fear falling. Holding the forward lean a moment longer changes everything.",
    ),
    entry(
        "A standard start, but a short arm swing is slowing your acceleration.",
        "Today beats yesterday. Shaving a tenth of a second only comes from patient repetition.",
    ),
    entry(
        "A sharp first burst. The question is whether you can still produce it late in the second half.",
        "Satisfaction is the enemy of growth. Make this start available at any minute of the match.",
    ),
    entry(
        "An explosive start and the best in the team. Add feints so defenders cannot read your first step.",
        "Staying at the top is harder than reaching it. Keep obsessing over your start.",
    ),
];

const RUN30M_LEVELS: FeedbackLevels = [
    entry(
        "Top speed arrives late and fades quickly. The stride shortens as soon as you tire.",
        "Speed is a skill. Practise relaxed fast running twice a week.",
    ),
    entry(
        "Acceleration is steady but the transition into full speed is stiff.",
        "Loosen the shoulders. Tension steals the last metres.",
    ),
    entry(
        "You reach a decent top speed. Holding it through the final ten metres is the next target.",
        "Finish every sprint past the line, never at it.",
    ),
    entry(
        "Quick over distance. Long runs in behind the defence suit you.",
        "Make the defender turn. Use your speed to set the match tempo.",
    ),
    entry(
        "Elite top speed for your group. You can win any footrace on the pitch.",
        "Pair the pace with timing and you become impossible to mark.",
    ),
];

const AGILITY_LEVELS: FeedbackLevels = [
    entry(
        "Changes of direction are slow. The plant foot lands too far from the body.",
        "Short, quick steps before every turn. Footwork first, speed second.",
    ),
    entry(
        "You lose balance coming out of cuts and need an extra step to recover.",
        "Lower the hips into the turn. Balance is speed you do not lose.",
    ),
    entry(
        "Reliable footwork, with room to be sharper on the weaker side.",
        "Train the slower side twice as often as the faster one.",
    ),
    entry(
        "Sharp cuts in both directions. You escape tight spaces well.",
        "Combine the cut with a change of pace to leave defenders flat-footed.",
    ),
    entry(
        "Outstanding agility. Your first step out of a turn is a real weapon.",
        "Keep the edge by adding ball work to every agility drill.",
    ),
];

const ENDURANCE_LEVELS: FeedbackLevels = [
    entry(
        "Pacing is uneven and you fade badly in the second half. Build a steady running rhythm.",
        "Persistence is power. There are no shortcuts; daily running is what makes you strong.",
    ),
    entry(
        "Breathing breaks down early. Relax the shoulders and settle into the run.",
        "Enjoy the struggle. Heavy breathing is the sound of your engine growing.",
    ),
    entry(
        "Average stamina, but nothing left for a sprint when the match is decided.",
        "Win the fight with yourself. When the legs stop, the will keeps them moving.",
    ),
    entry(
        "Enough engine for a full match. Next, learn when to rest and when to explode.",
        "Beat yesterday's self. Stamina is built one session at a time.",
    ),
    entry(
        "Remarkable stamina. You can show up anywhere on the pitch for the whole match.",
        "Miracles start at your feet. Running to the final whistle lifts the whole team.",
    ),
];

const DRIBBLE_LEVELS: FeedbackLevels = [
    entry(
        "The ball runs away from you at speed. Touches are too heavy and too far apart.",
        "Touch the ball every step. Slow down until control feels automatic.",
    ),
    entry(
        "Control is fine at walking pace but breaks down when you accelerate.",
        "Raise the tempo only after ten clean repetitions.",
    ),
    entry(
        "Steady close control through the course, without much change of pace.",
        "Add a burst after every second cone. Rhythm changes beat defenders.",
    ),
    entry(
        "Quick feet and good weight shifts. You carry the ball well at speed.",
        "Now lift your eyes. Great dribblers see the pitch while the ball obeys.",
    ),
    entry(
        "Exceptional ball carrying. Speed and control are fused into one movement.",
        "Turn it into an art. Take on defenders with purpose, not habit.",
    ),
];

const SHOOT_LEVELS: FeedbackLevels = [
    entry(
        "Contact is inconsistent and shots rarely test the goalkeeper.",
        "Strike through the centre of the ball. Accuracy before power.",
    ),
    entry(
        "Shots go on target but lack pace. The standing foot is too far from the ball.",
        "Plant close, lock the ankle, and follow through toward the target.",
    ),
    entry(
        "Reliable finishing from good positions. Harder angles still cause trouble.",
        "Practise from the edges of the box until every angle feels like home.",
    ),
    entry(
        "A dangerous finisher with clean contact and good placement.",
        "Stay calm in the moment. The corners are bigger than they look.",
    ),
    entry(
        "Clinical finishing. Goalkeepers will fear this foot.",
        "Only those brave enough to shoot can miss. Keep taking the responsibility.",
    ),
];

/// Feedback tables keyed by base metric, with a default table that always resolves.
#[derive(Debug, Clone)]
pub struct FeedbackTable {
    entries: BTreeMap<&'static str, FeedbackLevels>,
    default: FeedbackLevels,
}

impl FeedbackTable {
    pub fn builtin() -> Self {
        let entries = [
            ("run10m", RUN10M_LEVELS),
            ("run30m", RUN30M_LEVELS),
            ("agility", AGILITY_LEVELS),
            ("endurance", ENDURANCE_LEVELS),
            ("dribble", DRIBBLE_LEVELS),
            ("shoot", SHOOT_LEVELS),
        ]
        .into_iter()
        .collect();
        Self {
            entries,
            default: DEFAULT_LEVELS,
        }
    }

    /// Looks up feedback for a score, rounding to the nearest level and clamping to 1..=5.
    /// Unknown metrics use the default table.
    pub fn lookup(&self, metric_key: &str, score: Score) -> FeedbackEntry {
        let levels = match self.entries.get(metric_key) {
            Some(levels) => levels,
            None => {
                tracing::debug!(metric = metric_key, "no feedback table; using default");
                &self.default
            }
        };
        levels[level_index(score)]
    }
}

fn level_index(score: Score) -> usize {
    if score.is_nan() {
        return 2;
    }
    score.round().clamp(1.0, 5.0) as usize - 1
}
