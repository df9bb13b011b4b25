use crate::catalog::coefficients::NEUTRAL_COEFFICIENT;
use crate::catalog::standards::StandardType;
use crate::catalog::Catalog;
use crate::types::athlete::{AgeGroup, Category, Gender};
use crate::types::scoring::Score;

/// Score given to metrics the standards table does not know.
pub const DEFAULT_SCORE: Score = 3.0;

/// Stored as a technical skill but always scored lower-is-better.
const ALWAYS_TIMED: &str = "dribble";

/// Converts one raw measurement into a whole score in 1..=5.
///
/// Missing reference data never fails: an unknown category scores with
/// [`NEUTRAL_COEFFICIENT`] and an unknown metric returns [`DEFAULT_SCORE`].
pub fn normalize(
    catalog: &Catalog,
    raw_value: f64,
    age_group: AgeGroup,
    gender: Gender,
    metric_key: &str,
) -> Score {
    let category = Category::new(age_group, gender);
    let coefficient = catalog.coefficient(category).unwrap_or_else(|| {
        tracing::debug!(%category, "no coefficient for category; using neutral");
        NEUTRAL_COEFFICIENT
    });

    let Some(standard) = catalog.standard(metric_key) else {
        tracing::debug!(metric = metric_key, "no standard for metric; using default score");
        return DEFAULT_SCORE;
    };

    let adjusted = match standard.kind {
        StandardType::Time => raw_value / coefficient,
        StandardType::Distance | StandardType::Reps => raw_value * coefficient,
        StandardType::Points => raw_value,
    };

    let lower_is_better = standard.kind.lower_is_better() || metric_key == ALWAYS_TIMED;
    ladder_score(adjusted, &standard.thresholds, lower_is_better)
}

/// Highest score whose bar is met, scanning from score 5 down to 2. `thresholds[0]`
/// never decides anything: falling short of score 2 always lands on 1.
fn ladder_score(value: f64, thresholds: &[f64; 5], lower_is_better: bool) -> Score {
    (2..=5)
        .rev()
        .find(|&score| {
            let bar = thresholds[score - 1];
            if lower_is_better {
                value <= bar
            } else {
                value >= bar
            }
        })
        .unwrap_or(1) as Score
}
