use crate::types::config::ClassifierThresholds;
use crate::types::scoring::{AthleteType, ScoreRecord};

/// Reduces a score record to one archetype. Rules run in order and the first match wins:
/// several severe weaknesses, then both averages high, physical high, technical high,
/// and finally the developing default.
pub fn classify_athlete(scores: &ScoreRecord, thresholds: &ClassifierThresholds) -> AthleteType {
    let severe = scores
        .entries()
        .iter()
        .filter(|(_, score)| *score <= thresholds.bottleneck_cutoff)
        .count();
    if severe >= thresholds.bottleneck_min_count {
        return AthleteType::Bottleneck;
    }

    let physical_high = scores.physical_average() >= thresholds.archetype_cutoff;
    let technical_high = scores.technical_average() >= thresholds.archetype_cutoff;

    match (physical_high, technical_high) {
        (true, true) => AthleteType::SuperAce,
        (true, false) => AthleteType::PhysicalMonster,
        (false, true) => AthleteType::Technician,
        (false, false) => AthleteType::Potential,
    }
}
