use super::normalize::normalize;
use crate::catalog::Catalog;
use crate::types::athlete::{AgeGroup, Gender};
use crate::types::measurement::{PhysicalMeasurements, TechnicalMeasurements};
use crate::types::scoring::{Score, ScoreRecord};

/// Scores every leaf metric and derives the left/right composites.
pub fn compute_scores(
    catalog: &Catalog,
    physical: &PhysicalMeasurements,
    technical: &TechnicalMeasurements,
    age_group: AgeGroup,
    gender: Gender,
) -> ScoreRecord {
    let score = |value: f64, metric: &str| normalize(catalog, value, age_group, gender, metric);

    let agility_l = score(physical.agility_l, "agility");
    let agility_r = score(physical.agility_r, "agility");
    let short_pass_l = score(technical.short_pass_l, "shortPass");
    let short_pass_r = score(technical.short_pass_r, "shortPass");
    let long_pass_l = score(technical.long_pass_l, "longPass");
    let long_pass_r = score(technical.long_pass_r, "longPass");
    let shoot_l = score(technical.shoot_l, "shoot");
    let shoot_r = score(technical.shoot_r, "shoot");

    ScoreRecord {
        run10m: score(physical.run10m, "run10m"),
        run30m: score(physical.best_run30m(), "run30m"),
        agility: bilateral(agility_l, agility_r),
        agility_l,
        agility_r,
        vertical_jump: score(physical.best_vertical_jump(), "verticalJump"),
        triple_jump: score(physical.triple_jump, "tripleJump"),
        sit_ups: score(physical.sit_ups, "sitUps"),
        coordination: score(physical.coordination, "coordination"),
        endurance: score(physical.yo_yo_distance, "endurance"),
        dribble: score(technical.dribble, "dribble"),
        lifting: score(technical.lifting, "lifting"),
        short_pass: bilateral(short_pass_l, short_pass_r),
        short_pass_l,
        short_pass_r,
        long_pass: bilateral(long_pass_l, long_pass_r),
        long_pass_l,
        long_pass_r,
        shoot: bilateral(shoot_l, shoot_r),
        shoot_l,
        shoot_r,
    }
}

/// Unrounded mean; 2.5 is a meaningful composite.
fn bilateral(left: Score, right: Score) -> Score {
    (left + right) / 2.0
}
