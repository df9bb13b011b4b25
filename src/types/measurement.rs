use crate::error::{CoachError, Result};
use crate::types::athlete::AthleteInfo;
use serde::{Deserialize, Serialize};

/// Raw physical test results. Times in seconds, distances in centimetres or metres
/// as the standards table expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalMeasurements {
    pub run10m: f64,
    pub run30m: [f64; 2],
    pub agility_l: f64,
    pub agility_r: f64,
    pub vertical_jump: [f64; 3],
    pub triple_jump: f64,
    pub sit_ups: f64,
    pub coordination: f64,
    pub yo_yo_distance: f64,
}

impl PhysicalMeasurements {
    /// Best of the two sprint trials.
    pub fn best_run30m(&self) -> f64 {
        self.run30m[0].min(self.run30m[1])
    }

    /// Best of the three jump trials.
    pub fn best_vertical_jump(&self) -> f64 {
        self.vertical_jump
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    fn values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("run10m", self.run10m),
            ("run30m[0]", self.run30m[0]),
            ("run30m[1]", self.run30m[1]),
            ("agilityL", self.agility_l),
            ("agilityR", self.agility_r),
            ("verticalJump[0]", self.vertical_jump[0]),
            ("verticalJump[1]", self.vertical_jump[1]),
            ("verticalJump[2]", self.vertical_jump[2]),
            ("tripleJump", self.triple_jump),
            ("sitUps", self.sit_ups),
            ("coordination", self.coordination),
            ("yoYoDistance", self.yo_yo_distance),
        ]
    }
}

/// Raw technical test results. Pass and shot values are 1-5 ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalMeasurements {
    pub dribble: f64,
    pub lifting: f64,
    pub short_pass_r: f64,
    pub short_pass_l: f64,
    pub long_pass_r: f64,
    pub long_pass_l: f64,
    pub shoot_r: f64,
    pub shoot_l: f64,
}

impl TechnicalMeasurements {
    fn values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("dribble", self.dribble),
            ("lifting", self.lifting),
            ("shortPassR", self.short_pass_r),
            ("shortPassL", self.short_pass_l),
            ("longPassR", self.long_pass_r),
            ("longPassL", self.long_pass_l),
            ("shootR", self.shoot_r),
            ("shootL", self.shoot_l),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementBundle {
    pub athlete: AthleteInfo,
    pub physical: PhysicalMeasurements,
    pub technical: TechnicalMeasurements,
}

impl MeasurementBundle {
    /// Rejects NaN and infinite values before they reach the scoring pipeline.
    pub fn ensure_finite(&self) -> Result<()> {
        let bad = self
            .physical
            .values()
            .into_iter()
            .chain(self.technical.values())
            .filter(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
            .collect::<Vec<_>>();
        if bad.is_empty() {
            Ok(())
        } else {
            Err(CoachError::InvalidMeasurement(format!(
                "non-finite value(s) for: {}",
                bad.join(", ")
            )))
        }
    }
}
