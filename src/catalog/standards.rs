use crate::error::CoachError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardType {
    Time,
    Distance,
    Reps,
    Points,
}

impl StandardType {
    /// Lower raw values are better for timed tests.
    pub fn lower_is_better(self) -> bool {
        matches!(self, StandardType::Time)
    }
}

/// Scoring ladder for one metric. `thresholds[i]` is the bar for score `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricStandard {
    pub key: &'static str,
    pub metric: &'static str,
    #[serde(rename = "type")]
    pub kind: StandardType,
    pub thresholds: [f64; 5],
}

impl MetricStandard {
    const fn new(
        key: &'static str,
        metric: &'static str,
        kind: StandardType,
        thresholds: [f64; 5],
    ) -> Self {
        Self {
            key,
            metric,
            kind,
            thresholds,
        }
    }

    /// Time ladders must strictly decrease, all others strictly increase.
    pub fn validate(&self) -> Result<(), CoachError> {
        let ordered = self.thresholds.windows(2).all(|pair| {
            if self.kind.lower_is_better() {
                pair[1] < pair[0]
            } else {
                pair[1] > pair[0]
            }
        });
        if !ordered || self.thresholds.iter().any(|t| !t.is_finite()) {
            return Err(CoachError::Catalog(format!(
                "threshold ladder for {} is not strictly monotonic for type {:?}",
                self.key, self.kind
            )));
        }
        Ok(())
    }
}

pub const MASTER_STANDARDS: [MetricStandard; 13] = [
    MetricStandard::new("run10m", "10m sprint", StandardType::Time, [2.5, 2.2, 1.9, 1.7, 1.5]),
    MetricStandard::new("run30m", "30m sprint", StandardType::Time, [5.5, 5.0, 4.6, 4.3, 4.0]),
    MetricStandard::new("agility", "Agility", StandardType::Time, [6.5, 6.0, 5.5, 5.0, 4.5]),
    MetricStandard::new(
        "verticalJump",
        "Vertical jump",
        StandardType::Distance,
        [30.0, 40.0, 50.0, 60.0, 70.0],
    ),
    MetricStandard::new(
        "tripleJump",
        "Standing triple jump",
        StandardType::Distance,
        [4.0, 5.0, 6.0, 7.0, 8.0],
    ),
    MetricStandard::new("sitUps", "Sit-ups", StandardType::Reps, [15.0, 20.0, 25.0, 30.0, 35.0]),
    MetricStandard::new(
        "coordination",
        "Coordination",
        StandardType::Time,
        [10.0, 9.0, 8.0, 7.0, 6.0],
    ),
    MetricStandard::new(
        "endurance",
        "Endurance",
        StandardType::Distance,
        [400.0, 800.0, 1200.0, 1600.0, 2000.0],
    ),
    MetricStandard::new("dribble", "Dribble", StandardType::Time, [12.0, 11.0, 10.0, 9.0, 8.0]),
    MetricStandard::new(
        "lifting",
        "Lifting",
        StandardType::Reps,
        [10.0, 30.0, 50.0, 100.0, 200.0],
    ),
    MetricStandard::new("shortPass", "Short pass", StandardType::Points, [1.0, 2.0, 3.0, 4.0, 5.0]),
    MetricStandard::new("longPass", "Long pass", StandardType::Points, [1.0, 2.0, 3.0, 4.0, 5.0]),
    MetricStandard::new("shoot", "Shoot", StandardType::Points, [1.0, 2.0, 3.0, 4.0, 5.0]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_standards_are_well_formed() {
        for standard in &MASTER_STANDARDS {
            standard
                .validate()
                .unwrap_or_else(|e| panic!("{} should validate: {e}", standard.key));
        }
    }

    #[test]
    fn validate_rejects_ladder_in_wrong_direction() {
        let inverted = MetricStandard::new(
            "run10m",
            "10m sprint",
            StandardType::Time,
            [1.5, 1.7, 1.9, 2.2, 2.5],
        );
        assert!(inverted.validate().is_err());

        let flat = MetricStandard::new(
            "sitUps",
            "Sit-ups",
            StandardType::Reps,
            [15.0, 20.0, 20.0, 30.0, 35.0],
        );
        assert!(flat.validate().is_err());
    }
}
