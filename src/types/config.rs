use crate::error::CoachError;
use crate::types::athlete::Category;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoachConfig {
    pub classifier: Option<ClassifierConfig>,
    pub report: Option<ReportConfig>,
    pub coefficients: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    pub bottleneck_cutoff: Option<f64>,
    pub bottleneck_min_count: Option<usize>,
    pub archetype_cutoff: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub weakness_cutoff: Option<f64>,
}

/// Product-tunable cutoffs for athlete classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierThresholds {
    pub bottleneck_cutoff: f64,
    pub bottleneck_min_count: usize,
    pub archetype_cutoff: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            bottleneck_cutoff: 1.5,
            bottleneck_min_count: 2,
            archetype_cutoff: 4.0,
        }
    }
}

pub const DEFAULT_WEAKNESS_CUTOFF: f64 = 2.0;

impl CoachConfig {
    pub fn classifier_thresholds(&self) -> ClassifierThresholds {
        let defaults = ClassifierThresholds::default();
        match &self.classifier {
            Some(classifier) => ClassifierThresholds {
                bottleneck_cutoff: classifier
                    .bottleneck_cutoff
                    .unwrap_or(defaults.bottleneck_cutoff),
                bottleneck_min_count: classifier
                    .bottleneck_min_count
                    .unwrap_or(defaults.bottleneck_min_count),
                archetype_cutoff: classifier
                    .archetype_cutoff
                    .unwrap_or(defaults.archetype_cutoff),
            },
            None => defaults,
        }
    }

    pub fn weakness_cutoff(&self) -> f64 {
        self.report
            .as_ref()
            .and_then(|report| report.weakness_cutoff)
            .unwrap_or(DEFAULT_WEAKNESS_CUTOFF)
    }

    /// Coefficient overrides keyed by parsed category.
    pub fn coefficient_overrides(&self) -> Result<BTreeMap<Category, f64>, CoachError> {
        let mut overrides = BTreeMap::new();
        if let Some(coefficients) = &self.coefficients {
            for (key, value) in coefficients {
                let category = key.parse::<Category>().map_err(|e| {
                    CoachError::ConfigParse(format!("coefficients.{key}: {e}"))
                })?;
                overrides.insert(category, *value);
            }
        }
        Ok(overrides)
    }

    pub fn validate(&self) -> Result<(), CoachError> {
        let thresholds = self.classifier_thresholds();
        if !(1.0..=5.0).contains(&thresholds.bottleneck_cutoff) {
            return Err(CoachError::ConfigParse(
                "classifier.bottleneck_cutoff must be between 1.0 and 5.0".to_string(),
            ));
        }
        if thresholds.bottleneck_min_count == 0 {
            return Err(CoachError::ConfigParse(
                "classifier.bottleneck_min_count must be greater than 0".to_string(),
            ));
        }
        if !(1.0..=5.0).contains(&thresholds.archetype_cutoff) {
            return Err(CoachError::ConfigParse(
                "classifier.archetype_cutoff must be between 1.0 and 5.0".to_string(),
            ));
        }
        if !(1.0..=5.0).contains(&self.weakness_cutoff()) {
            return Err(CoachError::ConfigParse(
                "report.weakness_cutoff must be between 1.0 and 5.0".to_string(),
            ));
        }

        for (category, coefficient) in self.coefficient_overrides()? {
            if !coefficient.is_finite() || coefficient <= 0.0 {
                return Err(CoachError::ConfigParse(format!(
                    "coefficients.{category} must be a positive number (found {coefficient})"
                )));
            }
        }

        Ok(())
    }
}
