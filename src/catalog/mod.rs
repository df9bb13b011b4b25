pub mod advisory;
pub mod coefficients;
pub mod feedback;
pub mod quotes;
pub mod standards;

use crate::error::{CoachError, Result};
use crate::types::athlete::Category;
use crate::types::config::{ClassifierThresholds, CoachConfig};
use crate::types::scoring::{AthleteType, Score};
use advisory::{AdvisoryBook, AdvisoryPattern, ADVISORY_MASTER};
use feedback::{FeedbackEntry, FeedbackTable};
use quotes::{Quote, LEGEND_QUOTES};
use standards::{MetricStandard, MASTER_STANDARDS};
use std::collections::BTreeMap;

/// Reference tables and tunables, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    standards: BTreeMap<&'static str, MetricStandard>,
    coefficients: BTreeMap<Category, f64>,
    feedback: FeedbackTable,
    advisory: AdvisoryBook,
    quotes: Vec<Quote>,
    thresholds: ClassifierThresholds,
    weakness_cutoff: f64,
}

impl Catalog {
    /// Built-in tables with config overrides applied. Any malformed table is fatal here,
    /// so lookups afterwards never fail.
    pub fn load(config: &CoachConfig) -> Result<Self> {
        let mut coefficients = coefficients::builtin().collect::<BTreeMap<_, _>>();
        coefficients.extend(config.coefficient_overrides()?);

        let catalog = Self {
            standards: MASTER_STANDARDS
                .iter()
                .map(|standard| (standard.key, standard.clone()))
                .collect(),
            coefficients,
            feedback: FeedbackTable::builtin(),
            advisory: AdvisoryBook::from_patterns(&ADVISORY_MASTER)?,
            quotes: LEGEND_QUOTES.to_vec(),
            thresholds: config.classifier_thresholds(),
            weakness_cutoff: config.weakness_cutoff(),
        };
        catalog.validate()?;
        tracing::debug!(
            standards = catalog.standards.len(),
            categories = catalog.coefficients.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Built-in tables with default tunables.
    #[cfg(test)]
    pub fn builtin() -> Result<Self> {
        Self::load(&CoachConfig::default())
    }

    #[cfg(test)]
    pub fn without_coefficient(mut self, category: Category) -> Self {
        self.coefficients.remove(&category);
        self
    }

    fn validate(&self) -> Result<()> {
        for standard in self.standards.values() {
            standard.validate()?;
        }
        for (category, coefficient) in &self.coefficients {
            if !coefficient.is_finite() || *coefficient <= 0.0 {
                return Err(CoachError::Catalog(format!(
                    "coefficient for {category} must be positive (found {coefficient})"
                )));
            }
        }
        if self.quotes.is_empty() {
            return Err(CoachError::Catalog("quote pool is empty".to_string()));
        }
        Ok(())
    }

    pub fn standard(&self, metric_key: &str) -> Option<&MetricStandard> {
        self.standards.get(metric_key)
    }

    pub fn standards(&self) -> impl Iterator<Item = &MetricStandard> {
        self.standards.values()
    }

    pub fn coefficient(&self, category: Category) -> Option<f64> {
        self.coefficients.get(&category).copied()
    }

    /// Feedback for a metric identifier; side keys such as `shootL` share their base table.
    pub fn lookup_feedback(&self, metric_key: &str, score: Score) -> FeedbackEntry {
        self.feedback.lookup(base_metric(metric_key), score)
    }

    pub fn lookup_advisory(&self, athlete_type: AthleteType) -> &AdvisoryPattern {
        self.advisory.lookup(athlete_type)
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn classifier_thresholds(&self) -> ClassifierThresholds {
        self.thresholds
    }

    pub fn weakness_cutoff(&self) -> f64 {
        self.weakness_cutoff
    }
}

/// Strips a trailing `L`/`R` side marker when the remainder names a bilateral metric.
pub fn base_metric(metric_key: &str) -> &str {
    const BILATERAL: [&str; 4] = ["agility", "shortPass", "longPass", "shoot"];
    metric_key
        .strip_suffix('L')
        .or_else(|| metric_key.strip_suffix('R'))
        .filter(|base| BILATERAL.contains(base))
        .unwrap_or(metric_key)
}
