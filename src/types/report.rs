use crate::types::athlete::AthleteInfo;
use crate::types::measurement::{MeasurementBundle, PhysicalMeasurements, TechnicalMeasurements};
use crate::types::scoring::{AthleteType, ScoreRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Feedback for one metric: a diagnostic explanation and a motivational instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricFeedback {
    pub intelligence: String,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceItem {
    pub title: String,
    pub improvement: String,
    pub key_point: String,
    pub goal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurements {
    pub physical: PhysicalMeasurements,
    pub technical: TechnicalMeasurements,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<AthleteInfo>,
    pub scores: ScoreRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
    pub physical_feedbacks: BTreeMap<String, MetricFeedback>,
    pub technical_feedbacks: BTreeMap<String, MetricFeedback>,
    pub physical_summary: String,
    pub technical_summary: String,
    pub advisory_description: String,
    pub ai_advice: Vec<AdviceItem>,
    pub weaknesses: Vec<String>,
    pub play_style: String,
    pub inspirational_quote: String,
    pub athlete_type: AthleteType,
}

impl AnalysisResult {
    /// Attaches the athlete profile and raw measurements the scores came from.
    pub fn with_bundle(mut self, bundle: MeasurementBundle) -> Self {
        self.athlete = Some(bundle.athlete);
        self.measurements = Some(Measurements {
            physical: bundle.physical,
            technical: bundle.technical,
        });
        self
    }
}
