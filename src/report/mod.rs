pub mod assemble;
pub mod json;
pub mod md;
pub mod narrative;

use crate::error::CoachError;
use crate::types::report::AnalysisResult;
use crate::types::scoring::{AthleteType, ScoreRecord};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &AnalysisResult, format: OutputFormat) -> Result<String, CoachError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(CoachError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}

pub fn render_scores(
    scores: &ScoreRecord,
    athlete_type: AthleteType,
    format: OutputFormat,
) -> Result<String, CoachError> {
    match format {
        OutputFormat::Json => json::scores_to_json(scores, athlete_type).map_err(CoachError::Json),
        OutputFormat::Md => Ok(md::scores_to_markdown(scores, athlete_type)),
    }
}
