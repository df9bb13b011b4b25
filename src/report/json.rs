use crate::types::report::AnalysisResult;
use crate::types::scoring::{AthleteType, ScoreRecord};
use serde::Serialize;

pub fn to_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreSummary<'a> {
    scores: &'a ScoreRecord,
    physical_average: f64,
    technical_average: f64,
    athlete_type: AthleteType,
}

pub fn scores_to_json(
    scores: &ScoreRecord,
    athlete_type: AthleteType,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ScoreSummary {
        scores,
        physical_average: scores.physical_average(),
        technical_average: scores.technical_average(),
        athlete_type,
    })
}
