use crate::types::report::{AnalysisResult, MetricFeedback};
use crate::types::scoring::{AthleteType, ScoreRecord};
use std::collections::BTreeMap;

pub fn scores_to_markdown(scores: &ScoreRecord, athlete_type: AthleteType) -> String {
    let mut output = String::new();
    output.push_str("# S-CORE Scores\n\n");
    output.push_str(&format!("Athlete type: {athlete_type}\n\n"));
    output.push_str(&format!(
        "- physical average: {:.2}\n- technical average: {:.2}\n\n",
        scores.physical_average(),
        scores.technical_average()
    ));
    push_score_table(&mut output, scores);
    output
}

pub fn to_markdown(result: &AnalysisResult) -> String {
    let mut output = String::new();
    output.push_str("# S-CORE Report\n\n");
    if let Some(athlete) = &result.athlete {
        output.push_str(&format!(
            "Athlete: {} ({} {:?})",
            athlete.name,
            athlete.age_group.as_str(),
            athlete.gender
        ));
        if !athlete.club_name.is_empty() {
            output.push_str(&format!(", {}", athlete.club_name));
        }
        if let Some(date) = athlete.date {
            output.push_str(&format!(", measured {date}"));
        }
        output.push_str("\n\n");
    }
    output.push_str(&format!(
        "Athlete type: {} ({})\n\n{}\n\n",
        result.athlete_type, result.play_style, result.advisory_description
    ));

    output.push_str("## Scores\n\n");
    push_score_table(&mut output, &result.scores);

    output.push_str("## Physical\n\n");
    output.push_str(&format!("{}\n\n", result.physical_summary));
    push_feedback(&mut output, &result.physical_feedbacks);

    output.push_str("## Technical\n\n");
    output.push_str(&format!("{}\n\n", result.technical_summary));
    push_feedback(&mut output, &result.technical_feedbacks);

    output.push_str("## Improvement Plan\n\n");
    for (phase, advice) in result.ai_advice.iter().enumerate() {
        output.push_str(&format!(
            "### Phase {}: {}\n\n- analysis: {}\n- action: {}\n- goal: {}\n\n",
            phase + 1,
            advice.title,
            advice.improvement,
            advice.key_point,
            advice.goal
        ));
    }

    output.push_str("## Weaknesses\n\n");
    for weakness in &result.weaknesses {
        output.push_str(&format!("- {weakness}\n"));
    }
    output.push('\n');

    output.push_str(&format!("> {}\n", result.inspirational_quote));
    output
}

fn push_score_table(output: &mut String, scores: &ScoreRecord) {
    output.push_str("| metric | score |\n|---|---|\n");
    for (key, score) in scores.entries() {
        output.push_str(&format!("| {key} | {score:.1} |\n"));
    }
    output.push('\n');
}

fn push_feedback(output: &mut String, feedback: &BTreeMap<String, MetricFeedback>) {
    for (key, entry) in feedback {
        output.push_str(&format!("- **{key}**: {} {}\n", entry.intelligence, entry.advice));
    }
    output.push('\n');
}
