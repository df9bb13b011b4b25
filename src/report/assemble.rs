use super::narrative::ExternalNarrative;
use crate::catalog::advisory::AdvisoryPattern;
use crate::catalog::quotes::select_quote;
use crate::catalog::Catalog;
use crate::types::report::{AnalysisResult, MetricFeedback};
use crate::types::scoring::{AthleteType, ScoreRecord};
use rand::Rng;
use std::collections::BTreeMap;

const PHYSICAL_FEEDBACK_KEYS: [&str; 10] = [
    "run10m",
    "run30m",
    "agilityR",
    "agilityL",
    "agility",
    "verticalJump",
    "tripleJump",
    "sitUps",
    "coordination",
    "endurance",
];

const TECHNICAL_FEEDBACK_KEYS: [&str; 11] = [
    "dribble",
    "lifting",
    "shortPassR",
    "shortPassL",
    "shortPass",
    "longPassR",
    "longPassL",
    "longPass",
    "shootR",
    "shootL",
    "shoot",
];

pub const DEFAULT_PHYSICAL_SUMMARY: &str = "Your body already carries an engine that can compete at the top level. The key to waking it up is relentless work on the fundamentals.";
pub const DEFAULT_TECHNICAL_SUMMARY: &str = "There is no finish line in learning technique. Picture the top-level stage and keep talking with the ball.";
pub const BALANCED_MESSAGE: &str = "Current performance is very well balanced. Keep sharpening your strengths and aim to become the core of the team.";

/// Locally computed feedback, split the way the report presents it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSet {
    pub physical: BTreeMap<String, MetricFeedback>,
    pub technical: BTreeMap<String, MetricFeedback>,
}

pub fn collect_feedback(catalog: &Catalog, scores: &ScoreRecord) -> FeedbackSet {
    let section = |keys: &[&str]| {
        keys.iter()
            .filter_map(|key| {
                let score = scores.get(key)?;
                let entry = catalog.lookup_feedback(key, score);
                Some((
                    key.to_string(),
                    MetricFeedback {
                        intelligence: entry.intelligence.to_string(),
                        advice: entry.advice.to_string(),
                    },
                ))
            })
            .collect::<BTreeMap<_, _>>()
    };
    FeedbackSet {
        physical: section(&PHYSICAL_FEEDBACK_KEYS),
        technical: section(&TECHNICAL_FEEDBACK_KEYS),
    }
}

/// One line per score at or below `cutoff`, or a single balanced message.
pub fn weakness_advice(catalog: &Catalog, scores: &ScoreRecord, cutoff: f64) -> Vec<String> {
    let weaknesses = scores
        .entries()
        .iter()
        .filter(|(_, score)| *score <= cutoff)
        .map(|(key, score)| {
            let entry = catalog.lookup_feedback(key, *score);
            format!("[{key}] {} {}", entry.intelligence, entry.advice)
        })
        .collect::<Vec<_>>();
    if weaknesses.is_empty() {
        vec![BALANCED_MESSAGE.to_string()]
    } else {
        weaknesses
    }
}

/// Merges local content with the optional narrative. Narrative comments replace only the
/// `intelligence` text of matching metrics; advice always stays local.
pub fn assemble<R: Rng + ?Sized>(
    catalog: &Catalog,
    scores: &ScoreRecord,
    feedback: FeedbackSet,
    pattern: &AdvisoryPattern,
    narrative: Option<&ExternalNarrative>,
    rng: &mut R,
) -> AnalysisResult {
    let FeedbackSet {
        mut physical,
        mut technical,
    } = feedback;

    if let Some(narrative) = narrative {
        let replaced = apply_comments(&mut physical, |key| narrative.physical_comment(key))
            + apply_comments(&mut technical, |key| narrative.technical_comment(key));
        tracing::debug!(replaced, "applied narrative comments");
    }

    let physical_summary = narrative
        .and_then(ExternalNarrative::physical_summary)
        .unwrap_or(DEFAULT_PHYSICAL_SUMMARY)
        .to_string();
    let technical_summary = narrative
        .and_then(ExternalNarrative::technical_summary)
        .unwrap_or(DEFAULT_TECHNICAL_SUMMARY)
        .to_string();

    let inspirational_quote = select_quote(catalog.quotes(), rng)
        .map(|quote| quote.formatted())
        .unwrap_or_default();

    AnalysisResult {
        athlete: None,
        scores: scores.clone(),
        measurements: None,
        physical_feedbacks: physical,
        technical_feedbacks: technical,
        physical_summary,
        technical_summary,
        advisory_description: pattern.description.to_string(),
        ai_advice: pattern
            .phases
            .iter()
            .map(|phase| phase.to_advice_item())
            .collect(),
        weaknesses: weakness_advice(catalog, scores, catalog.weakness_cutoff()),
        play_style: pattern.play_style.to_string(),
        inspirational_quote,
        athlete_type: pattern.athlete_type,
    }
}

fn apply_comments<'a>(
    section: &mut BTreeMap<String, MetricFeedback>,
    comment_for: impl Fn(&str) -> Option<&'a str>,
) -> usize {
    let mut replaced = 0;
    for (key, entry) in section.iter_mut() {
        if let Some(comment) = comment_for(key) {
            entry.intelligence = comment.to_string();
            replaced += 1;
        }
    }
    replaced
}

/// Feedback lookup, advisory lookup and assembly in one step.
pub fn build_report<R: Rng + ?Sized>(
    catalog: &Catalog,
    scores: &ScoreRecord,
    athlete_type: AthleteType,
    narrative: Option<&ExternalNarrative>,
    rng: &mut R,
) -> AnalysisResult {
    let feedback = collect_feedback(catalog, scores);
    let pattern = catalog.lookup_advisory(athlete_type);
    assemble(catalog, scores, feedback, pattern, narrative, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::narrative;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("built-in catalog should load")
    }

    #[test]
    fn report_without_narrative_is_fully_populated() {
        let catalog = catalog();
        let scores = ScoreRecord::uniform(3.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = build_report(&catalog, &scores, AthleteType::Potential, None, &mut rng);

        assert_eq!(result.physical_feedbacks.len(), PHYSICAL_FEEDBACK_KEYS.len());
        assert_eq!(result.technical_feedbacks.len(), TECHNICAL_FEEDBACK_KEYS.len());
        assert!(result
            .physical_feedbacks
            .values()
            .chain(result.technical_feedbacks.values())
            .all(|feedback| !feedback.intelligence.is_empty() && !feedback.advice.is_empty()));
        assert_eq!(result.physical_summary, DEFAULT_PHYSICAL_SUMMARY);
        assert_eq!(result.technical_summary, DEFAULT_TECHNICAL_SUMMARY);
        assert_eq!(result.ai_advice.len(), 2);
        assert!(!result.play_style.is_empty());
        assert!(result.inspirational_quote.contains(" - "));
        assert_eq!(result.athlete_type, AthleteType::Potential);
        assert_eq!(result.weaknesses, vec![BALANCED_MESSAGE.to_string()]);
    }

    #[test]
    fn narrative_replaces_only_intelligence() {
        let catalog = catalog();
        let scores = ScoreRecord::uniform(4.0);
        let overlay = narrative::parse(
            r#"{
                "physicalComments": {"run10m": "Ferocious first step."},
                "technicalComments": {"shootR": "Ice cold finisher."},
                "physicalSummary": "Built for the top level."
            }"#,
        )
        .expect("narrative should parse");
        let local = build_report(
            &catalog,
            &scores,
            AthleteType::SuperAce,
            None,
            &mut ChaCha8Rng::seed_from_u64(3),
        );
        let merged = build_report(
            &catalog,
            &scores,
            AthleteType::SuperAce,
            Some(&overlay),
            &mut ChaCha8Rng::seed_from_u64(3),
        );

        assert_eq!(merged.physical_feedbacks["run10m"].intelligence, "Ferocious first step.");
        assert_eq!(
            merged.physical_feedbacks["run10m"].advice,
            local.physical_feedbacks["run10m"].advice
        );
        assert_eq!(merged.technical_feedbacks["shootR"].intelligence, "Ice cold finisher.");
        assert_eq!(merged.technical_feedbacks["shootL"], local.technical_feedbacks["shootL"]);
        assert_eq!(merged.physical_summary, "Built for the top level.");
        assert_eq!(merged.technical_summary, DEFAULT_TECHNICAL_SUMMARY);
        assert_eq!(merged.inspirational_quote, local.inspirational_quote);
    }

    #[test]
    fn narrative_comments_apply_only_to_their_own_section() {
        let catalog = catalog();
        let scores = ScoreRecord::uniform(3.0);
        let overlay = narrative::parse(
            r#"{
                "physicalComments": {"run10m": null, "run30m": "Quick.", "shootR": "Wrong map."},
                "technicalComments": {"run10m": "Wrong map."},
                "physicalSummary": "Engine."
            }"#,
        )
        .expect("narrative should parse");
        let local = build_report(
            &catalog,
            &scores,
            AthleteType::Potential,
            None,
            &mut ChaCha8Rng::seed_from_u64(5),
        );
        let merged = build_report(
            &catalog,
            &scores,
            AthleteType::Potential,
            Some(&overlay),
            &mut ChaCha8Rng::seed_from_u64(5),
        );

        assert_eq!(merged.physical_feedbacks["run30m"].intelligence, "Quick.");
        assert_eq!(merged.physical_feedbacks["run10m"], local.physical_feedbacks["run10m"]);
        assert_eq!(merged.technical_feedbacks["shootR"], local.technical_feedbacks["shootR"]);
        assert_eq!(merged.physical_summary, "Engine.");
    }

    #[test]
    fn malformed_narrative_yields_local_report() {
        let catalog = catalog();
        let scores = ScoreRecord::uniform(2.0);
        let overlay = narrative::parse("{ broken");
        let with_broken = build_report(
            &catalog,
            &scores,
            AthleteType::Potential,
            overlay.as_ref(),
            &mut ChaCha8Rng::seed_from_u64(9),
        );
        let local = build_report(
            &catalog,
            &scores,
            AthleteType::Potential,
            None,
            &mut ChaCha8Rng::seed_from_u64(9),
        );
        assert_eq!(with_broken, local);
    }

    #[test]
    fn low_scores_are_listed_as_weaknesses() {
        let catalog = catalog();
        let mut scores = ScoreRecord::uniform(4.0);
        scores.run10m = 1.0;
        scores.lifting = 2.0;
        let weaknesses = weakness_advice(&catalog, &scores, 2.0);
        assert_eq!(weaknesses.len(), 2);
        assert!(weaknesses[0].starts_with("[run10m] "));
        assert!(weaknesses[1].starts_with("[lifting] "));
    }

    #[test]
    fn advisory_content_follows_athlete_type() {
        let catalog = catalog();
        let scores = ScoreRecord::uniform(3.0);
        let result = build_report(
            &catalog,
            &scores,
            AthleteType::Bottleneck,
            None,
            &mut ChaCha8Rng::seed_from_u64(0),
        );
        let pattern = catalog.lookup_advisory(AthleteType::Bottleneck);
        assert_eq!(result.advisory_description, pattern.description);
        assert_eq!(result.ai_advice[0].title, pattern.phases[0].title);
        assert_eq!(result.athlete_type, AthleteType::Bottleneck);
    }
}
