use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::Path;

/// Optional enrichment produced outside the core, usually by a generative model.
/// Every field may be missing or null; comments are keyed by metric identifier.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalNarrative {
    #[serde(deserialize_with = "null_as_empty")]
    pub physical_comments: CommentMap,
    #[serde(deserialize_with = "null_as_empty")]
    pub technical_comments: CommentMap,
    pub physical_summary: Option<String>,
    pub technical_summary: Option<String>,
}

pub type CommentMap = BTreeMap<String, Option<String>>;

fn null_as_empty<'de, D>(deserializer: D) -> Result<CommentMap, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<CommentMap>::deserialize(deserializer)?.unwrap_or_default())
}

impl ExternalNarrative {
    /// Non-blank physical comment for `metric_key`.
    pub fn physical_comment(&self, metric_key: &str) -> Option<&str> {
        comment(&self.physical_comments, metric_key)
    }

    /// Non-blank technical comment for `metric_key`.
    pub fn technical_comment(&self, metric_key: &str) -> Option<&str> {
        comment(&self.technical_comments, metric_key)
    }

    pub fn physical_summary(&self) -> Option<&str> {
        non_blank(self.physical_summary.as_deref())
    }

    pub fn technical_summary(&self) -> Option<&str> {
        non_blank(self.technical_summary.as_deref())
    }
}

fn comment<'a>(comments: &'a CommentMap, metric_key: &str) -> Option<&'a str> {
    non_blank(comments.get(metric_key)?.as_deref())
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}

/// Parses a JSON narrative. Malformed payloads are logged and dropped so the report
/// falls back to local content.
pub fn parse(payload: &str) -> Option<ExternalNarrative> {
    match serde_json::from_str::<ExternalNarrative>(payload) {
        Ok(narrative) => Some(narrative),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed narrative payload");
            None
        }
    }
}

/// Reads and parses a narrative file; unreadable files behave like a missing narrative.
pub fn load(path: &Path) -> Option<ExternalNarrative> {
    match std::fs::read_to_string(path) {
        Ok(payload) => parse(&payload),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "narrative unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_accepts_partial_payload() {
        let narrative = parse(r#"{"physicalComments": {"run10m": "Explosive first step."}}"#)
            .expect("partial payload should parse");
        assert_eq!(narrative.physical_comment("run10m"), Some("Explosive first step."));
        assert_eq!(narrative.technical_comment("shootR"), None);
        assert_eq!(narrative.physical_summary(), None);
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let narrative = parse(
            r#"{
                "aiAdvice": [{"title": "x"}],
                "playStyle": "Engine",
                "technicalComments": {"shootL": "Calm finish."},
                "technicalSummary": "Neat touch."
            }"#,
        )
        .expect("payload with extra fields should parse");
        assert_eq!(narrative.technical_comment("shootL"), Some("Calm finish."));
        assert_eq!(narrative.technical_summary(), Some("Neat touch."));
    }

    #[test]
    fn parse_rejects_malformed_payload() {
        assert!(parse("not json").is_none());
        assert!(parse(r#"{"physicalComments": ["run10m"]}"#).is_none());
    }

    #[test]
    fn blank_entries_are_treated_as_missing() {
        let narrative = parse(r#"{"physicalComments": {"run10m": "  "}, "physicalSummary": ""}"#)
            .expect("payload should parse");
        assert_eq!(narrative.physical_comment("run10m"), None);
        assert_eq!(narrative.physical_summary(), None);
    }

    #[test]
    fn null_entries_keep_the_rest_of_the_payload() {
        let narrative = parse(
            r#"{
                "physicalComments": {"run10m": null, "run30m": "Quick over distance."},
                "physicalSummary": "Strong engine."
            }"#,
        )
        .expect("null comment should not reject the payload");
        assert_eq!(narrative.physical_comment("run10m"), None);
        assert_eq!(narrative.physical_comment("run30m"), Some("Quick over distance."));
        assert_eq!(narrative.physical_summary(), Some("Strong engine."));
    }

    #[test]
    fn null_comment_maps_read_as_empty() {
        let narrative = parse(
            r#"{"physicalComments": null, "technicalComments": null, "technicalSummary": "Neat touch."}"#,
        )
        .expect("null maps should not reject the payload");
        assert!(narrative.physical_comments.is_empty());
        assert!(narrative.technical_comments.is_empty());
        assert_eq!(narrative.technical_summary(), Some("Neat touch."));
    }

    #[test]
    fn comment_maps_are_scoped_to_their_section() {
        let narrative = parse(
            r#"{"technicalComments": {"run10m": "Misplaced."}, "physicalComments": {"shootR": "Misplaced."}}"#,
        )
        .expect("payload should parse");
        assert_eq!(narrative.physical_comment("run10m"), None);
        assert_eq!(narrative.technical_comment("shootR"), None);
        assert_eq!(narrative.technical_comment("run10m"), Some("Misplaced."));
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(load(&dir.path().join("absent.json")).is_none());

        let path = dir.path().join("narrative.json");
        fs::write(&path, r#"{"physicalSummary": "Strong engine."}"#).expect("write narrative");
        let narrative = load(&path).expect("narrative should load");
        assert_eq!(narrative.physical_summary(), Some("Strong engine."));
    }
}
