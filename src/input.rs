use crate::error::{CoachError, Result};
use crate::types::measurement::MeasurementBundle;
use std::path::Path;

/// Reads a measurement bundle from TOML, or JSON when the file ends in `.json`.
/// Non-finite values are rejected here so the scoring pipeline only sees numbers.
pub fn load_bundle(path: &Path) -> Result<MeasurementBundle> {
    if !path.exists() {
        return Err(CoachError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let bundle: MeasurementBundle = if is_json {
        serde_json::from_str(&content)
            .map_err(|e| CoachError::InputParse(format!("{}: {}", path.display(), e)))?
    } else {
        toml::from_str(&content)
            .map_err(|e| CoachError::InputParse(format!("{}: {}", path.display(), e)))?
    };
    bundle.ensure_finite()?;
    tracing::info!(
        path = %path.display(),
        athlete = %bundle.athlete.name,
        category = %bundle.athlete.category(),
        "loaded measurements"
    );
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::athlete::{AgeGroup, Gender};
    use std::fs;
    use tempfile::TempDir;

    const TOML_BUNDLE: &str = r#"
[athlete]
name = "Mio"
ageGroup = "U15"
gender = "Female"

[physical]
run10m = 2.0
run30m = [4.8, 4.9]
agilityL = 5.6
agilityR = 5.8
verticalJump = [40.0, 42.0, 39.0]
tripleJump = 5.5
sitUps = 24
coordination = 8.1
yoYoDistance = 1100

[technical]
dribble = 10.2
lifting = 80
shortPassR = 4
shortPassL = 3
longPassR = 3
longPassL = 3
shootR = 4
shootL = 2
"#;

    #[test]
    fn load_bundle_reads_toml() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("mio.toml");
        fs::write(&path, TOML_BUNDLE).expect("bundle should write");

        let bundle = load_bundle(&path).expect("bundle should load");
        assert_eq!(bundle.athlete.age_group, AgeGroup::U15);
        assert_eq!(bundle.athlete.gender, Gender::Female);
    }

    #[test]
    fn load_bundle_reads_json_by_extension() {
        let dir = TempDir::new().expect("temp dir should be created");
        let bundle: MeasurementBundle = toml::from_str(TOML_BUNDLE).expect("bundle should parse");
        let path = dir.path().join("mio.json");
        fs::write(&path, serde_json::to_string(&bundle).expect("bundle should serialize"))
            .expect("bundle should write");

        assert_eq!(load_bundle(&path).expect("json bundle should load"), bundle);
    }

    #[test]
    fn load_bundle_rejects_unknown_age_group() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("bad.toml");
        fs::write(&path, TOML_BUNDLE.replace("U15", "U21")).expect("bundle should write");

        let err = load_bundle(&path).expect_err("unknown age group should fail");
        assert!(matches!(err, CoachError::InputParse(_)));
    }

    #[test]
    fn load_bundle_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_bundle(&dir.path().join("absent.toml")).expect_err("missing should fail");
        assert!(matches!(err, CoachError::InputNotFound(_)));
    }
}
