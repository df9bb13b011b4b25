use crate::error::{CoachError, Result};
use crate::types::config::CoachConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "s-core.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/s-core/config.toml";

/// Loads the global config and then `s-core.toml` from `root`, or `explicit` in its place.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<CoachConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<CoachConfig> {
    let local_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CoachError::ConfigParse(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &local_path)?;

    let cfg: CoachConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CoachError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CoachError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ClassifierThresholds;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_defaults_when_no_file_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert_eq!(cfg.classifier_thresholds(), ClassifierThresholds::default());
    }

    #[test]
    fn load_config_merges_global_then_local() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[classifier]
bottleneck_cutoff = 2.0
archetype_cutoff = 3.5

[coefficients]
U12_M = 1.5
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[classifier]
archetype_cutoff = 4.5
"#,
        )
        .expect("local config should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed");

        let thresholds = cfg.classifier_thresholds();
        assert_eq!(thresholds.bottleneck_cutoff, 2.0);
        assert_eq!(thresholds.archetype_cutoff, 4.5);
        assert_eq!(
            cfg.coefficients
                .as_ref()
                .and_then(|coefficients| coefficients.get("U12_M"))
                .copied(),
            Some(1.5)
        );
    }

    #[test]
    fn explicit_config_replaces_working_directory_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nweakness_cutoff = 1.0\n",
        )
        .expect("local config should write");
        let explicit = root.path().join("custom.toml");
        fs::write(&explicit, "[report]\nweakness_cutoff = 3.0\n").expect("explicit should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed");
        assert_eq!(cfg.weakness_cutoff(), 3.0);
    }

    #[test]
    fn explicit_config_must_exist() {
        let root = TempDir::new().expect("root temp dir should be created");
        let missing = root.path().join("missing.toml");
        let err = load_config_with_global(root.path(), Some(&missing), None)
            .expect_err("missing explicit config should fail");
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_values_fail_at_load() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[coefficients]\nU18_M = -1.0\n",
        )
        .expect("local config should write");
        assert!(load_config_with_global(root.path(), None, None).is_err());
    }
}
