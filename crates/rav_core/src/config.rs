use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::RavError;

/// Config file picked up from the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rav-docs.json";

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Generator configuration, optionally stored as JSON (`rav-docs.json`).
///
/// Every field has a default so a partial file (or no file at all) is valid.
/// Relative paths are resolved against the working directory by
/// [`GeneratorConfig::resolve_paths`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    // Output locations
    pub output_dir: PathBuf,
    pub deck_dir: PathBuf,

    // Assets
    pub logo_path: PathBuf,

    // Content
    /// Overrides "today" for date-stamped documents.
    pub date: Option<NaiveDate>,

    // Extra outputs
    pub write_markdown: bool,
    pub write_outline: bool,

    // Logging
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs/exports"),
            deck_dir: PathBuf::from("docs"),
            logo_path: PathBuf::from("public/ravio-the-chat-genie-128px.png"),
            date: None,
            write_markdown: false,
            write_outline: false,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Load a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| RavError::Config(format!("{}: {e}", path.display())))?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Load `explicit` if given, otherwise `rav-docs.json` under `dir` when it
    /// exists, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug!("No {DEFAULT_CONFIG_FILE} in {}, using defaults", dir.display());
            Ok(Self::default())
        }
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Make every relative path absolute against `root`.
    pub fn resolve_paths(mut self, root: &Path) -> Self {
        self.output_dir = absolutize(root, &self.output_dir);
        self.deck_dir = absolutize(root, &self.deck_dir);
        self.logo_path = absolutize(root, &self.logo_path);
        self.log_dir = self.log_dir.map(|dir| absolutize(root, &dir));
        self
    }

    /// Parse an ISO `YYYY-MM-DD` date as accepted by the `date` field.
    pub fn parse_date(raw: &str) -> Result<NaiveDate, RavError> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| RavError::Config(format!("invalid date '{raw}': {e}")))
    }

    /// The date generators stamp into documents.
    pub fn effective_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("docs/exports"));
        assert_eq!(config.deck_dir, PathBuf::from("docs"));
        assert_eq!(
            config.logo_path,
            PathBuf::from("public/ravio-the-chat-genie-128px.png")
        );
        assert!(config.date.is_none());
        assert!(!config.write_markdown);
        assert!(!config.write_outline);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "write_markdown": true, "date": "2026-02-22" }"#).unwrap();
        assert!(config.write_markdown);
        assert_eq!(config.date, NaiveDate::from_ymd_opt(2026, 2, 22));
        assert_eq!(config.output_dir, PathBuf::from("docs/exports"));
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("rav-docs.json");
        let config = GeneratorConfig {
            write_outline: true,
            log_level: "debug".into(),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(GeneratorConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_malformed_json_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = GeneratorConfig::load(&path).unwrap_err();
        let rav = err.downcast_ref::<RavError>().expect("RavError");
        assert!(matches!(rav, RavError::Config(_)));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::discover(None, tmp.path()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_discover_picks_up_default_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "deck_dir": "slides" }"#,
        )
        .unwrap();
        let config = GeneratorConfig::discover(None, tmp.path()).unwrap();
        assert_eq!(config.deck_dir, PathBuf::from("slides"));
    }

    #[test]
    fn test_resolve_paths_keeps_absolute() {
        let root = Path::new("/work");
        let abs = std::env::temp_dir().join("out");
        let config = GeneratorConfig {
            output_dir: abs.clone(),
            ..Default::default()
        }
        .resolve_paths(root);
        assert_eq!(config.output_dir, abs);
        assert_eq!(config.deck_dir, root.join("docs"));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            GeneratorConfig::parse_date("2026-02-26").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
        );
        assert!(matches!(
            GeneratorConfig::parse_date("02/26/2026"),
            Err(RavError::Config(_))
        ));
    }

    #[test]
    fn test_effective_date_prefers_override() {
        let fixed = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap();
        let config = GeneratorConfig {
            date: Some(fixed),
            ..Default::default()
        };
        assert_eq!(config.effective_date(), fixed);
    }
}
