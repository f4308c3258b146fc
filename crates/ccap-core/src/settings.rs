//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::normalize::MIN_PASSES;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub corpus: CorpusSettings,
    pub filter: FilterSettings,
    pub normalize: NormalizeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusSettings {
    pub train_size: usize,
    pub test_delimiter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSettings {
    pub skip_ascii: bool,
    pub skip_symbols: bool,
    #[serde(default)]
    pub strip_chars: Vec<String>,
    /// Ordered by key so the substitution order is deterministic.
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeSettings {
    pub max_passes: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(corpus.train_size);

    if s.normalize.max_passes < MIN_PASSES {
        return Err(SettingsError::InvalidValue {
            field: "normalize.max_passes".to_string(),
            reason: format!("must be at least {MIN_PASSES}"),
        });
    }

    if s.corpus.test_delimiter.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "corpus.test_delimiter".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.filter.substitutions.keys().any(|k| k.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: "filter.substitutions".to_string(),
            reason: "keys must not be empty".to_string(),
        });
    }
    if s.filter.strip_chars.iter().any(|c| c.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: "filter.strip_chars".to_string(),
            reason: "entries must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.corpus.train_size, 10000);
        assert_eq!(s.corpus.test_delimiter, "／");
        assert!(s.filter.skip_ascii);
        assert!(s.filter.skip_symbols);
        assert_eq!(s.filter.strip_chars, vec!["・".to_string()]);
        assert_eq!(s.filter.substitutions.get("ヴ").map(String::as_str), Some("ブ"));
        assert_eq!(s.normalize.max_passes, 4);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[corpus]
train_size = 50
test_delimiter = "/"

[filter]
skip_ascii = false
skip_symbols = true

[normalize]
max_passes = 2
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.corpus.train_size, 50);
        assert!(!s.filter.skip_ascii);
        assert!(s.filter.strip_chars.is_empty());
        assert!(s.filter.substitutions.is_empty());
    }

    #[test]
    fn error_zero_train_size() {
        let toml = DEFAULT_SETTINGS_TOML.replace("train_size = 10000", "train_size = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("corpus.train_size"));
    }

    #[test]
    fn error_single_normalize_pass() {
        let toml = DEFAULT_SETTINGS_TOML.replace("max_passes = 4", "max_passes = 1");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "normalize.max_passes"));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn error_empty_delimiter() {
        let toml = DEFAULT_SETTINGS_TOML.replace("test_delimiter = \"／\"", "test_delimiter = \"\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("corpus.test_delimiter"));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[corpus]\ntrain_size = 1\ntest_delimiter = \"／\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn export_roundtrip() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let text = toml::to_string(&s).unwrap();
        let back = parse_settings_toml(&text).unwrap();
        assert_eq!(back.corpus.train_size, s.corpus.train_size);
        assert_eq!(back.filter.substitutions, s.filter.substitutions);
    }
}
