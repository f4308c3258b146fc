use serde::{Deserialize, Serialize};

use ccap_core::mora::TransformError;
use ccap_core::settings::SettingsError;
use ccap_core::vocab::VocabError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl From<VocabError> for EngineError {
    fn from(e: VocabError) -> Self {
        match e {
            VocabError::Io(e) => EngineError::Io { msg: e.to_string() },
            other => EngineError::InvalidData {
                msg: other.to_string(),
            },
        }
    }
}

impl From<SettingsError> for EngineError {
    fn from(e: SettingsError) -> Self {
        EngineError::InvalidData { msg: e.to_string() }
    }
}

/// A word to transcribe: its written form and hiragana (or katakana)
/// reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInput {
    pub orig: String,
    pub reading: String,
}

impl WordInput {
    pub fn new(orig: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            orig: orig.into(),
            reading: reading.into(),
        }
    }
}
