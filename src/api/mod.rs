//! Thread-safe front end over the pipeline.


mod engine;
mod types;

pub use engine::Engine;
pub use types::{EngineError, WordInput};

use std::path::Path;

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install settings from a TOML file. Must run before anything reads
/// settings.
pub fn settings_load_config(path: &Path) -> Result<(), EngineError> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::Io {
        msg: format!("{}: {e}", path.display()),
    })?;
    ccap_core::settings::init_custom(content)?;
    Ok(())
}

pub fn settings_default_config() -> String {
    ccap_core::settings::default_toml().to_string()
}
