use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{VocabError, VocabRegistry, Vocabulary};

const MAGIC: &[u8; 4] = b"CCVR";
const VERSION: u8 = 1;

/// Flat serialization format shared by the JSON and bincode forms: each
/// vocabulary as its ordered token list.
#[derive(Serialize, Deserialize)]
struct RegistryData {
    ortho: Vec<String>,
    phone: Vec<String>,
    mora: Vec<String>,
    mora_phone: Vec<String>,
}

impl VocabRegistry {
    /// Serialize to bytes (CCVR format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, VocabError> {
        let body = bincode::serialize(&self.to_data()).map_err(VocabError::Serialize)?;

        let mut buf = Vec::with_capacity(5 + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (CCVR format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VocabError> {
        if bytes.len() < 5 {
            return Err(VocabError::InvalidHeader);
        }
        if &bytes[0..4] != MAGIC {
            return Err(VocabError::InvalidMagic);
        }
        if bytes[4] != VERSION {
            return Err(VocabError::UnsupportedVersion(bytes[4]));
        }
        let data: RegistryData =
            bincode::deserialize(&bytes[5..]).map_err(VocabError::Deserialize)?;
        Self::from_data(data)
    }

    pub fn to_json(&self) -> Result<String, VocabError> {
        Ok(serde_json::to_string_pretty(&self.to_data())?)
    }

    pub fn from_json(text: &str) -> Result<Self, VocabError> {
        let data: RegistryData = serde_json::from_str(text)?;
        Self::from_data(data)
    }

    /// Atomic write: write to .tmp then rename. A `.json` extension selects
    /// the JSON form, anything else the binary one.
    pub fn save(&self, path: &Path) -> Result<(), VocabError> {
        let bytes = if is_json(path) {
            self.to_json()?.into_bytes()
        } else {
            self.to_bytes()?
        };
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Load a registry written by [`save`](Self::save).
    pub fn load(path: &Path) -> Result<Self, VocabError> {
        if is_json(path) {
            Self::from_json(&fs::read_to_string(path)?)
        } else {
            Self::from_bytes(&fs::read(path)?)
        }
    }

    fn to_data(&self) -> RegistryData {
        RegistryData {
            ortho: self.ortho.tokens().to_vec(),
            phone: self.phone.tokens().to_vec(),
            mora: self.mora.tokens().to_vec(),
            mora_phone: self.mora_phone.tokens().to_vec(),
        }
    }

    fn from_data(data: RegistryData) -> Result<Self, VocabError> {
        Ok(Self {
            ortho: Vocabulary::from_tokens(data.ortho)?,
            phone: Vocabulary::from_tokens(data.phone)?,
            mora: Vocabulary::from_tokens(data.mora)?,
            mora_phone: Vocabulary::from_tokens(data.mora_phone)?,
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
