//! Token ↔ id vocabularies.
//!
//! Every vocabulary opens with the four control tokens at fixed ids and only
//! ever grows: a token, once assigned an id, keeps it for the lifetime of the
//! vocabulary (and across save/load).

#[cfg(test)]
mod tests;

mod persistence;
mod registry;
pub mod seeds;

use std::collections::HashMap;
use std::io;

pub use registry::{VocabKind, VocabRegistry};

/// Reserved tokens shared by every vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlToken {
    Pad,
    Eow,
    Sow,
    Unk,
}

impl ControlToken {
    pub const ALL: [ControlToken; 4] = [Self::Pad, Self::Eow, Self::Sow, Self::Unk];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pad => "<PAD>",
            Self::Eow => "<EOW>",
            Self::Sow => "<SOW>",
            Self::Unk => "<UNK>",
        }
    }

    pub fn id(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("id {id} out of range (vocabulary size {len})")]
    IdOutOfRange { id: u32, len: usize },

    #[error("unknown token: {0}")]
    UnknownToken(String),

    #[error("expected control token {expected} at id {id}, found {found:?}")]
    MissingControl {
        id: u32,
        expected: &'static str,
        found: Option<String>,
    },

    #[error("duplicate token: {0}")]
    DuplicateToken(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected CCVR)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only ordered token list with a reverse index and per-token
/// observation counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, u32>,
    counts: Vec<u64>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::with_controls()
    }
}

impl Vocabulary {
    /// A vocabulary holding only the control tokens.
    pub fn with_controls() -> Self {
        let mut vocab = Self {
            tokens: Vec::new(),
            index: HashMap::new(),
            counts: Vec::new(),
        };
        for control in ControlToken::ALL {
            vocab.push(control.as_str());
        }
        vocab
    }

    /// Control tokens followed by `seed` in order. Repeats (and seeds that
    /// name a control token) keep their first id.
    pub fn seeded(seed: &[&str]) -> Self {
        let mut vocab = Self::with_controls();
        for token in seed {
            vocab.index_of(token);
        }
        vocab
    }

    /// Rebuild from a stored token list, checking the control prefix and
    /// uniqueness.
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self, VocabError> {
        for control in ControlToken::ALL {
            let found = tokens.get(control.id() as usize);
            if found.map(String::as_str) != Some(control.as_str()) {
                return Err(VocabError::MissingControl {
                    id: control.id(),
                    expected: control.as_str(),
                    found: found.cloned(),
                });
            }
        }
        let mut index = HashMap::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if index.insert(token.clone(), i as u32).is_some() {
                return Err(VocabError::DuplicateToken(token.clone()));
            }
        }
        let counts = vec![0; tokens.len()];
        Ok(Self {
            tokens,
            index,
            counts,
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// False once constructed: control tokens are never removed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Id of `token`, appending it if absent.
    pub fn index_of(&mut self, token: &str) -> u32 {
        match self.index.get(token) {
            Some(&id) => id,
            None => self.push(token),
        }
    }

    /// Id of `token` without mutation.
    pub fn get(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }

    pub fn token_at(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Map tokens to ids, appending unseen ones in order of first appearance.
    pub fn encode<S: AsRef<str>>(&mut self, tokens: &[S]) -> Vec<u32> {
        tokens.iter().map(|t| self.index_of(t.as_ref())).collect()
    }

    /// Map tokens to ids without growing; the first unseen token is an error.
    pub fn encode_known<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<u32>, VocabError> {
        tokens
            .iter()
            .map(|t| {
                let t = t.as_ref();
                self.get(t)
                    .ok_or_else(|| VocabError::UnknownToken(t.to_string()))
            })
            .collect()
    }

    pub fn decode(&self, ids: &[u32]) -> Result<Vec<&str>, VocabError> {
        ids.iter()
            .map(|&id| {
                self.token_at(id).ok_or(VocabError::IdOutOfRange {
                    id,
                    len: self.tokens.len(),
                })
            })
            .collect()
    }

    /// Count one occurrence of `token` (appending it if absent) and return
    /// its id.
    pub fn observe(&mut self, token: &str) -> u32 {
        let id = self.index_of(token);
        self.counts[id as usize] += 1;
        id
    }

    /// Occurrences recorded through [`observe`](Self::observe).
    pub fn count(&self, token: &str) -> u64 {
        self.get(token).map_or(0, |id| self.counts[id as usize])
    }

    /// `(token, count)` for every observed token, most frequent first.
    pub fn frequencies(&self) -> Vec<(&str, u64)> {
        let mut out: Vec<(&str, u64)> = self
            .tokens
            .iter()
            .zip(&self.counts)
            .filter(|(_, c)| **c > 0)
            .map(|(t, &c)| (t.as_str(), c))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    fn push(&mut self, token: &str) -> u32 {
        let id = self.tokens.len() as u32;
        self.tokens.push(token.to_string());
        self.index.insert(token.to_string(), id);
        self.counts.push(0);
        id
    }
}
