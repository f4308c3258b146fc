use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::seeds::{MORA_PHONE_SEED, PHONE_SEED};
use super::Vocabulary;

/// Which of the four registry vocabularies to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabKind {
    Ortho,
    Phone,
    Mora,
    MoraPhone,
}

impl VocabKind {
    pub const ALL: [VocabKind; 4] = [Self::Ortho, Self::Phone, Self::Mora, Self::MoraPhone];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ortho => "ortho",
            Self::Phone => "phone",
            Self::Mora => "mora",
            Self::MoraPhone => "mora_phone",
        }
    }
}

impl fmt::Display for VocabKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VocabKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ortho" => Ok(Self::Ortho),
            "phone" => Ok(Self::Phone),
            "mora" => Ok(Self::Mora),
            "mora_phone" | "mora-phone" => Ok(Self::MoraPhone),
            other => Err(format!("unknown vocabulary: {other}")),
        }
    }
}

/// The four vocabularies a corpus is encoded against.
///
/// Passed explicitly (`&mut`) to everything that assigns ids; there is no
/// process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabRegistry {
    /// Characters of the written form.
    pub ortho: Vocabulary,
    /// Julius phonemes of the whole word, seeded with the closed alphabet.
    pub phone: Vocabulary,
    /// Resolved morae; grows as words are seen.
    pub mora: Vocabulary,
    /// Phonemes from the per-mora table, seeded.
    pub mora_phone: Vocabulary,
}

impl Default for VocabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabRegistry {
    pub fn new() -> Self {
        Self {
            ortho: Vocabulary::with_controls(),
            phone: Vocabulary::seeded(PHONE_SEED),
            mora: Vocabulary::with_controls(),
            mora_phone: Vocabulary::seeded(MORA_PHONE_SEED),
        }
    }

    pub fn get(&self, kind: VocabKind) -> &Vocabulary {
        match kind {
            VocabKind::Ortho => &self.ortho,
            VocabKind::Phone => &self.phone,
            VocabKind::Mora => &self.mora,
            VocabKind::MoraPhone => &self.mora_phone,
        }
    }

    pub fn get_mut(&mut self, kind: VocabKind) -> &mut Vocabulary {
        match kind {
            VocabKind::Ortho => &mut self.ortho,
            VocabKind::Phone => &mut self.phone,
            VocabKind::Mora => &mut self.mora,
            VocabKind::MoraPhone => &mut self.mora_phone,
        }
    }

    /// `(kind, size)` for each vocabulary.
    pub fn sizes(&self) -> [(VocabKind, usize); 4] {
        VocabKind::ALL.map(|kind| (kind, self.get(kind).len()))
    }
}
