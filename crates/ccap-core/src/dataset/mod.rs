//! Corpus assembly: word records with four token channels, built from a
//! frequency-ranked training list and a test list.

#[cfg(test)]
mod tests;

mod assembler;
mod record;
pub mod source;

use serde::Serialize;

use crate::mora::TransformError;

pub use assembler::{is_symbol_word, AssemblyOptions, DatasetAssembler};
pub use record::{transcribe, PhonemePolicy};
pub use source::{
    AcceptAll, EmbeddingLookup, FrequencyEntry, FrequencyList, ReadingSupplier, SourceError,
    WordSet,
};

/// One token sequence of a word, forward and reversed, with ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub tokens: Vec<String>,
    pub ids: Vec<u32>,
    pub reversed: Vec<String>,
    pub reversed_ids: Vec<u32>,
}

impl Channel {
    pub fn new(tokens: Vec<String>, ids: Vec<u32>) -> Self {
        let reversed = tokens.iter().rev().cloned().collect();
        let reversed_ids = ids.iter().rev().copied().collect();
        Self {
            tokens,
            ids,
            reversed,
            reversed_ids,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    /// Written form as it entered the corpus.
    pub orig: String,
    /// Hiragana reading.
    pub reading: String,
    /// Characters of `orig`.
    pub ortho: Channel,
    /// Word-level Julius phonemes.
    pub phone: Channel,
    /// Morae with long marks resolved.
    pub mora: Channel,
    /// Per-mora table phonemes.
    pub mora_phone: Channel,
    /// Morae as tokenized, before long-mark resolution.
    pub raw_mora: Vec<String>,
    /// Reading characters no phoneme rule covered. They survive in `phone`
    /// fused with a neighbouring phoneme.
    pub unmapped: Vec<char>,
    /// Reading characters the mora tokenizer skipped.
    pub dropped: Vec<char>,
}

impl WordRecord {
    /// True when every reading character reached both the phone and the
    /// mora channels.
    pub fn is_clean(&self) -> bool {
        self.unmapped.is_empty() && self.dropped.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    Train,
    Test,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExclusionReason {
    MalformedReading { mora: String },
    UnknownPhoneme { phoneme: String },
    NoReading,
    Empty,
}

impl From<TransformError> for ExclusionReason {
    fn from(e: TransformError) -> Self {
        match e {
            TransformError::MalformedReading { mora, .. } => Self::MalformedReading { mora },
            TransformError::UnknownPhoneme { phoneme, .. } => Self::UnknownPhoneme { phoneme },
        }
    }
}

/// A word that was dropped, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exclusion {
    pub word: String,
    pub split: Split,
    pub reason: ExclusionReason,
}

/// Longest sequence seen per channel, over both splits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaxLengths {
    pub ortho: usize,
    pub phone: usize,
    pub mora: usize,
    pub mora_phone: usize,
}

impl MaxLengths {
    pub fn update(&mut self, record: &WordRecord) {
        self.ortho = self.ortho.max(record.ortho.len());
        self.phone = self.phone.max(record.phone.len());
        self.mora = self.mora.max(record.mora.len());
        self.mora_phone = self.mora_phone.max(record.mora_phone.len());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    pub train: Vec<WordRecord>,
    pub test: Vec<WordRecord>,
    pub excluded: Vec<Exclusion>,
    pub max_lengths: MaxLengths,
}

impl Corpus {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn excluded_in(&self, split: Split) -> impl Iterator<Item = &Exclusion> {
        self.excluded.iter().filter(move |e| e.split == split)
    }
}
