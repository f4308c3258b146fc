//! Collaborators the dataset assembler consumes, with file-backed
//! implementations.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::normalize::normalize;
use crate::unicode::katakana_to_hiragana;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Supplies the hiragana reading of a word.
pub trait ReadingSupplier {
    fn reading_of(&self, word: &str) -> Option<String>;
}

/// Answers whether a word has a semantic embedding.
pub trait EmbeddingLookup {
    fn has(&self, word: &str) -> bool;
}

impl<F: Fn(&str) -> Option<String>> ReadingSupplier for F {
    fn reading_of(&self, word: &str) -> Option<String> {
        self(word)
    }
}

impl ReadingSupplier for HashMap<String, String> {
    fn reading_of(&self, word: &str) -> Option<String> {
        self.get(word).cloned()
    }
}

/// Treats every word as embedded.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl EmbeddingLookup for AcceptAll {
    fn has(&self, _word: &str) -> bool {
        true
    }
}

/// A plain set of words, one per line on disk.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    pub fn open(path: &Path) -> Result<Self, SourceError> {
        Ok(Self::from_text(&fs::read_to_string(path)?))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for WordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl EmbeddingLookup for WordSet {
    fn has(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub id: u32,
    /// Normalized written form.
    pub word: String,
    /// Normalized reading folded to hiragana.
    pub reading: String,
    pub frequency: u64,
}

/// Frequency-ranked word list in the psylex71 layout: space-separated
/// fields with the id first, the word third, the katakana reading fourth and
/// the frequency sixth.
#[derive(Debug, Clone, Default)]
pub struct FrequencyList {
    /// Descending frequency; ties keep file order.
    entries: Vec<FrequencyEntry>,
    readings: HashMap<String, String>,
}

impl FrequencyList {
    pub fn parse(text: &str) -> Result<Self, SourceError> {
        let mut entries = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            entries.push(parse_line(line, i + 1)?);
        }
        // A word listed twice reads as its later line.
        let readings = entries
            .iter()
            .map(|e| (e.word.clone(), e.reading.clone()))
            .collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        debug!(entries = entries.len(), "frequency list loaded");
        Ok(Self { entries, readings })
    }

    pub fn open(path: &Path) -> Result<Self, SourceError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Words from most to least frequent.
    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.word.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReadingSupplier for FrequencyList {
    fn reading_of(&self, word: &str) -> Option<String> {
        self.readings.get(word).cloned()
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<FrequencyEntry, SourceError> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() < 6 {
        return Err(SourceError::Parse {
            line: line_no,
            reason: format!("expected at least 6 fields, found {}", fields.len()),
        });
    }
    let id = fields[0].parse().map_err(|_| SourceError::Parse {
        line: line_no,
        reason: format!("invalid id: {}", fields[0]),
    })?;
    let frequency = fields[5].trim().parse().map_err(|_| SourceError::Parse {
        line: line_no,
        reason: format!("invalid frequency: {}", fields[5]),
    })?;
    Ok(FrequencyEntry {
        id,
        word: normalize(fields[2]),
        reading: katakana_to_hiragana(&normalize(fields[3])),
        frequency,
    })
}
