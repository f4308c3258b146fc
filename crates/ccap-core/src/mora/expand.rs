use serde::Serialize;
use tracing::{debug, debug_span};

use super::table::mora_entry;
use super::tokenizer::{split_morae, MoraSplit};
use crate::phoneme::{phoneme_tokens, to_phonemes};
use crate::unicode::{katakana_to_hiragana, LONG_VOWEL_MARK};
use crate::vocab::VocabRegistry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("mora {mora:?} of reading {reading:?} has no phoneme mapping")]
    MalformedReading { mora: String, reading: String },

    #[error("phoneme {phoneme:?} of reading {reading:?} is outside the phoneme alphabet")]
    UnknownPhoneme { phoneme: String, reading: String },
}

/// Vowel kana substituted for the next `ー`.
///
/// Starts as `ー` itself, so a reading that opens with a long mark keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongVowelCarry(&'static str);

impl Default for LongVowelCarry {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl LongVowelCarry {
    pub const INITIAL: LongVowelCarry = LongVowelCarry("ー");

    pub fn kana(self) -> &'static str {
        self.0
    }

    /// `ー` becomes the carried kana; every other mora is returned as is.
    pub fn resolve<'a>(self, mora: &'a str) -> &'a str {
        if mora.chars().eq([LONG_VOWEL_MARK]) {
            self.0
        } else {
            mora
        }
    }

    /// Carry after a mora whose phonemes are `phonemes`: the final vowel (or
    /// the moraic nasal) replaces the carry, anything else keeps it.
    pub fn advance(self, phonemes: &[&str]) -> Self {
        match phonemes.last().copied() {
            Some("a") => Self("あ"),
            Some("i") => Self("い"),
            Some("u") => Self("う"),
            Some("e") => Self("え"),
            Some("o") => Self("お"),
            Some("N") => Self("ん"),
            _ => self,
        }
    }
}

/// Mora-level view of one reading, with ids against a [`VocabRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoraExpansion {
    /// The reading folded to hiragana.
    pub reading: String,
    /// Morae as tokenized, `ー` included.
    pub raw: Vec<String>,
    /// `raw` with each `ー` replaced by the preceding vowel.
    pub resolved: Vec<String>,
    pub reversed: Vec<String>,
    pub mora_ids: Vec<u32>,
    pub reversed_mora_ids: Vec<u32>,
    pub mora_phonemes: Vec<String>,
    pub reversed_mora_phonemes: Vec<String>,
    pub mora_phoneme_ids: Vec<u32>,
    pub reversed_mora_phoneme_ids: Vec<u32>,
    /// `raw` through the mora table, so a long mark stays `:`.
    pub surface_phonemes: Vec<String>,
    /// Word-level Julius phonemes of the reading.
    pub phonemes: Vec<String>,
    /// Characters of the reading that form no mora and were skipped.
    pub dropped: Vec<char>,
}

/// Resolve long marks in `raw` and look every resulting mora up in the table.
///
/// Pure: no vocabulary is touched, so a malformed reading fails before any id
/// is assigned.
pub fn resolve_long_vowels(
    raw: &[String],
    reading: &str,
) -> Result<Vec<(&'static str, &'static [&'static str])>, TransformError> {
    let (resolved, _) = raw.iter().try_fold(
        (Vec::with_capacity(raw.len()), LongVowelCarry::INITIAL),
        |(mut acc, carry), mora| {
            let resolved = carry.resolve(mora);
            let (key, phonemes) = lookup(resolved, reading)?;
            acc.push((key, phonemes));
            Ok::<_, TransformError>((acc, carry.advance(phonemes)))
        },
    )?;
    Ok(resolved)
}

/// Expand `reading` into morae, resolved morae, their reversal and the
/// per-mora phonemes, assigning ids in `registry`.
///
/// The mora vocabulary grows with unseen morae and counts every occurrence;
/// the mora-phoneme vocabulary is expected to already hold the table's
/// phonemes.
pub fn expand_mora(
    reading: &str,
    registry: &mut VocabRegistry,
) -> Result<MoraExpansion, TransformError> {
    let _span = debug_span!("expand_mora", reading).entered();

    let hiragana = katakana_to_hiragana(reading);
    let split = split_morae(&hiragana);
    if !split.dropped.is_empty() {
        debug!(dropped = ?split.dropped, "characters outside the mora alphabet");
    }
    let MoraSplit { morae: raw, dropped } = split;

    let resolved = resolve_long_vowels(&raw, &hiragana)?;
    let surface: Vec<&'static [&'static str]> = raw
        .iter()
        .map(|m| lookup(m, &hiragana).map(|(_, p)| p))
        .collect::<Result<_, _>>()?;

    let resolved_morae: Vec<String> = resolved.iter().map(|(m, _)| m.to_string()).collect();
    let reversed: Vec<String> = resolved_morae.iter().rev().cloned().collect();
    let mora_phonemes: Vec<String> = flatten(resolved.iter().map(|(_, p)| *p));
    let reversed_mora_phonemes: Vec<String> = flatten(resolved.iter().rev().map(|(_, p)| *p));

    let mora_ids: Vec<u32> = resolved_morae
        .iter()
        .map(|m| registry.mora.observe(m))
        .collect();
    let reversed_mora_ids: Vec<u32> = mora_ids.iter().rev().copied().collect();
    let mora_phoneme_ids = registry.mora_phone.encode(&mora_phonemes);
    let reversed_mora_phoneme_ids = registry.mora_phone.encode(&reversed_mora_phonemes);

    Ok(MoraExpansion {
        phonemes: phoneme_tokens(&to_phonemes(&hiragana)),
        reading: hiragana,
        raw,
        resolved: resolved_morae,
        reversed,
        mora_ids,
        reversed_mora_ids,
        mora_phonemes,
        reversed_mora_phonemes,
        mora_phoneme_ids,
        reversed_mora_phoneme_ids,
        surface_phonemes: flatten(surface.into_iter()),
        dropped,
    })
}

fn lookup(
    mora: &str,
    reading: &str,
) -> Result<(&'static str, &'static [&'static str]), TransformError> {
    mora_entry(mora).ok_or_else(|| TransformError::MalformedReading {
        mora: mora.to_string(),
        reading: reading.to_string(),
    })
}

fn flatten<'a>(groups: impl Iterator<Item = &'a [&'a str]>) -> Vec<String> {
    groups.flatten().map(|p| p.to_string()).collect()
}
