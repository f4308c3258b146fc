use crate::mora::{expand_mora, TransformError};
use crate::phoneme::convert;
use crate::unicode::katakana_to_hiragana;
use crate::vocab::VocabRegistry;

use super::{Channel, WordRecord};

/// What to do with a word-level phoneme missing from the phoneme vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhonemePolicy {
    /// Reject the word with [`TransformError::UnknownPhoneme`].
    #[default]
    Strict,
    /// Append the phoneme to the vocabulary.
    Extend,
}

/// Build the four channels of one word against `registry`.
///
/// Every check runs before the first id is assigned: on `Err` the registry
/// is exactly as it was.
pub fn transcribe(
    orig: &str,
    reading: &str,
    registry: &mut VocabRegistry,
    policy: PhonemePolicy,
) -> Result<WordRecord, TransformError> {
    let hiragana = katakana_to_hiragana(reading);
    let conversion = convert(&hiragana);
    let phonemes = conversion.tokens();

    if policy == PhonemePolicy::Strict {
        if let Some(unknown) = phonemes.iter().find(|p| !registry.phone.contains(p)) {
            return Err(TransformError::UnknownPhoneme {
                phoneme: unknown.clone(),
                reading: hiragana,
            });
        }
    }

    let expansion = expand_mora(&hiragana, registry)?;

    let ortho: Vec<String> = orig.chars().map(String::from).collect();
    let ortho_ids = registry.ortho.encode(&ortho);
    let phone_ids = registry.phone.encode(&phonemes);

    Ok(WordRecord {
        orig: orig.to_string(),
        reading: expansion.reading,
        ortho: Channel::new(ortho, ortho_ids),
        phone: Channel::new(phonemes, phone_ids),
        mora: Channel::new(expansion.resolved, expansion.mora_ids),
        mora_phone: Channel::new(expansion.mora_phonemes, expansion.mora_phoneme_ids),
        raw_mora: expansion.raw,
        unmapped: conversion.unmapped,
        dropped: expansion.dropped,
    })
}
