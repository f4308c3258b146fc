use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use serde::Serialize;
use tracing::warn;

use super::table::{deferred, RuleTier};
use super::trie::KanaTrie;

/// Characters rewritten to the length mark `:` once all kana are converted.
const LONG_MARKS: &[char] = &['ー', '－', '〜', '−', '-'];

/// Small u with a voicing mark. Its rule outranks every `Xぅ` combination,
/// so a match may not run into it.
const VOICED_SMALL_U: &str = "ぅ゛";

const VOWELS: [&str; 5] = ["a", "i", "u", "e", "o"];

/// One step of the scan: either a matched rule or a pass-through character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub source: String,
    /// `None` when no rule matched and the source passed through unchanged.
    pub tier: Option<RuleTier>,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonemeConversion {
    /// Space-separated Julius phonemes.
    pub phonemes: String,
    /// Characters no rule covered, in order of appearance. They are still
    /// present (unchanged) in `phonemes`.
    pub unmapped: Vec<char>,
    pub segments: Vec<Segment>,
}

impl PhonemeConversion {
    pub fn tokens(&self) -> Vec<String> {
        phoneme_tokens(&self.phonemes)
    }

    pub fn is_clean(&self) -> bool {
        self.unmapped.is_empty()
    }
}

/// Convert a hiragana string to space-separated Julius phonemes.
///
/// Unmapped characters pass through unchanged; use [`convert`] to see them.
pub fn to_phonemes(hiragana: &str) -> String {
    convert(hiragana).phonemes
}

/// Split a phoneme string into tokens.
pub fn phoneme_tokens(phonemes: &str) -> Vec<String> {
    phonemes.split_whitespace().map(str::to_string).collect()
}

/// Convert with full diagnostics: per-segment provenance and the list of
/// characters that matched no rule.
pub fn convert(hiragana: &str) -> PhonemeConversion {
    let trie = KanaTrie::global();
    let mut raw = String::with_capacity(hiragana.len() * 3);
    let mut segments = Vec::new();
    let mut unmapped = Vec::new();

    let mut rest = hiragana;
    while let Some(c) = rest.chars().next() {
        if let Some(phonemes) = deferred(c) {
            raw.push(c);
            segments.push(Segment {
                source: c.to_string(),
                tier: Some(RuleTier::Deferred),
                output: phonemes.trim_start().to_string(),
            });
            rest = &rest[c.len_utf8()..];
            continue;
        }
        match trie.longest_match(match_window(rest)) {
            Some(m) => {
                raw.push_str(m.phonemes);
                segments.push(Segment {
                    source: rest[..m.len].to_string(),
                    tier: Some(m.tier),
                    output: m.phonemes.trim_start().to_string(),
                });
                rest = &rest[m.len..];
            }
            None => {
                raw.push(c);
                if !c.is_whitespace() && !LONG_MARKS.contains(&c) {
                    unmapped.push(c);
                }
                segments.push(Segment {
                    source: c.to_string(),
                    tier: None,
                    output: c.to_string(),
                });
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !unmapped.is_empty() {
        warn!(input = hiragana, ?unmapped, "characters without a phoneme rule");
    }

    PhonemeConversion {
        phonemes: postprocess(&raw),
        unmapped,
        segments,
    }
}

/// `rest` cut short of the next `ぅ゛`, unless it starts there.
fn match_window(rest: &str) -> &str {
    match rest.find(VOICED_SMALL_U) {
        Some(i) if i > 0 => &rest[..i],
        _ => rest,
    }
}

fn long_vowel_patterns() -> &'static [(Regex, String)] {
    static PATTERNS: OnceLock<Vec<(Regex, String)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        VOWELS
            .iter()
            .map(|v| {
                let re = Regex::new(&format!("( {v}){{2,}}")).expect("vowel pattern must be valid");
                (re, format!(" {v}:"))
            })
            .collect()
    })
}

/// Long-vowel contraction over the raw rule output:
/// repeated vowels → `v:`, `o u` → `o:`, then the remaining long marks → `:`.
/// Deferred kana are rewritten last.
fn postprocess(raw: &str) -> String {
    let mut text = raw.to_string();
    for (re, replacement) in long_vowel_patterns() {
        text = re
            .replace_all(&text, NoExpand(replacement.as_str()))
            .into_owned();
    }
    let text = text.replace("o u", "o:");
    let text: String = text
        .chars()
        .map(|c| if LONG_MARKS.contains(&c) { ':' } else { c })
        .collect();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match deferred(c) {
            Some(phonemes) => out.push_str(phonemes),
            None => out.push(c),
        }
    }
    out.trim().to_string()
}
