//! Character-level Unicode classification for Japanese text.

/// The prolonged sound mark. Katakana block, but it shows up in hiragana
/// readings too ("らーめん").
pub const LONG_VOWEL_MARK: char = 'ー';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes ー.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// "Wide" characters for spacing purposes: CJK ideographs, kana, CJK
/// symbols/punctuation and the half-/full-width forms block.
pub fn is_wide(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || is_hiragana(c)
        || is_katakana(c)
        || ('\u{3000}'..='\u{303F}').contains(&c)
        || ('\u{FF00}'..='\u{FFEF}').contains(&c)
}

/// Convert a katakana string to hiragana.
///
/// Only the letters with a hiragana counterpart (ァ..ヶ) move; ー, ・ and the
/// iteration marks stay in place.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
