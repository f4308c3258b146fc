use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Mora alternation, most specific branch first. Each branch lists the
/// hiragana class and its katakana twin.
const MORA_PATTERN: &str = concat!(
    // ふゅ
    "[ふフ][ゅュ]",
    // u-row + small ぁぃぇぉ
    "|[うくすつぬふむゆるぐずづぶぷゔ][ぁぃぇぉ]",
    "|[ウクスツヌフムユルグズヅブプヴ][ァィェォ]",
    // i-row (not い) + small ゃゅぇょ
    "|[きしちにひみりぎじぢびぴ][ゃゅぇょ]",
    "|[キシチニヒミリギジヂビピ][ャュェョ]",
    // て/で + small ぃゅ
    "|[てで][ぃゅ]",
    "|[テデ][ィュ]",
    // any single kana, long mark included
    "|[ぁ-ゔァ-ヴー]",
);

fn mora_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MORA_PATTERN).expect("mora pattern must be valid"))
}

/// Lazy mora iterator over a kana string. Characters outside every branch
/// are skipped. Cloning (or calling [`morae`] again) restarts from the
/// cloned position.
#[derive(Debug, Clone)]
pub struct Morae<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Morae<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let m = mora_regex().find_at(self.text, self.pos)?;
        self.pos = m.end();
        Some(m.as_str())
    }
}

pub fn morae(text: &str) -> Morae<'_> {
    Morae { text, pos: 0 }
}

/// Split kana into morae (`"きゃべつ"` → `["きゃ", "べ", "つ"]`).
pub fn mora_tokenize(text: &str) -> Vec<String> {
    morae(text).map(str::to_string).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoraSplit {
    pub morae: Vec<String>,
    /// Characters no branch matched, in order.
    pub dropped: Vec<char>,
}

/// Like [`mora_tokenize`], also reporting the characters that were skipped.
pub fn split_morae(text: &str) -> MoraSplit {
    let mut morae = Vec::new();
    let mut dropped = Vec::new();
    let mut last = 0;
    for m in mora_regex().find_iter(text) {
        dropped.extend(text[last..m.start()].chars());
        morae.push(m.as_str().to_string());
        last = m.end();
    }
    dropped.extend(text[last..].chars());
    MoraSplit { morae, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_kana() {
        assert_eq!(mora_tokenize("かきく"), vec!["か", "き", "く"]);
    }

    #[test]
    fn test_youon() {
        assert_eq!(mora_tokenize("きゃ"), vec!["きゃ"]);
        assert_eq!(mora_tokenize("きゃべつ"), vec!["きゃ", "べ", "つ"]);
        assert_eq!(mora_tokenize("しょうゆ"), vec!["しょ", "う", "ゆ"]);
    }

    #[test]
    fn test_foreign_sounds() {
        assert_eq!(mora_tokenize("ふぁいる"), vec!["ふぁ", "い", "る"]);
        assert_eq!(mora_tokenize("ふゅーじょん"), vec!["ふゅ", "ー", "じょ", "ん"]);
        assert_eq!(mora_tokenize("でぃすく"), vec!["でぃ", "す", "く"]);
        assert_eq!(mora_tokenize("うぃすきー"), vec!["うぃ", "す", "き", "ー"]);
        assert_eq!(mora_tokenize("ういすきー"), vec!["う", "い", "す", "き", "ー"]);
    }

    #[test]
    fn test_i_is_not_a_youon_head() {
        // い + ゃ is not a mora; ゃ falls through to the single-kana branch.
        assert_eq!(mora_tokenize("いゃ"), vec!["い", "ゃ"]);
    }

    #[test]
    fn test_long_mark_and_sokuon() {
        assert_eq!(mora_tokenize("すーぱー"), vec!["す", "ー", "ぱ", "ー"]);
        assert_eq!(mora_tokenize("きって"), vec!["き", "っ", "て"]);
    }

    #[test]
    fn test_katakana() {
        assert_eq!(mora_tokenize("キャベツ"), vec!["キャ", "ベ", "ツ"]);
        assert_eq!(mora_tokenize("ヴァイオリン"), vec!["ヴァ", "イ", "オ", "リ", "ン"]);
        assert_eq!(mora_tokenize("ティー"), vec!["ティ", "ー"]);
    }

    #[test]
    fn test_unmatched_characters_are_skipped() {
        assert_eq!(mora_tokenize("か1き"), vec!["か", "き"]);
        let split = split_morae("a か漢き!");
        assert_eq!(split.morae, vec!["か", "き"]);
        assert_eq!(split.dropped, vec!['a', ' ', '漢', '!']);
    }

    #[test]
    fn test_empty() {
        assert!(mora_tokenize("").is_empty());
        assert_eq!(morae("").next(), None);
    }

    #[test]
    fn test_iterator_restarts() {
        let it = morae("ばす");
        let first: Vec<&str> = it.clone().collect();
        let second: Vec<&str> = it.collect();
        assert_eq!(first, second);
        assert_eq!(morae("ばす").count(), 2);
    }
}
