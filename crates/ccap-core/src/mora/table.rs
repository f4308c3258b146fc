//! Fixed mora → phoneme table.
//!
//! Unlike the word-level transducer this maps each mora on its own, so a
//! long vowel shows up as a repeated vowel rather than `v:`.

use std::collections::HashMap;
use std::sync::OnceLock;

const MORA_PHONEMES: &[(&str, &[&str])] = &[
    ("ぁ", &["a"]),
    ("あ", &["a"]),
    ("ぃ", &["i"]),
    ("い", &["i"]),
    ("ぅ", &["u"]),
    ("う", &["u"]),
    ("うぃ", &["w", "i"]),
    ("うぇ", &["w", "e"]),
    ("うぉ", &["w", "o"]),
    ("ぇ", &["e"]),
    ("え", &["e"]),
    ("お", &["o"]),
    ("か", &["k", "a"]),
    ("が", &["g", "a"]),
    ("き", &["k", "i"]),
    ("きゃ", &["ky", "a"]),
    ("きゅ", &["ky", "u"]),
    ("きょ", &["ky", "o"]),
    ("ぎ", &["g", "i"]),
    ("ぎゃ", &["gy", "a"]),
    ("ぎゅ", &["gy", "u"]),
    ("ぎょ", &["gy", "o"]),
    ("く", &["k", "u"]),
    ("くぁ", &["k", "u", "a"]),
    ("くぉ", &["k", "u", "o"]),
    ("ぐ", &["g", "u"]),
    ("ぐぁ", &["g", "u", "a"]),
    ("け", &["k", "e"]),
    ("げ", &["g", "e"]),
    ("こ", &["k", "o"]),
    ("ご", &["g", "o"]),
    ("さ", &["s", "a"]),
    ("ざ", &["z", "a"]),
    ("し", &["sh", "i"]),
    ("しぇ", &["sh", "e"]),
    ("しゃ", &["sh", "a"]),
    ("しゅ", &["sh", "u"]),
    ("しょ", &["sh", "o"]),
    ("じ", &["j", "i"]),
    ("じぇ", &["j", "e"]),
    ("じゃ", &["j", "a"]),
    ("じゅ", &["j", "u"]),
    ("じょ", &["j", "o"]),
    ("す", &["s", "u"]),
    ("ず", &["z", "u"]),
    ("せ", &["s", "e"]),
    ("ぜ", &["z", "e"]),
    ("そ", &["s", "o"]),
    ("ぞ", &["z", "o"]),
    ("た", &["t", "a"]),
    ("だ", &["d", "a"]),
    ("ち", &["ch", "i"]),
    ("ちぇ", &["ch", "e"]),
    ("ちゃ", &["ch", "a"]),
    ("ちゅ", &["ch", "u"]),
    ("ちょ", &["ch", "o"]),
    ("ぢ", &["j", "i"]),
    ("ぢゃ", &["j", "a"]),
    ("ぢょ", &["j", "o"]),
    ("っ", &["q"]),
    ("つ", &["ts", "u"]),
    ("つぁ", &["ts", "a"]),
    ("つぃ", &["ts", "i"]),
    ("つぇ", &["ts", "e"]),
    ("つぉ", &["ts", "o"]),
    ("づ", &["z", "u"]),
    ("て", &["t", "e"]),
    ("てぃ", &["t", "i"]),
    ("で", &["d", "e"]),
    ("でぃ", &["d", "i"]),
    ("でゅ", &["dy", "u"]),
    ("と", &["t", "o"]),
    ("ど", &["d", "o"]),
    ("な", &["n", "a"]),
    ("に", &["n", "i"]),
    ("にぇ", &["n", "i", "e"]),
    ("にゃ", &["ny", "a"]),
    ("にゅ", &["ny", "u"]),
    ("にょ", &["ny", "o"]),
    ("ぬ", &["n", "u"]),
    ("ね", &["n", "e"]),
    ("の", &["n", "o"]),
    ("は", &["h", "a"]),
    ("ば", &["b", "a"]),
    ("ぱ", &["p", "a"]),
    ("ひ", &["h", "i"]),
    ("ひゃ", &["hy", "a"]),
    ("ひゅ", &["hy", "u"]),
    ("ひょ", &["hy", "o"]),
    ("び", &["b", "i"]),
    ("びゃ", &["by", "a"]),
    ("びゅ", &["by", "u"]),
    ("びょ", &["by", "o"]),
    ("ぴ", &["p", "i"]),
    ("ぴゃ", &["py", "a"]),
    ("ぴゅ", &["py", "u"]),
    ("ぴょ", &["py", "o"]),
    ("ふ", &["f", "u"]),
    ("ふぁ", &["f", "a"]),
    ("ふぃ", &["f", "i"]),
    ("ふぇ", &["f", "e"]),
    ("ふぉ", &["f", "o"]),
    ("ふゅ", &["hy", "u"]),
    ("ぶ", &["b", "u"]),
    ("ぷ", &["p", "u"]),
    ("へ", &["h", "e"]),
    ("べ", &["b", "e"]),
    ("ぺ", &["p", "e"]),
    ("ほ", &["h", "o"]),
    ("ぼ", &["b", "o"]),
    ("ぽ", &["p", "o"]),
    ("ま", &["m", "a"]),
    ("み", &["m", "i"]),
    ("みゃ", &["my", "a"]),
    ("みゅ", &["my", "u"]),
    ("みょ", &["my", "o"]),
    ("む", &["m", "u"]),
    ("め", &["m", "e"]),
    ("も", &["m", "o"]),
    ("や", &["y", "a"]),
    ("ゆ", &["y", "u"]),
    ("よ", &["y", "o"]),
    ("ら", &["r", "a"]),
    ("り", &["r", "i"]),
    ("りゃ", &["ry", "a"]),
    ("りゅ", &["ry", "u"]),
    ("りょ", &["ry", "o"]),
    ("る", &["r", "u"]),
    ("れ", &["r", "e"]),
    ("ろ", &["r", "o"]),
    ("ゎ", &["w", "a"]),
    ("わ", &["w", "a"]),
    ("ゐ", &["i"]),
    ("ゑ", &["e"]),
    ("を", &["o"]),
    ("ん", &["N"]),
    ("ー", &[":"]),
];

fn table() -> &'static HashMap<&'static str, &'static [&'static str]> {
    static TABLE: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();
    TABLE.get_or_init(|| MORA_PHONEMES.iter().copied().collect())
}

/// Phonemes of a single hiragana mora, or `None` if the mora is not in the
/// table.
pub fn mora_phonemes(mora: &str) -> Option<&'static [&'static str]> {
    table().get(mora).copied()
}

/// Like [`mora_phonemes`], also returning the table's own copy of the key.
pub fn mora_entry(mora: &str) -> Option<(&'static str, &'static [&'static str])> {
    table().get_key_value(mora).map(|(&k, &v)| (k, v))
}

/// Every mora the table knows, in table order.
pub fn known_morae() -> impl Iterator<Item = &'static str> {
    MORA_PHONEMES.iter().map(|&(mora, _)| mora)
}
