//! Closed alphabets the phoneme vocabularies start from.
//!
//! The order fixes the ids: index 4 onward, right after the control tokens.

/// Julius phonemes, in the order the phoneme vocabulary assigns ids.
pub const PHONE_SEED: &[&str] = &[
    "n", "o", "h", "a", "i", "t", "g", "r", "u", "d", "e", "sh", "q", "m", "k", "s", "y", "p",
    "N", "b", "ts", "o:", "ky", "f", "w", "ch", "ry", "gy", "u:", "z", "j", "py", "hy", "i:",
    "e:", "a:", "by", "ny", "my", "dy", "a::", "u::", "o::",
];

/// Phonemes produced by the per-mora table.
pub const MORA_PHONE_SEED: &[&str] = &[
    "N", "a", "b", "by", "ch", "d", "dy", "e", "f", "g", "gy", "h", "hy", "i", "j", "k", "ky",
    "m", "my", "n", "ny", "o", "p", "py", "q", "r", "ry", "s", "sh", "t", "ts", "u", "w", "y",
    "z",
];
