//! Hiragana-to-phoneme transducer.
//!
//! Converts a hiragana reading into space-separated Julius phonemes using a
//! trie over the kana rewrite rules, then folds repeated vowels and long
//! marks into `v:` tokens.

mod convert;
mod table;
mod trie;

pub use convert::{convert, phoneme_tokens, to_phonemes, PhonemeConversion, Segment};
pub use table::{rules, Rule, RuleTier};
pub use trie::{KanaTrie, TrieMatch};
