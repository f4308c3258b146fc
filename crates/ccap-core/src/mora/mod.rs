//! Mora segmentation and the mora-level phoneme/reversal transform.


mod expand;
mod table;
mod tokenizer;

pub use expand::{expand_mora, resolve_long_vowels, LongVowelCarry, MoraExpansion, TransformError};
pub use table::{known_morae, mora_entry, mora_phonemes};
pub use tokenizer::{mora_tokenize, morae, split_morae, MoraSplit, Morae};
