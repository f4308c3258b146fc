use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::{debug, debug_span, info};

use super::record::{transcribe, PhonemePolicy};
use super::source::{EmbeddingLookup, ReadingSupplier};
use super::{Corpus, Exclusion, ExclusionReason, Split};
use crate::normalize::{normalize, normalize_with_passes};
use crate::settings::{settings, Settings};
use crate::vocab::VocabRegistry;

/// JIS X 0208 symbols plus the full-width Latin letters. A training word made
/// only of these carries no lexical content.
const JA_SYMBOLS: &str = "、。，．・：；？！゛゜´' #+ '｀¨＾‾＿ヽヾゝゞ〃仝々〆〇ー—‐／＼〜‖｜…‥‘’“”（）〔〕［］｛｝〈〉《》「」『』【】＋−±×÷＝≠＜＞≦≧∞∴♂♀°′″℃¥＄¢£％＃＆＊＠§☆★○●◎◇◆□■△▲▽▼※〒→←↑↓〓∈∋⊆⊇⊂⊃∪∩∧∨¬⇒⇔∀∃∠⊥⌒∂∇≡≒≪≫√∽∝∵∫∬Å‰♯♭♪†‡¶◯#ＡＢＣＤＥＦＧＨＩＪＫＬＭＮＯＰＱＲＳＴＵＶＷＸＹＺａｂｃｄｅｆｇｈｉｊｋｌｍｎｏｐｑｒｓｔｕｖｗｘｙｚ";

/// Symbol characters, in both raw and normalized form.
fn symbol_set() -> &'static HashSet<char> {
    static SET: OnceLock<HashSet<char>> = OnceLock::new();
    SET.get_or_init(|| JA_SYMBOLS.chars().chain(normalize(JA_SYMBOLS).chars()).collect())
}

/// True when `word` is non-empty and every character is a symbol.
pub fn is_symbol_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| symbol_set().contains(&c))
}

/// Knobs for [`DatasetAssembler`], normally taken from the `[corpus]`,
/// `[filter]` and `[normalize]` settings sections.
#[derive(Debug, Clone)]
pub struct AssemblyOptions {
    pub train_size: usize,
    pub test_delimiter: String,
    pub skip_ascii: bool,
    pub skip_symbols: bool,
    pub strip_chars: Vec<String>,
    pub substitutions: Vec<(String, String)>,
    pub max_passes: usize,
}

impl AssemblyOptions {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            train_size: s.corpus.train_size,
            test_delimiter: s.corpus.test_delimiter.clone(),
            skip_ascii: s.filter.skip_ascii,
            skip_symbols: s.filter.skip_symbols,
            strip_chars: s.filter.strip_chars.clone(),
            substitutions: s
                .filter
                .substitutions
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            max_passes: s.normalize.max_passes,
        }
    }
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self::from_settings(settings())
    }
}

/// Builds a [`Corpus`] from a frequency-ranked training list and test
/// entries.
pub struct DatasetAssembler<'a> {
    readings: &'a dyn ReadingSupplier,
    embeddings: &'a dyn EmbeddingLookup,
    options: AssemblyOptions,
}

impl<'a> DatasetAssembler<'a> {
    pub fn new(readings: &'a dyn ReadingSupplier, embeddings: &'a dyn EmbeddingLookup) -> Self {
        Self {
            readings,
            embeddings,
            options: AssemblyOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AssemblyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AssemblyOptions {
        &self.options
    }

    /// Split each entry on the test delimiter and keep the words that have
    /// an embedding.
    pub fn test_words(&self, entries: &[String]) -> Vec<String> {
        entries
            .iter()
            .flat_map(|entry| entry.split(self.options.test_delimiter.as_str()))
            .map(str::trim)
            .filter(|w| !w.is_empty() && self.embeddings.has(w))
            .map(str::to_string)
            .collect()
    }

    /// Normalize a raw training word and apply the strip/substitution
    /// filters.
    pub fn clean_train_word(&self, raw: &str) -> String {
        let mut word = normalize_with_passes(raw, self.options.max_passes);
        for strip in &self.options.strip_chars {
            word = word.replace(strip.as_str(), "");
        }
        for (from, to) in &self.options.substitutions {
            word = word.replace(from.as_str(), to);
        }
        word
    }

    /// Whether a cleaned training word is filtered out before transcription.
    fn skip_reason(&self, word: &str, test: &HashSet<String>) -> Option<&'static str> {
        if self.options.skip_symbols && is_symbol_word(word) {
            Some("symbols")
        } else if self.options.skip_ascii && word.is_ascii() {
            Some("ascii")
        } else if !self.embeddings.has(word) {
            Some("no embedding")
        } else if test.contains(word) {
            Some("test word")
        } else {
            None
        }
    }

    /// Assemble training records (walking `frequency_words` in order until
    /// `train_size` are accepted), then test records.
    ///
    /// Training phonemes must already be in the phoneme vocabulary; test
    /// words may extend it. Rejected words are recorded and assembly goes on.
    pub fn assemble(
        &self,
        frequency_words: &[String],
        test_entries: &[String],
        registry: &mut VocabRegistry,
    ) -> Corpus {
        let _span = debug_span!("assemble", train_size = self.options.train_size).entered();

        let test_words = self.test_words(test_entries);
        let test_set: HashSet<String> = test_words.iter().cloned().collect();
        let mut corpus = Corpus::default();
        let mut seen: HashSet<String> = HashSet::new();

        for raw in frequency_words {
            if corpus.train.len() >= self.options.train_size {
                break;
            }
            if raw == "\u{3000}" {
                continue;
            }
            let word = self.clean_train_word(raw);
            if word.is_empty() {
                corpus.exclude(raw, Split::Train, ExclusionReason::Empty);
                continue;
            }
            if let Some(reason) = self.skip_reason(&word, &test_set) {
                debug!(word = %word, reason, "skipped");
                continue;
            }
            if !seen.insert(word.clone()) {
                continue;
            }
            self.add(&word, Split::Train, PhonemePolicy::Strict, registry, &mut corpus);
        }

        for word in &test_words {
            self.add(word, Split::Test, PhonemePolicy::Extend, registry, &mut corpus);
        }

        info!(
            train = corpus.train.len(),
            test = corpus.test.len(),
            excluded = corpus.excluded.len(),
            "corpus assembled"
        );
        corpus
    }

    fn add(
        &self,
        word: &str,
        split: Split,
        policy: PhonemePolicy,
        registry: &mut VocabRegistry,
        corpus: &mut Corpus,
    ) {
        let reading = match self.readings.reading_of(word) {
            Some(r) if r.trim().is_empty() => {
                corpus.exclude(word, split, ExclusionReason::Empty);
                return;
            }
            Some(r) => r,
            None => {
                corpus.exclude(word, split, ExclusionReason::NoReading);
                return;
            }
        };
        match transcribe(word, reading.trim(), registry, policy) {
            Ok(record) => {
                corpus.max_lengths.update(&record);
                match split {
                    Split::Train => corpus.train.push(record),
                    Split::Test => corpus.test.push(record),
                }
            }
            Err(e) => corpus.exclude(word, split, e.into()),
        }
    }
}

impl Corpus {
    fn exclude(&mut self, word: &str, split: Split, reason: ExclusionReason) {
        debug!(word, ?split, ?reason, "excluded");
        self.excluded.push(Exclusion {
            word: word.to_string(),
            split,
            reason,
        });
    }
}
