use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use tracing::debug_span;

use ccap_core::dataset::{transcribe, Corpus, DatasetAssembler, PhonemePolicy, WordRecord};
use ccap_core::mora::{expand_mora, MoraExpansion};
use ccap_core::vocab::{VocabKind, VocabRegistry};

use super::{EngineError, WordInput};

/// Shared front end over one [`VocabRegistry`].
///
/// Each word is transformed under the registry lock, so concurrent callers
/// never interleave inside a word. Id assignment follows lock acquisition
/// order; use [`transcribe_batch`](Self::transcribe_batch) when ids must be
/// reproducible.
pub struct Engine {
    registry: Mutex<VocabRegistry>,
    policy: PhonemePolicy,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_registry(VocabRegistry::new())
    }

    pub fn with_registry(registry: VocabRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
            policy: PhonemePolicy::Extend,
        }
    }

    /// Policy for phonemes outside the phoneme vocabulary (default: extend).
    pub fn with_policy(mut self, policy: PhonemePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load a registry saved by [`save`](Self::save).
    pub fn open(path: &Path) -> Result<Self, EngineError> {
        Ok(Self::with_registry(VocabRegistry::load(path)?))
    }

    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        self.lock()?.save(path)?;
        Ok(())
    }

    pub fn transcribe(&self, orig: &str, reading: &str) -> Result<WordRecord, EngineError> {
        let mut registry = self.lock()?;
        Ok(transcribe(orig, reading, &mut registry, self.policy)?)
    }

    /// Transcribe `words` in order. A failed word does not stop the batch.
    pub fn transcribe_batch(&self, words: &[WordInput]) -> Vec<Result<WordRecord, EngineError>> {
        let _span = debug_span!("transcribe_batch", words = words.len()).entered();
        words
            .iter()
            .map(|w| self.transcribe(&w.orig, &w.reading))
            .collect()
    }

    pub fn expand(&self, reading: &str) -> Result<MoraExpansion, EngineError> {
        let mut registry = self.lock()?;
        Ok(expand_mora(reading, &mut registry)?)
    }

    /// Run a full corpus assembly against the shared registry. The lock is
    /// held for the whole run.
    pub fn assemble(
        &self,
        assembler: &DatasetAssembler<'_>,
        frequency_words: &[String],
        test_entries: &[String],
    ) -> Result<Corpus, EngineError> {
        let mut registry = self.lock()?;
        Ok(assembler.assemble(frequency_words, test_entries, &mut registry))
    }

    /// Tokens of one vocabulary, in id order.
    pub fn vocabulary(&self, kind: VocabKind) -> Result<Vec<String>, EngineError> {
        Ok(self.lock()?.get(kind).tokens().to_vec())
    }

    pub fn snapshot(&self) -> Result<VocabRegistry, EngineError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, VocabRegistry>, EngineError> {
        self.registry
            .lock()
            .map_err(|e| EngineError::Internal { msg: e.to_string() })
    }
}
