//! Japanese orthography → reading → phoneme → mora pipeline.
//!
//! The pipeline itself lives in `ccap_core` and is re-exported here; this
//! crate adds the thread-safe [`api::Engine`] and tracing setup.

pub mod api;
pub mod trace_init;

pub use ccap_core::{dataset, mora, normalize, phoneme, settings, unicode, vocab};
