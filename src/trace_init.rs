#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::{Mutex, Once};

#[cfg(feature = "trace")]
use tracing_appender::non_blocking::WorkerGuard;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Writer guard of the installed subscriber. Dropping it flushes the queue
/// and joins the writer thread.
#[cfg(feature = "trace")]
static GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install a JSON subscriber writing to `ccap-trace.jsonl` under `log_dir`.
/// `RUST_LOG` overrides the default filter. Only the first call has effect.
///
/// Call [`finish_tracing`] before the process exits, or queued lines are lost.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "ccap-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        if let Ok(mut slot) = GUARD.lock() {
            *slot = Some(guard);
        }

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("ccap_core=debug,ccap_engine=debug")
                }),
            )
            .init();
    });
}

/// Flush everything logged so far and stop the writer. Events after this
/// call are discarded. A no-op when tracing was never installed.
#[cfg(feature = "trace")]
pub fn finish_tracing() {
    let guard = GUARD.lock().ok().and_then(|mut slot| slot.take());
    drop(guard);
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}

#[cfg(not(feature = "trace"))]
pub fn finish_tracing() {}
