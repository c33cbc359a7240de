//! JSON trace output for the binary, off unless `--logs` is given.

use crate::config::CliConfig;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Trace file location: `BOXMAKER_TRACE_LOG` or `boxmaker_trace.jsonl` in the temp dir.
pub fn tracing_log_path() -> PathBuf {
    env::var("BOXMAKER_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("boxmaker_trace.jsonl"))
}

pub fn tracing_enabled(config: &CliConfig) -> bool {
    config.logs && !config.no_logs
}

/// Install the global JSON subscriber once. Failure to open the trace file
/// leaves tracing disabled rather than aborting the render.
pub fn init_tracing(config: &CliConfig) {
    if !tracing_enabled(config) {
        return;
    }

    let _ = TRACING_INIT.get_or_init(|| {
        let path = tracing_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_max_level(tracing::Level::TRACE)
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
