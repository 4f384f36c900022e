use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the log file path for the interactive screen.
pub const LOG_ENV_VAR: &str = "PAYFLOW_LOG";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Append to the file named by `PAYFLOW_LOG`; no logging when unset.
    /// Anything written to the terminal would corrupt the screen.
    FileFromEnv,
    /// Plain stderr, for headless runs.
    Stderr,
}

/// Initialize tracing. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(output: LogOutput) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match output {
        LogOutput::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
        LogOutput::FileFromEnv => {
            let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
                return;
            };

            let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!("Warning: Failed to open log file {}: {}", log_path, err);
                    return;
                }
            };

            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
    }
}
