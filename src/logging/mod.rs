//! Logging setup for the SDK and the CLI.
//!
//! Structured logging through `tracing`, with text, JSON, and compact output
//! formats plus optional file logging.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use suivote_rs::logging::{init_default_logging, init_logging, LoggingConfig, LogFormat};
//!
//! // Initialize with defaults (INFO level, text format)
//! init_default_logging();
//!
//! // Or configure explicitly
//! let config = LoggingConfig {
//!     debug: true,
//!     format: LogFormat::Json,
//!     ..Default::default()
//! };
//! init_logging(&config);
//! ```

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::LoggingSettings;

/// Initialization guard so logging is only wired once per process.
static INIT: Once = Once::new();

/// Whether logging has been initialized.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Keeps the non-blocking file writer alive for the program's lifetime.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text with timestamps.
    #[default]
    Text,
    /// JSON for log aggregation.
    Json,
    /// `[LEVEL] message` for development.
    Compact,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Compact => write!(f, "compact"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!(
                "Invalid log format '{}'. Valid options: text, json, compact",
                s
            )),
        }
    }
}

/// Full logging configuration, extending [`LoggingSettings`] with the output
/// format.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Enable debug-level logging.
    pub debug: bool,
    /// Enable trace-level logging (overrides `debug`).
    pub trace: bool,
    /// Also write logs to a file.
    pub record_log: bool,
    /// Directory for log files (supports `~`).
    pub logging_dir: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let settings = LoggingSettings::default();
        Self {
            debug: settings.debug,
            trace: false,
            record_log: settings.record_log,
            logging_dir: settings.logging_dir,
            format: LogFormat::default(),
        }
    }
}

impl From<&LoggingSettings> for LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            debug: settings.debug,
            trace: false,
            record_log: settings.record_log,
            logging_dir: settings.logging_dir.clone(),
            format: LogFormat::default(),
        }
    }
}

/// Whether logging has already been initialized.
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

/// Initialize logging with defaults (INFO level, text format).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

/// Initialize the global tracing subscriber. Subsequent calls are no-ops.
///
/// `RUST_LOG` overrides the level derived from the config.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let level = if config.trace {
            "trace"
        } else if config.debug {
            "debug"
        } else {
            "info"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("suivote_rs={level},daocli={level},warn")));

        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
        layers.push(match config.format {
            LogFormat::Text => fmt::layer().boxed(),
            LogFormat::Json => fmt::layer().json().boxed(),
            LogFormat::Compact => fmt::layer().compact().without_time().boxed(),
        });

        if config.record_log {
            match resolve_log_dir(&config.logging_dir) {
                Some(dir) => match std::fs::create_dir_all(&dir) {
                    Ok(()) => {
                        let appender = tracing_appender::rolling::daily(&dir, "suivote.log");
                        let (writer, guard) = tracing_appender::non_blocking(appender);
                        let _ = FILE_GUARD.set(guard);
                        layers.push(fmt::layer().with_writer(writer).with_ansi(false).boxed());
                    }
                    Err(e) => {
                        eprintln!("could not create log directory {}: {}", dir.display(), e);
                    }
                },
                None => {
                    eprintln!("could not resolve log directory '{}'", config.logging_dir);
                }
            }
        }

        tracing_subscriber::registry().with(layers).with(filter).init();
        INITIALIZED.store(true, Ordering::SeqCst);
    });
}

/// Expand a leading `~` to the home directory.
fn resolve_log_dir(raw: &str) -> Option<PathBuf> {
    if let Some(rest) = raw.strip_prefix("~/") {
        dirs::home_dir().map(|home| home.join(rest))
    } else if raw == "~" {
        dirs::home_dir()
    } else {
        Some(PathBuf::from(raw))
    }
}
