//! Logging setup for binaries embedding the library.
//!
//! Logs go to stderr so stdout stays clean for machine-readable output.
//! `RUST_LOG` takes precedence over the programmatic level.

use tracing_subscriber::{fmt, EnvFilter};

/// Log level selection for [`init_logging`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Disable logging entirely.
    Off,
}

impl From<u8> for LogLevel {
    /// Convert a `-v` flag count to a log level.
    /// 0 = Info, 1 = Debug, 2+ = Trace
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at startup. A `RUST_LOG` environment variable overrides
/// `level`.
pub fn init_logging(level: LogLevel) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level.directive())
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
