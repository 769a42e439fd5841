//! Logging initialisation for the linkage CLI.
//!
//! Installs a global `tracing` subscriber writing to `stderr`, in either a
//! human-readable or JSON layout, and bridges the `log` facade so crates using
//! either API emit structured events.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the log layout.
pub const LOG_FORMAT_ENV: &str = "LINKAGE_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `LINKAGE_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Layout used for diagnostics on `stderr`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain text lines.
    #[default]
    Human,
    /// One JSON object per line, including the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    /// Reads the format from `LINKAGE_LOG_FORMAT`, defaulting to
    /// [`LogFormat::Human`] when unset.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the variable is not valid Unicode or
    /// names an unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Install global structured logging if it has not already been configured.
///
/// The log level is controlled via `RUST_LOG` and defaults to `info`.
/// Diagnostics go to `stderr` so the summary on `stdout` stays parseable.
///
/// # Errors
/// Returns [`LoggingError`] if `LINKAGE_LOG_FORMAT` is invalid or the
/// subscriber cannot be installed.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber(LogFormat::from_env()?) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            tracing::debug!(%source, "structured logging already configured elsewhere");
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    // Another logger may already own the `log` slot; keep it if so.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn log_format_accepts_supported_values(#[case] raw: &str, #[case] expected: LogFormat) {
        let format: LogFormat = raw.parse().expect("format must parse");
        assert_eq!(format, expected);
    }

    #[test]
    fn log_format_rejects_unknown_values() {
        let err = "xml".parse::<LogFormat>().expect_err("xml is not supported");
        match err {
            LoggingError::UnsupportedFormat { provided } => assert_eq!(provided, "xml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().expect("logging must initialise");
        init_logging().expect("subsequent calls must be no-ops");
    }
}
