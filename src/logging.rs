//! Diagnostics for the `bpuf` binary.
//!
//! ClickHouse reads function results from stdout, so every event goes to stderr.
//! The subscriber also forwards records sent through the `log` facade.

use std::{env, fmt, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FORMAT_ENV: &str = "BPUF_LOG_FORMAT";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// How events are rendered on stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One plain text line per event.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Reads the format from `BPUF_LOG_FORMAT`, or gives [`LogFormat::Human`] if it is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError::UnsupportedFormat`] for any other value, including one
    /// that is not valid unicode.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var_os(LOG_FORMAT_ENV) {
            None => Ok(Self::default()),
            Some(raw) => match raw.to_str() {
                Some(raw) => raw.parse(),
                None => Err(LoggingError::UnsupportedFormat {
                    provided: raw.to_string_lossy().into_owned(),
                }),
            },
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if trimmed.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(LoggingError::UnsupportedFormat {
                provided: trimmed.to_owned(),
            })
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Json => "json",
        })
    }
}

/// Errors raised while setting up diagnostics.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("`BPUF_LOG_FORMAT` must be `human` or `json`, got `{provided}`")]
    UnsupportedFormat {
        provided: String,
    },
    #[error("another global subscriber is already installed: {source}")]
    InstallFailed {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Sets up diagnostics in the format named by `BPUF_LOG_FORMAT`.
///
/// The level comes from `RUST_LOG` and is `info` when unset. A subscriber that was
/// installed by someone else is left in place and noted on stderr.
///
/// # Errors
/// Returns [`LoggingError::UnsupportedFormat`] if `BPUF_LOG_FORMAT` is not recognized.
pub fn init_logging() -> Result<(), LoggingError> {
    match init_logging_with(LogFormat::from_env()?) {
        Err(LoggingError::InstallFailed { source }) => {
            eprintln!("keeping the existing subscriber: {source}");
            Ok(())
        }
        result => result,
    }
}

/// Installs the global subscriber with the given `format`.
///
/// Only the first successful call installs anything; later calls return `Ok(())`
/// and keep the format that was installed first.
///
/// # Errors
/// Returns [`LoggingError::InstallFailed`] if a global subscriber or `log` logger
/// was already set outside this module.
pub fn init_logging_with(format: LogFormat) -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(std::io::stderr);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
    };

    // `try_init` also takes the `log` slot, so nothing else may claim it first.
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })?;

    let _ = INSTALLED.set(format);
    Ok(())
}

/// Returns the format of the installed subscriber, if this module installed one.
pub fn installed_format() -> Option<LogFormat> {
    INSTALLED.get().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("json", LogFormat::Json)]
    #[case("Json\n", LogFormat::Json)]
    #[case("human", LogFormat::Human)]
    #[case("", LogFormat::Human)]
    fn formats_are_read_case_insensitively(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().ok(), Some(expected));
    }

    #[rstest]
    #[case("pretty")]
    #[case("jsonl")]
    fn unknown_formats_name_the_variable(#[case] raw: &str) {
        let err = raw.parse::<LogFormat>().expect_err("format must be rejected");

        assert!(matches!(&err, LoggingError::UnsupportedFormat { provided } if provided == raw));
        assert!(err.to_string().contains(LOG_FORMAT_ENV));
    }

    #[test]
    fn display_matches_the_accepted_spelling() {
        for format in [LogFormat::Human, LogFormat::Json] {
            assert_eq!(format.to_string().parse::<LogFormat>().ok(), Some(format));
        }
    }
}
