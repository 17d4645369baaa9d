//! Errors raised while processing function requests.

use std::io;

use thiserror::Error;

/// Errors raised by the request processor.
///
/// Only [`UdfError::Io`] and [`UdfError::Encode`] end a stream. A
/// [`UdfError::Parse`] is local to the line it was raised for.
#[derive(Debug, Error)]
pub enum UdfError {
    /// A request line was not valid JSON of the expected shape.
    #[error("line {line}: could not parse input: {source}")]
    Parse {
        /// 1-based number of the offending line.
        line: usize,
        /// Error raised by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A response could not be serialised.
    #[error("could not encode response: {0}")]
    Encode(#[source] serde_json::Error),
    /// Reading requests or writing responses failed.
    #[error("I/O failure on the request stream: {0}")]
    Io(#[from] io::Error),
}

impl UdfError {
    /// Returns `true` if the error only affects a single request line.
    pub fn is_line_local(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
