//! Error types for parcel reads and writes.

use thiserror::Error;

/// Errors raised while writing or reading a parcel.
///
/// Every read-side variant means the stream is malformed: a read that fails
/// never hands back a partially built record.
#[derive(Debug, Error)]
pub enum ParcelError {
    /// The stream ended before the requested item.
    #[error("stream truncated: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    /// A length prefix was negative and not the null marker.
    #[error("invalid length prefix: {0}")]
    InvalidLength(i32),

    /// A list declared more elements than the stream can possibly hold.
    #[error("element count {declared} cannot fit in {remaining} remaining bytes")]
    CountMismatch { declared: usize, remaining: usize },

    /// An element carried a different type descriptor than the one expected.
    #[error("unexpected element type: expected {expected}, got {actual}")]
    UnexpectedType {
        expected: &'static str,
        actual: String,
    },

    /// A null marker appeared where a value is required.
    #[error("unexpected null for {0}")]
    UnexpectedNull(&'static str),

    /// A boolean slot held something other than 0 or 1.
    #[error("invalid boolean value: {0}")]
    InvalidBool(i32),

    /// String bytes were not valid UTF-8.
    #[error("invalid utf8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A length exceeded the configured limit.
    #[error("{what} of {actual} exceeds limit {limit}")]
    LimitExceeded {
        what: &'static str,
        limit: usize,
        actual: usize,
    },

    /// Bytes were left over after the top-level record was read.
    #[error("{0} trailing bytes after record")]
    TrailingData(usize),

    /// A seek targeted a position past the end of the data.
    #[error("position {position} is past data size {size}")]
    InvalidPosition { position: usize, size: usize },
}
