//! Error types for wirebuf.

use thiserror::Error;

/// Main error type for all buffer operations.
#[derive(Debug, Error)]
pub enum BufferError {
    /// A write would end past the 16-bit buffer length bound.
    #[error("Write of {width} bytes at offset {offset} exceeds maximum buffer length 65535")]
    LengthOverflow {
        /// Offset the write started at.
        offset: u16,
        /// Encoded width of the value.
        width: usize,
    },

    /// A schema named a type that has no wire encoding.
    #[error("Unsupported value type: {0}")]
    UnsupportedType(String),

    /// A checked read would run past the end of the buffer.
    #[error("Read of {width} bytes at offset {offset} exceeds buffer length {len}")]
    OutOfBounds {
        /// Offset the read started at.
        offset: usize,
        /// Bytes the read needed.
        width: usize,
        /// Actual buffer length.
        len: usize,
    },

    /// String content is not valid UTF-8 (strict decoding only).
    #[error("Invalid UTF-8 in string at offset {offset}: {source}")]
    InvalidUtf8 {
        /// Offset of the string's length prefix.
        offset: usize,
        /// Underlying decode failure.
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Result type alias using BufferError.
pub type Result<T> = std::result::Result<T, BufferError>;
