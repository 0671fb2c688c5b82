//! Error types for container encoding and decoding.
//!
//! This module provides a unified error type for everything the codec can
//! report: per-chunk decode failures (which name the offending field and the
//! line they were read from), kind mismatches on the record API, the
//! writer's embedded-newline check, and I/O errors from the underlying
//! sink or source.

use thiserror::Error;

use crate::core::format::FieldName;

/// Errors that can occur when working with NOS crypto data containers.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// A body line of a hex-binary field did not contain valid hexadecimal.
    #[error("invalid hex in field `{field}` on line {line}")]
    HexDecode {
        /// The field whose body line failed to decode.
        field: FieldName,
        /// 1-based line number in the input text.
        line: usize,
        /// The underlying decode error.
        source: hex::FromHexError,
    },

    /// A body line of a base64-binary field did not contain valid base64.
    #[error("invalid base64 in field `{field}` on line {line}")]
    Base64Decode {
        /// The field whose body line failed to decode.
        field: FieldName,
        /// 1-based line number in the input text.
        line: usize,
        /// The underlying decode error.
        source: base64::DecodeError,
    },

    /// A value's shape (scalar/list, text/binary) does not match the
    /// field's fixed kind.
    #[error("value does not match the kind of field `{field}`")]
    KindMismatch {
        /// The field the value was offered to.
        field: FieldName,
    },

    /// A plain-text value contains a line break, which the one-line-per-value
    /// format cannot represent.
    #[error("field `{field}` contains an embedded line break")]
    EmbeddedNewline {
        /// The field holding the offending text.
        field: FieldName,
    },

    /// An I/O error from the underlying sink or source, propagated unchanged.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;
