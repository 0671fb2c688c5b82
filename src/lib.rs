//! NOS crypto data containers.
//!
//! A human-readable, line-oriented text container for cryptographic
//! metadata: key material, initialization vectors, RSA parameters,
//! signatures, and payloads. This crate provides the codec — a typed
//! in-memory [`Record`] plus serialization to and parsing from the text
//! form. It performs no cryptography itself.
//!
//! # Quick Start
//!
//! ```rust
//! use nos_crypto_data::{to_text, Record};
//!
//! let record = Record::new()
//!     .with_description("test key")
//!     .with_methods(["AES", "CBC"])
//!     .with_secret_key((0u8..16).collect::<Vec<u8>>());
//!
//! let text = to_text(&record).expect("no embedded newlines");
//! assert!(text.starts_with("---BEGIN NOS CRYPTO DATA---"));
//! assert!(text.contains("000102030405060708090a0b0c0d0e0f"));
//!
//! let parsed = Record::try_from(text.as_str()).expect("valid container");
//! assert_eq!(parsed, record);
//! ```
//!
//! # Text Format
//!
//! A record is a block delimited by literal markers. Each present field is a
//! header line followed by an indented body and a blank separator:
//!
//! ```text
//! ---BEGIN NOS CRYPTO DATA---
//! Description:
//!     test key
//!
//! Method:
//!     AES
//!     CBC
//!
//! Secret key:
//!     000102030405060708090a0b0c0d0e0f
//!
//! ---END NOS CRYPTO DATA---
//! ```
//!
//! The field set is fixed. Each name carries a kind — scalar or list, and
//! plain-text, hex, or base64:
//!
//! | Field | Cardinality | Encoding |
//! |-------|-------------|----------|
//! | `Description`, `File name` | scalar | plain-text |
//! | `Method` | list | plain-text |
//! | `Key length` | list | hex |
//! | `Secret key`, `Initialization vector`, `Modulus`, `Public exponent`, `Private exponent`, `Signature`, `Envelope crypt key` | scalar | hex |
//! | `Data`, `Envelope data` | scalar | base64 |
//!
//! Binary scalar values wrap at 60 characters per line; list elements
//! occupy one line each, however long. The reader is lenient: any leading
//! whitespace marks a body line, hex may be upper- or lowercase, and text
//! outside the marker pair is ignored.
//!
//! # Security
//!
//! - Binary field values are zeroized on drop
//! - `Debug` output redacts binary payloads
//! - Record equality compares binary payloads in constant time
//!
//! # Modules
//!
//! - [`core`] - Record, field table, codec, and errors

pub mod core;

// Re-export the full public surface at the crate root
pub use core::decode::read_record;
pub use core::encode::{to_text, write_record};
pub use core::error::{ContainerError, ContainerResult};
pub use core::format::{
    Cardinality, Encoding, FieldKind, FieldName, BEGIN_MARKER, END_MARKER,
};
pub use core::record::{FieldValue, Record};
