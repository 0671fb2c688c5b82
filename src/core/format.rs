//! Wire-format constants and the static field table.
//!
//! A container is a line-oriented text block delimited by literal begin/end
//! markers:
//!
//! ```text
//! ---BEGIN NOS CRYPTO DATA---
//! Description:
//!     test key
//!
//! Secret key:
//!     000102030405060708090a0b0c0d0e0f
//!
//! ---END NOS CRYPTO DATA---
//! ```
//!
//! The field set is fixed and closed. Each field name maps to exactly one
//! [`FieldKind`] — a (cardinality, encoding) pair — and that single lookup
//! drives both the writer and the parser; neither side carries per-field
//! branching of its own.

use core::fmt::{self, Display};

/// Literal line marking the start of a container block.
pub const BEGIN_MARKER: &str = "---BEGIN NOS CRYPTO DATA---";

/// Literal line marking the end of a container block.
pub const END_MARKER: &str = "---END NOS CRYPTO DATA---";

/// Indentation emitted before every body line on write.
///
/// The reader is deliberately more lenient: any leading whitespace makes a
/// body line.
pub const INDENT: &str = "    ";

/// Width at which encoded binary scalar values are wrapped, in characters.
pub const WRAP_WIDTH: usize = 60;

/// Whether a field holds one value or an ordered sequence of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// One value.
    Scalar,
    /// An ordered sequence of values, one per line in the text form.
    List,
}

/// How a field's value is represented at the text boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Verbatim text.
    Text,
    /// Binary payload written as hexadecimal.
    Hex,
    /// Binary payload written as standard-alphabet base64.
    Base64,
}

impl Encoding {
    /// Returns true for the binary encodings (hex and base64).
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Hex | Self::Base64)
    }
}

/// The fixed (cardinality, encoding) pair governing a field's representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKind {
    /// Scalar or list.
    pub cardinality: Cardinality,
    /// Text, hex, or base64.
    pub encoding: Encoding,
}

/// The closed set of container field names, in canonical order.
///
/// Serialization always emits present fields in this order; parsing accepts
/// them in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    /// Free-form description of the record.
    Description,
    /// Name of the file the record refers to.
    FileName,
    /// Cipher/mode names, one per line.
    Method,
    /// Key lengths, each independently hex-encoded.
    KeyLength,
    /// Symmetric key material.
    SecretKey,
    /// Initialization vector.
    InitializationVector,
    /// RSA modulus.
    Modulus,
    /// RSA public exponent.
    PublicExponent,
    /// RSA private exponent.
    PrivateExponent,
    /// Signature bytes.
    Signature,
    /// Payload, base64-encoded in text form.
    Data,
    /// Enveloped payload, base64-encoded in text form.
    EnvelopeData,
    /// Encrypted session key for enveloped data.
    EnvelopeCryptKey,
}

impl FieldName {
    /// All field names in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Description,
        Self::FileName,
        Self::Method,
        Self::KeyLength,
        Self::SecretKey,
        Self::InitializationVector,
        Self::Modulus,
        Self::PublicExponent,
        Self::PrivateExponent,
        Self::Signature,
        Self::Data,
        Self::EnvelopeData,
        Self::EnvelopeCryptKey,
    ];

    /// The name as it appears on a header line (without the trailing `:`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::FileName => "File name",
            Self::Method => "Method",
            Self::KeyLength => "Key length",
            Self::SecretKey => "Secret key",
            Self::InitializationVector => "Initialization vector",
            Self::Modulus => "Modulus",
            Self::PublicExponent => "Public exponent",
            Self::PrivateExponent => "Private exponent",
            Self::Signature => "Signature",
            Self::Data => "Data",
            Self::EnvelopeData => "Envelope data",
            Self::EnvelopeCryptKey => "Envelope crypt key",
        }
    }

    /// Looks up a field by its textual name.
    ///
    /// Returns `None` for names outside the fixed set; the parser treats
    /// those as unrecognized (accepted, then dropped).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Position of this field in the canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The fixed kind of this field.
    ///
    /// Kinds are determined solely by the name; there is no per-instance
    /// override.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        use Cardinality::{List, Scalar};
        use Encoding::{Base64, Hex, Text};

        let (cardinality, encoding) = match self {
            Self::Description | Self::FileName => (Scalar, Text),
            Self::Method => (List, Text),
            Self::KeyLength => (List, Hex),
            Self::SecretKey
            | Self::InitializationVector
            | Self::Modulus
            | Self::PublicExponent
            | Self::PrivateExponent
            | Self::Signature
            | Self::EnvelopeCryptKey => (Scalar, Hex),
            Self::Data | Self::EnvelopeData => (Scalar, Base64),
        };
        FieldKind {
            cardinality,
            encoding,
        }
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_indices() {
        for (i, name) in FieldName::ALL.into_iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn test_name_lookup_roundtrip() {
        for name in FieldName::ALL {
            assert_eq!(FieldName::from_name(name.as_str()), Some(name));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(FieldName::from_name("Secret Key"), None); // wrong case
        assert_eq!(FieldName::from_name("Nonce"), None);
        assert_eq!(FieldName::from_name(""), None);
    }

    #[test]
    fn test_kind_table() {
        use Cardinality::{List, Scalar};
        use Encoding::{Base64, Hex, Text};

        let expect = |f: FieldName, c, e| {
            assert_eq!(f.kind(), FieldKind {
                cardinality: c,
                encoding: e
            });
        };

        expect(FieldName::Description, Scalar, Text);
        expect(FieldName::FileName, Scalar, Text);
        expect(FieldName::Method, List, Text);
        expect(FieldName::KeyLength, List, Hex);
        expect(FieldName::SecretKey, Scalar, Hex);
        expect(FieldName::InitializationVector, Scalar, Hex);
        expect(FieldName::Modulus, Scalar, Hex);
        expect(FieldName::PublicExponent, Scalar, Hex);
        expect(FieldName::PrivateExponent, Scalar, Hex);
        expect(FieldName::Signature, Scalar, Hex);
        expect(FieldName::Data, Scalar, Base64);
        expect(FieldName::EnvelopeData, Scalar, Base64);
        expect(FieldName::EnvelopeCryptKey, Scalar, Hex);
    }

    #[test]
    fn test_only_method_and_key_length_are_lists() {
        for name in FieldName::ALL {
            let is_list = name.kind().cardinality == Cardinality::List;
            let expected = matches!(name, FieldName::Method | FieldName::KeyLength);
            assert_eq!(is_list, expected, "cardinality of {name}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldName::SecretKey.to_string(), "Secret key");
        assert_eq!(FieldName::EnvelopeCryptKey.to_string(), "Envelope crypt key");
    }

    #[test]
    fn test_markers() {
        assert_eq!(BEGIN_MARKER, "---BEGIN NOS CRYPTO DATA---");
        assert_eq!(END_MARKER, "---END NOS CRYPTO DATA---");
        assert_eq!(INDENT.len(), 4);
        assert_eq!(WRAP_WIDTH, 60);
    }
}
