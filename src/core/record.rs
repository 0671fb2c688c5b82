//! The in-memory record: a fixed, ordered set of optional field values.
//!
//! A [`Record`] holds at most one value per [`FieldName`], each matching the
//! field's fixed kind. Binary fields store decoded bytes; the hex/base64
//! representation exists only at the text boundary.
//!
//! # Security
//!
//! - Binary field values are zeroized on drop
//! - `Debug` output redacts binary payloads
//! - Equality over binary payloads uses constant-time comparison
//!
//! # Example
//!
//! ```rust
//! use nos_crypto_data::Record;
//!
//! let record = Record::new()
//!     .with_description("test key")
//!     .with_methods(["AES", "CBC"])
//!     .with_secret_key(vec![0u8; 16]);
//!
//! assert_eq!(record.description(), Some("test key"));
//! assert_eq!(record.secret_key(), Some(&[0u8; 16][..]));
//! ```

use core::fmt::{self, Debug};

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::core::error::{ContainerError, ContainerResult};
use crate::core::format::{Cardinality, FieldKind, FieldName};

/// A single field value, shaped by the field's kind.
#[derive(Clone)]
pub enum FieldValue {
    /// Scalar plain-text value.
    Text(String),
    /// Scalar binary value (decoded bytes).
    Bytes(Vec<u8>),
    /// Ordered list of plain-text values.
    TextList(Vec<String>),
    /// Ordered list of binary values, each decoded independently.
    ByteList(Vec<Vec<u8>>),
}

impl FieldValue {
    /// Whether this value's shape matches the given field kind.
    #[must_use]
    pub fn matches_kind(&self, kind: FieldKind) -> bool {
        let binary = kind.encoding.is_binary();
        match (self, kind.cardinality) {
            (Self::Text(_), Cardinality::Scalar) => !binary,
            (Self::Bytes(_), Cardinality::Scalar) => binary,
            (Self::TextList(_), Cardinality::List) => !binary,
            (Self::ByteList(_), Cardinality::List) => binary,
            _ => false,
        }
    }
}

impl Zeroize for FieldValue {
    fn zeroize(&mut self) {
        // Only binary payloads carry key material; text fields are
        // descriptive metadata.
        match self {
            Self::Text(_) | Self::TextList(_) => {}
            Self::Bytes(bytes) => bytes.zeroize(),
            Self::ByteList(items) => items.zeroize(),
        }
    }
}

impl Drop for FieldValue {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::TextList(a), Self::TextList(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a.ct_eq(b).into(),
            (Self::ByteList(a), Self::ByteList(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(x, y)| bool::from(x.ct_eq(y)))
            }
            _ => false,
        }
    }
}

impl Eq for FieldValue {}

impl Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::TextList(items) => f.debug_tuple("TextList").field(items).finish(),
            Self::Bytes(_) => f.debug_tuple("Bytes").field(&"[REDACTED]").finish(),
            Self::ByteList(items) => f
                .debug_tuple("ByteList")
                .field(&format_args!("[REDACTED; {} values]", items.len()))
                .finish(),
        }
    }
}

/// An ordered mapping from [`FieldName`] to an optional [`FieldValue`].
///
/// Construct one incrementally with [`Record::set`] or fluently with the
/// `with_*` methods, then serialize it with
/// [`write_record`](crate::core::encode::write_record). Parsing produces a
/// fresh record containing only the fields that appeared in the input.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: [Option<FieldValue>; FieldName::ALL.len()],
}

impl Record {
    /// Creates an empty record with all fields absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field, or `None` if it is absent.
    #[must_use]
    pub fn get(&self, name: FieldName) -> Option<&FieldValue> {
        self.fields[name.index()].as_ref()
    }

    /// Sets a field, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::KindMismatch`] if the value's shape does
    /// not match the field's fixed kind.
    pub fn set(&mut self, name: FieldName, value: FieldValue) -> ContainerResult<()> {
        if !value.matches_kind(name.kind()) {
            return Err(ContainerError::KindMismatch { field: name });
        }
        self.fields[name.index()] = Some(value);
        Ok(())
    }

    /// Removes a field's value and returns it.
    pub fn take(&mut self, name: FieldName) -> Option<FieldValue> {
        self.fields[name.index()].take()
    }

    /// Whether every field is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(Option::is_none)
    }

    /// Iterates over present fields in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> {
        FieldName::ALL
            .into_iter()
            .filter_map(|name| self.get(name).map(|value| (name, value)))
    }

    /// Sets a field without the kind check. The caller guarantees the shape.
    pub(crate) fn put(&mut self, name: FieldName, value: FieldValue) {
        debug_assert!(value.matches_kind(name.kind()));
        self.fields[name.index()] = Some(value);
    }

    fn text(&self, name: FieldName) -> Option<&str> {
        match self.get(name) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    fn bytes(&self, name: FieldName) -> Option<&[u8]> {
        match self.get(name) {
            Some(FieldValue::Bytes(bytes)) => Some(bytes),
            _ => None,
        }
    }
}

// =============================================================================
// Typed field accessors
// =============================================================================

macro_rules! text_field {
    ($with:ident, $get:ident, $name:ident) => {
        /// Sets the field, consuming and returning the record.
        #[must_use]
        pub fn $with(mut self, value: impl Into<String>) -> Self {
            self.put(FieldName::$name, FieldValue::Text(value.into()));
            self
        }

        /// Returns the field's value, if present.
        #[must_use]
        pub fn $get(&self) -> Option<&str> {
            self.text(FieldName::$name)
        }
    };
}

macro_rules! bytes_field {
    ($with:ident, $get:ident, $name:ident) => {
        /// Sets the field from decoded bytes, consuming and returning the record.
        #[must_use]
        pub fn $with(mut self, value: impl Into<Vec<u8>>) -> Self {
            self.put(FieldName::$name, FieldValue::Bytes(value.into()));
            self
        }

        /// Returns the field's decoded bytes, if present.
        #[must_use]
        pub fn $get(&self) -> Option<&[u8]> {
            self.bytes(FieldName::$name)
        }
    };
}

impl Record {
    text_field!(with_description, description, Description);
    text_field!(with_file_name, file_name, FileName);
    bytes_field!(with_secret_key, secret_key, SecretKey);
    bytes_field!(with_initialization_vector, initialization_vector, InitializationVector);
    bytes_field!(with_modulus, modulus, Modulus);
    bytes_field!(with_public_exponent, public_exponent, PublicExponent);
    bytes_field!(with_private_exponent, private_exponent, PrivateExponent);
    bytes_field!(with_signature, signature, Signature);
    bytes_field!(with_data, data, Data);
    bytes_field!(with_envelope_data, envelope_data, EnvelopeData);
    bytes_field!(with_envelope_crypt_key, envelope_crypt_key, EnvelopeCryptKey);

    /// Sets `Method`, consuming and returning the record.
    #[must_use]
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = methods.into_iter().map(Into::into).collect();
        self.put(FieldName::Method, FieldValue::TextList(items));
        self
    }

    /// Returns the `Method` list, if present.
    #[must_use]
    pub fn methods(&self) -> Option<&[String]> {
        match self.get(FieldName::Method) {
            Some(FieldValue::TextList(items)) => Some(items),
            _ => None,
        }
    }

    /// Sets `Key length`, consuming and returning the record.
    #[must_use]
    pub fn with_key_lengths<I>(mut self, lengths: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let items = lengths.into_iter().collect();
        self.put(FieldName::KeyLength, FieldValue::ByteList(items));
        self
    }

    /// Returns the `Key length` list, if present.
    #[must_use]
    pub fn key_lengths(&self) -> Option<&[Vec<u8>]> {
        match self.get(FieldName::KeyLength) {
            Some(FieldValue::ByteList(items)) => Some(items),
            _ => None,
        }
    }
}

impl Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Record");
        for (name, value) in self.fields() {
            s.field(name.as_str(), value);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new();
        assert!(record.is_empty());
        for name in FieldName::ALL {
            assert!(record.get(name).is_none());
        }
    }

    #[test]
    fn test_builder_sets_fields() {
        let record = Record::new()
            .with_description("backup key")
            .with_file_name("backup.bin")
            .with_methods(["AES", "CBC"])
            .with_key_lengths([vec![0x00, 0x80]])
            .with_secret_key([1u8; 16])
            .with_initialization_vector([2u8; 16])
            .with_modulus([3u8; 4])
            .with_public_exponent([0x01, 0x00, 0x01])
            .with_private_exponent([4u8; 4])
            .with_signature([5u8; 8])
            .with_data([6u8; 10])
            .with_envelope_data([7u8; 10])
            .with_envelope_crypt_key([8u8; 16]);

        assert_eq!(record.description(), Some("backup key"));
        assert_eq!(record.file_name(), Some("backup.bin"));
        assert_eq!(record.methods(), Some(&["AES".to_string(), "CBC".to_string()][..]));
        assert_eq!(record.key_lengths(), Some(&[vec![0x00, 0x80]][..]));
        assert_eq!(record.secret_key(), Some(&[1u8; 16][..]));
        assert_eq!(record.initialization_vector(), Some(&[2u8; 16][..]));
        assert_eq!(record.modulus(), Some(&[3u8; 4][..]));
        assert_eq!(record.public_exponent(), Some(&[0x01, 0x00, 0x01][..]));
        assert_eq!(record.private_exponent(), Some(&[4u8; 4][..]));
        assert_eq!(record.signature(), Some(&[5u8; 8][..]));
        assert_eq!(record.data(), Some(&[6u8; 10][..]));
        assert_eq!(record.envelope_data(), Some(&[7u8; 10][..]));
        assert_eq!(record.envelope_crypt_key(), Some(&[8u8; 16][..]));
        assert!(!record.is_empty());
    }

    #[test]
    fn test_set_rejects_kind_mismatch() {
        let mut record = Record::new();

        // Binary value for a plain-text field
        let err = record
            .set(FieldName::Description, FieldValue::Bytes(vec![1, 2, 3]))
            .unwrap_err();
        assert!(matches!(
            err,
            ContainerError::KindMismatch {
                field: FieldName::Description
            }
        ));

        // Scalar value for a list field
        let err = record
            .set(FieldName::Method, FieldValue::Text("AES".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            ContainerError::KindMismatch {
                field: FieldName::Method
            }
        ));

        // Text list for a hex list field
        let err = record
            .set(FieldName::KeyLength, FieldValue::TextList(vec!["80".into()]))
            .unwrap_err();
        assert!(matches!(
            err,
            ContainerError::KindMismatch {
                field: FieldName::KeyLength
            }
        ));

        assert!(record.is_empty());
    }

    #[test]
    fn test_set_accepts_matching_kinds() -> ContainerResult<()> {
        let mut record = Record::new();
        record.set(FieldName::Description, FieldValue::Text("x".into()))?;
        record.set(FieldName::Method, FieldValue::TextList(vec!["AES".into()]))?;
        record.set(FieldName::KeyLength, FieldValue::ByteList(vec![vec![0x80]]))?;
        record.set(FieldName::SecretKey, FieldValue::Bytes(vec![0u8; 16]))?;
        Ok(())
    }

    #[test]
    fn test_take_removes_value() {
        let mut record = Record::new().with_description("gone soon");
        let taken = record.take(FieldName::Description);
        assert_eq!(taken, Some(FieldValue::Text("gone soon".into())));
        assert!(record.get(FieldName::Description).is_none());
        assert!(record.take(FieldName::Description).is_none());
    }

    #[test]
    fn test_fields_iterates_in_canonical_order() {
        // Insert out of canonical order; iteration must still follow it.
        let record = Record::new()
            .with_data([9u8; 3])
            .with_description("ordered")
            .with_secret_key([1u8; 4]);

        let names: Vec<FieldName> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![FieldName::Description, FieldName::SecretKey, FieldName::Data]
        );
    }

    #[test]
    fn test_empty_value_is_present() {
        let record = Record::new().with_signature(Vec::new());
        assert_eq!(record.signature(), Some(&[][..]));
        assert!(!record.is_empty());
    }

    #[test]
    fn test_equality() {
        let a = Record::new().with_secret_key([1u8; 16]).with_description("k");
        let b = Record::new().with_secret_key([1u8; 16]).with_description("k");
        assert_eq!(a, b);

        let c = Record::new().with_secret_key([2u8; 16]).with_description("k");
        assert_ne!(a, c);

        // Present-but-empty differs from absent
        let with_empty = Record::new().with_data(Vec::new());
        assert_ne!(with_empty, Record::new());
    }

    #[test]
    fn test_debug_redacts_binary_fields() {
        let record = Record::new()
            .with_description("visible")
            .with_secret_key([0xAAu8; 16])
            .with_key_lengths([vec![0xBB]]);

        let debug_str = format!("{record:?}");
        assert!(debug_str.contains("visible"));
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("170")); // 0xAA
        assert!(!debug_str.contains("187")); // 0xBB
    }

    #[test]
    fn test_clone() {
        let original = Record::new().with_modulus([7u8; 32]).with_methods(["RSA"]);
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }

    #[test]
    fn test_value_kind_matching() {
        let text = FieldValue::Text("x".into());
        assert!(text.matches_kind(FieldName::Description.kind()));
        assert!(!text.matches_kind(FieldName::SecretKey.kind()));
        assert!(!text.matches_kind(FieldName::Method.kind()));

        let bytes = FieldValue::Bytes(vec![1]);
        assert!(bytes.matches_kind(FieldName::SecretKey.kind()));
        assert!(bytes.matches_kind(FieldName::Data.kind()));
        assert!(!bytes.matches_kind(FieldName::KeyLength.kind()));

        let byte_list = FieldValue::ByteList(vec![vec![1]]);
        assert!(byte_list.matches_kind(FieldName::KeyLength.kind()));
        assert!(!byte_list.matches_kind(FieldName::Method.kind()));
    }
}
