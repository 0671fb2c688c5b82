//! Core container types and codec.
//!
//! - [`format`] - Wire-format constants and the static name→kind field table
//! - [`error`] - Error types for container operations
//! - [`record`] - The in-memory [`Record`](record::Record) and its field values
//! - [`encode`] - Serialization of a record to container text
//! - [`decode`] - Parsing of container text back into a record

pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod record;

// Re-export commonly used items
pub use decode::read_record;
pub use encode::{to_text, write_record};
pub use error::{ContainerError, ContainerResult};
pub use format::{Cardinality, Encoding, FieldKind, FieldName};
pub use record::{FieldValue, Record};
