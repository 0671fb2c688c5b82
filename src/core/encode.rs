//! Serialization of a [`Record`] to the container text form.
//!
//! Fields are emitted in canonical order between the begin/end markers.
//! Absent fields produce no output at all. Each present field produces a
//! header line (`Name:`), a body indented by four spaces, and one blank
//! separator line:
//!
//! - plain-text scalars: one verbatim line
//! - binary scalars: hex/base64 encoded, wrapped at 60 characters
//! - lists: one line per element, binary elements encoded, never wrapped

use std::io::Write;

use base64::prelude::*;

use crate::core::error::{ContainerError, ContainerResult};
use crate::core::format::{
    Encoding, FieldName, BEGIN_MARKER, END_MARKER, INDENT, WRAP_WIDTH,
};
use crate::core::record::{FieldValue, Record};

/// Serializes a record into `sink` as container text.
///
/// The transformation is pure with respect to the record; the record is not
/// mutated and can be serialized again.
///
/// # Errors
///
/// Returns [`ContainerError::EmbeddedNewline`] if a plain-text value
/// contains a line break, and [`ContainerError::Io`] for errors from the
/// sink, propagated unchanged.
pub fn write_record<W: Write>(record: &Record, sink: &mut W) -> ContainerResult<()> {
    writeln!(sink, "{BEGIN_MARKER}")?;

    for (name, value) in record.fields() {
        writeln!(sink, "{name}:")?;
        match value {
            FieldValue::Text(text) => {
                write_text_line(sink, name, text)?;
            }
            FieldValue::TextList(items) => {
                for item in items {
                    write_text_line(sink, name, item)?;
                }
            }
            FieldValue::Bytes(bytes) => {
                write_wrapped(sink, &encode_binary(name, bytes))?;
            }
            FieldValue::ByteList(items) => {
                // List elements occupy one line each, however long.
                for item in items {
                    writeln!(sink, "{INDENT}{}", encode_binary(name, item))?;
                }
            }
        }
        writeln!(sink)?;
    }

    writeln!(sink, "{END_MARKER}")?;
    Ok(())
}

/// Serializes a record to an owned `String`.
///
/// # Errors
///
/// Returns [`ContainerError::EmbeddedNewline`] if a plain-text value
/// contains a line break. The in-memory sink cannot fail.
pub fn to_text(record: &Record) -> ContainerResult<String> {
    let mut buf = Vec::new();
    write_record(record, &mut buf)?;
    // The writer only emits UTF-8.
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Converts a binary value to its textual encoding per the field's kind.
///
/// Hex output is lowercase; base64 uses the standard alphabet with padding.
fn encode_binary(name: FieldName, bytes: &[u8]) -> String {
    match name.kind().encoding {
        Encoding::Hex => hex::encode(bytes),
        Encoding::Base64 => BASE64_STANDARD.encode(bytes),
        // Byte values only exist for binary kinds; Record::set enforces it.
        Encoding::Text => String::new(),
    }
}

fn write_text_line<W: Write>(sink: &mut W, name: FieldName, text: &str) -> ContainerResult<()> {
    if text.contains(['\n', '\r']) {
        return Err(ContainerError::EmbeddedNewline { field: name });
    }
    writeln!(sink, "{INDENT}{text}")?;
    Ok(())
}

/// Writes an encoded value wrapped at [`WRAP_WIDTH`] characters per line.
///
/// A zero-length encoding produces no body lines; the last chunk may be
/// shorter than the wrap width but is never empty.
fn write_wrapped<W: Write>(sink: &mut W, encoded: &str) -> ContainerResult<()> {
    // Hex and base64 are pure ASCII, so byte-indexed slicing is safe.
    let mut rest = encoded;
    while !rest.is_empty() {
        let split = rest.len().min(WRAP_WIDTH);
        writeln!(sink, "{INDENT}{}", &rest[..split])?;
        rest = &rest[split..];
    }
    Ok(())
}
