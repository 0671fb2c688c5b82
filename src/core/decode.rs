//! Parsing of container text back into a [`Record`].
//!
//! The parser is a small explicit state machine. It is in one of two modes:
//! **outside** (before the begin marker or after the end marker, where
//! everything is inert) or **inside** (between markers, where lines are
//! classified as headers or bodies). At most one field is being accumulated
//! at a time; a single finalize path commits it on the next header line and
//! at end of input, so the last field is never dropped.
//!
//! The reader is deliberately more lenient than the writer: any leading
//! whitespace marks a body line, hex is accepted in either case, and
//! content outside the markers — including before the block or after an
//! unterminated one — is skipped rather than rejected.

use std::io::BufRead;
use std::str::FromStr;

use base64::prelude::*;

use crate::core::error::{ContainerError, ContainerResult};
use crate::core::format::{
    Cardinality, Encoding, FieldKind, FieldName, BEGIN_MARKER, END_MARKER,
};
use crate::core::record::{FieldValue, Record};

/// Parses a record from `source`, consuming it to end of input.
///
/// Returns a record containing exactly the fields that appeared between the
/// markers; all others are absent.
///
/// # Errors
///
/// Returns a decode error naming the field and line for invalid hex or
/// base64 body content, and [`ContainerError::Io`] for errors from the
/// source, propagated unchanged.
pub fn read_record<R: BufRead>(source: R) -> ContainerResult<Record> {
    let mut parser = Parser::new();
    for (idx, line) in source.lines().enumerate() {
        parser.feed(&line?, idx + 1)?;
    }
    Ok(parser.finish())
}

impl TryFrom<&str> for Record {
    type Error = ContainerError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut parser = Parser::new();
        for (idx, line) in text.lines().enumerate() {
            parser.feed(line, idx + 1)?;
        }
        Ok(parser.finish())
    }
}

impl TryFrom<String> for Record {
    type Error = ContainerError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::try_from(text.as_str())
    }
}

impl FromStr for Record {
    type Err = ContainerError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::try_from(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Outside,
    Inside,
}

/// Accumulator for the field currently being read, shaped by its kind.
enum Accum {
    Text(String),
    Bytes(Vec<u8>),
    TextList(Vec<String>),
    ByteList(Vec<Vec<u8>>),
}

impl Accum {
    /// An empty accumulator of the right shape for a field kind.
    fn for_kind(kind: FieldKind) -> Self {
        match (kind.cardinality, kind.encoding.is_binary()) {
            (Cardinality::Scalar, false) => Self::Text(String::new()),
            (Cardinality::Scalar, true) => Self::Bytes(Vec::new()),
            (Cardinality::List, false) => Self::TextList(Vec::new()),
            (Cardinality::List, true) => Self::ByteList(Vec::new()),
        }
    }

    fn into_value(self) -> FieldValue {
        match self {
            Self::Text(text) => FieldValue::Text(text),
            Self::Bytes(bytes) => FieldValue::Bytes(bytes),
            Self::TextList(items) => FieldValue::TextList(items),
            Self::ByteList(items) => FieldValue::ByteList(items),
        }
    }
}

/// The parser state machine.
struct Parser {
    mode: Mode,
    current: Option<(FieldName, Accum)>,
    record: Record,
}

impl Parser {
    fn new() -> Self {
        Self {
            mode: Mode::Outside,
            current: None,
            record: Record::new(),
        }
    }

    /// Processes one line of input. `line_no` is 1-based and used only for
    /// error reporting.
    fn feed(&mut self, raw: &str, line_no: usize) -> ContainerResult<()> {
        let trimmed = raw.trim();

        // Blank lines never interrupt accumulation.
        if trimmed.is_empty() {
            return Ok(());
        }

        // Markers flip the mode in either direction and are otherwise inert.
        if trimmed == BEGIN_MARKER {
            self.mode = Mode::Inside;
            return Ok(());
        }
        if trimmed == END_MARKER {
            self.mode = Mode::Outside;
            return Ok(());
        }

        if self.mode == Mode::Outside {
            return Ok(());
        }

        if raw.starts_with(char::is_whitespace) {
            self.body_line(trimmed, line_no)
        } else {
            self.header_line(trimmed);
            Ok(())
        }
    }

    /// Starts accumulating a new field, committing the previous one first.
    ///
    /// Unrecognized names leave no accumulator, so their body lines are
    /// consumed without effect. A duplicate header re-accumulates from
    /// scratch and its committed value overwrites the earlier one.
    fn header_line(&mut self, trimmed: &str) {
        self.finish_field();
        let name = trimmed.strip_suffix(':').unwrap_or(trimmed);
        self.current = FieldName::from_name(name)
            .map(|field| (field, Accum::for_kind(field.kind())));
    }

    /// Folds one body line into the current accumulator: decoded and
    /// concatenated for binary scalars, appended for lists, concatenated
    /// verbatim for text scalars. Body lines with no current field are
    /// ignored.
    fn body_line(&mut self, content: &str, line_no: usize) -> ContainerResult<()> {
        let Some((field, accum)) = self.current.as_mut() else {
            return Ok(());
        };
        match accum {
            Accum::Text(text) => text.push_str(content),
            Accum::TextList(items) => items.push(content.to_owned()),
            Accum::Bytes(bytes) => {
                bytes.extend(decode_binary(*field, content, line_no)?);
            }
            Accum::ByteList(items) => {
                items.push(decode_binary(*field, content, line_no)?);
            }
        }
        Ok(())
    }

    /// Commits the field under accumulation, if any, into the record.
    fn finish_field(&mut self) {
        if let Some((field, accum)) = self.current.take() {
            self.record.put(field, accum.into_value());
        }
    }

    /// Ends the input, flushing a still-accumulating last field.
    fn finish(mut self) -> Record {
        self.finish_field();
        self.record
    }
}

/// Decodes one body-line chunk of a binary field.
///
/// Hex is accepted in either case. Binary accumulators only exist for hex
/// and base64 kinds, so those are the only two encodings seen here.
fn decode_binary(field: FieldName, content: &str, line: usize) -> ContainerResult<Vec<u8>> {
    if field.kind().encoding == Encoding::Base64 {
        BASE64_STANDARD
            .decode(content)
            .map_err(|source| ContainerError::Base64Decode {
                field,
                line,
                source,
            })
    } else {
        hex::decode(content).map_err(|source| ContainerError::HexDecode {
            field,
            line,
            source,
        })
    }
}
