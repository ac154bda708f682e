//! Crate-wide error and result types.
//!
//! Every fallible operation surfaces one of the [`Error`] variants below.
//! Failures are never retried or papered over with defaults: codecs abort on
//! the first bad field and hand back enough context (field name, column
//! position, offending token) to locate the input that caused it.

use crate::schema::FieldKind;

/// Boxed error carrying failures across the [`RowSource`] and [`ParamSink`]
/// boundary traits.
///
/// [`RowSource`]: crate::db::RowSource
/// [`ParamSink`]: crate::db::ParamSink
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while encoding, decoding, or dynamically accessing a row.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A positional cursor read failed while decoding a database row.
    #[error("database read failed at column {column} ({field})")]
    DatabaseRead {
        /// 1-based column index of the failed read.
        column: usize,
        /// Canonical name of the field being read.
        field: &'static str,
        /// The driver's underlying error.
        #[source]
        source: BoxError,
    },

    /// A positional parameter bind failed while encoding a database row.
    #[error("database bind failed at position {position} ({field})")]
    DatabaseWrite {
        /// 1-based parameter position of the failed bind.
        position: usize,
        /// Canonical name of the field being bound.
        field: &'static str,
        /// The driver's underlying error.
        #[source]
        source: BoxError,
    },

    /// A binary record was truncated or internally inconsistent.
    #[error("malformed binary record: {message}")]
    MalformedRecord {
        /// What the decoder expected and where it gave up.
        message: String,
    },

    /// One text field failed conversion to its declared kind.
    #[error("can't parse input data '{token}' for field {field}")]
    RecordParse {
        /// Canonical name of the field being converted.
        field: &'static str,
        /// The raw offending token, exactly as tokenized.
        token: String,
        /// The conversion error underneath.
        #[source]
        source: BoxError,
    },

    /// A delimited line violated the record structure itself (as opposed to
    /// one field failing conversion).
    #[error("malformed record line at character {position}: {message}")]
    LineParse {
        /// 0-based character position where the tokenizer stopped.
        position: usize,
        message: &'static str,
    },

    /// Name-keyed access referenced a column that does not exist.
    #[error("no such field: {name}")]
    UnknownField {
        name: String,
    },

    /// Dynamic set with a value whose kind does not match the field's
    /// declared kind.
    #[error("field {field} holds {expected} values, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: FieldKind,
        found: FieldKind,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
