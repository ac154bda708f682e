//! # accident-record - Typed Row Codecs for the `us_accidents` Table
//!
//! This crate maps one relational table, `us_accidents`, onto a typed
//! in-memory row with 47 independently nullable fields, and moves that row
//! across three external representations without ever hand-listing a field
//! twice:
//!
//! - **Database**: positional reads from a result cursor and positional
//!   binds into a prepared statement, with the table's fixed SQL type codes
//! - **Binary**: a self-delimiting wire format of null-flagged field values
//! - **Text**: configurable delimited lines with escaping, enclosing, and
//!   `null` sentinels
//!
//! ## Quick Start
//!
//! ```
//! use accident_record::{format_record, parse_record, DelimiterSet, RecordParser, UsAccident};
//!
//! # fn main() -> accident_record::Result<()> {
//! let row = UsAccident::new()
//!     .with_id(Some(1))
//!     .with_severity(Some(2))
//!     .with_city(Some("Dayton".to_string()));
//!
//! let line = format_record(&row, &DelimiterSet::DEFAULT, false);
//! assert!(line.starts_with("1,null,null,2,"));
//!
//! let mut parser = RecordParser::new(DelimiterSet::DEFAULT);
//! let parsed = parse_record(&mut parser, &line)?;
//! assert_eq!(parsed, row);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Every codec iterates the same declarative column table instead of
//! repeating per-field logic:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              UsAccident (record)             │
//! │   typed accessors │ FieldId access │ by name │
//! ├──────────────────────────────────────────────┤
//! │       SCHEMA: 47 × (id, name, kind, SQL)     │
//! ├──────────────┬───────────────┬───────────────┤
//! │   db codec   │  wire codec   │  text codec   │
//! │ RowSource /  │ null flags +  │ DelimiterSet  │
//! │ ParamSink    │ varint text   │ + tokenizer   │
//! └──────────────┴───────────────┴───────────────┘
//! ```
//!
//! Field order is identical in all three encodings: position N in one is
//! position N in the others. Round trips through any single codec reproduce
//! every value exactly, nulls included and timestamps bit for bit.
//!
//! ## Module Overview
//!
//! - [`schema`]: the declarative column table, `FieldId`, SQL type codes
//! - [`record`]: the `UsAccident` row and its three access styles
//! - [`db`]: cursor/statement traits and the positional database codec
//! - [`encoding`]: variable-length integers and the binary wire codec
//! - [`text`]: delimiter configuration, field formatter, tokenizer, codec
//! - [`parsing`]: boolean and timestamp literal conversions
//! - [`types`]: the `Value` enum and the nanosecond-precision `Timestamp`
//! - [`error`]: the crate-wide `Error` enum and `Result` alias

#[macro_use]
mod macros;

pub mod db;
pub mod encoding;
pub mod error;
pub mod parsing;
pub mod record;
pub mod schema;
pub mod text;
pub mod types;

pub use db::{bind_record, read_record, read_record_into, DriverResult, ParamSink, RowSource};
pub use encoding::wire::{decode_record, decode_record_into, encode_record, FORMAT_VERSION};
pub use error::{BoxError, Error, Result};
pub use parsing::{parse_bool, parse_timestamp};
pub use record::UsAccident;
pub use schema::{FieldDef, FieldId, FieldKind, SqlType, FIELD_COUNT, SCHEMA};
pub use text::{
    format_record, parse_record, parse_record_bytes, parse_record_into, DelimiterSet, RecordParser,
};
pub use types::{Timestamp, Value};
