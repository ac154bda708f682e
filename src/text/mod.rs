//! The delimited text codec.
//!
//! One record becomes one line: the 47 field renderings joined by the field
//! delimiter, each escaped and enclosed per the active [`DelimiterSet`],
//! null fields spelled `null`. Decoding tokenizes with the same
//! configuration, then converts each token to its field's declared kind.
//!
//! The decode direction is forgiving where the binary codec is strict: a
//! line with fewer than 47 fields still parses, the missing trailing fields
//! null. Errors are reserved for structural damage to the line
//! ([`Error::LineParse`]) and tokens that fail their kind conversion
//! ([`Error::RecordParse`]).
//!
//! [`Error::LineParse`]: crate::error::Error::LineParse
//! [`Error::RecordParse`]: crate::error::Error::RecordParse

mod delimiters;
mod format;
mod parse;

pub use delimiters::DelimiterSet;
pub use parse::RecordParser;

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::parsing::{parse_bool, parse_timestamp};
use crate::record::UsAccident;
use crate::schema::{FieldDef, FieldKind, SCHEMA};
use crate::types::Value;

use format::escape_and_enclose;

/// Spelling of an absent field on the text side, in and out.
const NULL_TOKEN: &str = "null";

/// Renders `record` as one delimited line.
///
/// `terminate` appends the record delimiter, for callers streaming multiple
/// records into one writer. The `null` token takes the same escape and
/// enclose treatment as a real value, so `enclose_required` output stays
/// uniformly enclosed.
///
/// ```
/// use accident_record::{format_record, DelimiterSet, UsAccident};
///
/// let row = UsAccident::new()
///     .with_id(Some(1))
///     .with_severity(Some(2))
///     .with_start_lat(Some(39.86))
///     .with_city(Some("Dayton".to_string()))
///     .with_amenity(Some(false));
///
/// let line = format_record(&row, &DelimiterSet::DEFAULT, false);
/// assert!(line.starts_with("1,null,null,2,null,null,39.86,"));
/// ```
pub fn format_record(record: &UsAccident, delimiters: &DelimiterSet, terminate: bool) -> String {
    let mut out = String::new();
    for (index, def) in SCHEMA.iter().enumerate() {
        if index > 0 {
            out.push(delimiters.field_delim);
        }
        let rendered: Cow<'_, str> = match record.slot(def.id) {
            Some(value) => Cow::Owned(value.to_string()),
            None => Cow::Borrowed(NULL_TOKEN),
        };
        out.push_str(&escape_and_enclose(&rendered, delimiters));
    }
    if terminate {
        out.push(delimiters.record_delim);
    }
    out
}

/// Parses one delimited line into a fresh record.
pub fn parse_record(parser: &mut RecordParser, line: &str) -> Result<UsAccident> {
    let mut record = UsAccident::new();
    parse_record_into(parser, line, &mut record)?;
    Ok(record)
}

/// Parses one delimited line into an existing record.
///
/// On success every slot is overwritten; fields past the end of a short line
/// become null rather than keeping stale values. On error the record is left
/// partially updated: slots before the failing field hold the newly parsed
/// values.
pub fn parse_record_into(
    parser: &mut RecordParser,
    line: &str,
    record: &mut UsAccident,
) -> Result<()> {
    let tokens = parser.parse_record(line)?;
    for (def, token) in SCHEMA.iter().zip(tokens) {
        let value = convert_token(def, token)?;
        record.set_slot(def.id, value);
    }
    for def in SCHEMA.iter().skip(tokens.len()) {
        record.set_slot(def.id, None);
    }
    Ok(())
}

/// Byte-buffer entry point: validates UTF-8, then parses like
/// [`parse_record`].
pub fn parse_record_bytes(parser: &mut RecordParser, bytes: &[u8]) -> Result<UsAccident> {
    let line = match std::str::from_utf8(bytes) {
        Ok(line) => line,
        Err(err) => {
            let valid = &bytes[..err.valid_up_to()];
            let position = std::str::from_utf8(valid).map_or(0, |s| s.chars().count());
            return Err(Error::LineParse {
                position,
                message: "record bytes are not valid utf-8",
            });
        }
    };
    parse_record(parser, line)
}

/// Converts one raw token to its field's kind.
///
/// The `null` token is absent for every kind; the empty token is absent for
/// every kind except strings, where it stays an empty string.
fn convert_token(def: &FieldDef, token: &str) -> Result<Option<Value>> {
    if token == NULL_TOKEN {
        return Ok(None);
    }
    if token.is_empty() && def.kind != FieldKind::Text {
        return Ok(None);
    }
    let value = match def.kind {
        FieldKind::Int => {
            Value::Int(token.parse().map_err(|e| conversion_error(def, token, e))?)
        }
        FieldKind::Float => {
            Value::Float(token.parse().map_err(|e| conversion_error(def, token, e))?)
        }
        FieldKind::Bool => Value::Bool(parse_bool(token)),
        FieldKind::Text => Value::Text(token.to_string()),
        FieldKind::Timestamp => Value::Timestamp(
            parse_timestamp(token).map_err(|e| conversion_error(def, token, e))?,
        ),
    };
    Ok(Some(value))
}

fn conversion_error(
    def: &FieldDef,
    token: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> Error {
    Error::RecordParse {
        field: def.name,
        token: token.to_string(),
        source: Box::new(source),
    }
}
