//! Field-literal parsers used by the text codec.

mod literal;

pub use literal::{parse_bool, parse_timestamp, TimestampParseError};
