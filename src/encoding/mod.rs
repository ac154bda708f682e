//! Binary encodings.
//!
//! [`varint`] holds the variable-length integer format used for string
//! lengths; [`wire`] is the null-flagged record codec built on top of it.

pub mod varint;
pub mod wire;
