//! The record tokenizer.

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::schema::FIELD_COUNT;

use super::delimiters::DelimiterSet;

/// Tokenizer state. `ClosedField` is the position right after a closing
/// enclosure, where only a delimiter may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    EnclosedField,
    EnclosedEscape,
    ClosedField,
    UnenclosedField,
    UnenclosedEscape,
}

/// Splits one delimited line into raw field tokens.
///
/// The parser owns a reusable token buffer, so one instance amortizes
/// allocations across many lines; give each thread its own instance. Tokens
/// come back unescaped and stripped of enclosures, ready for per-kind
/// conversion.
///
/// End of input is handled leniently: an unterminated enclosure or a
/// dangling escape still yields the field content accumulated so far. Hard
/// errors are reserved for enclosure violations under `enclose_required` and
/// text following a closing enclosure.
#[derive(Debug)]
pub struct RecordParser {
    delimiters: DelimiterSet,
    fields: SmallVec<[String; FIELD_COUNT]>,
}

impl RecordParser {
    pub fn new(delimiters: DelimiterSet) -> Self {
        Self {
            delimiters,
            fields: SmallVec::new(),
        }
    }

    /// The configuration this parser splits with.
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Tokenizes `line` into fields, reusing the internal buffer.
    ///
    /// The returned slice is valid until the next call. Empty input yields
    /// no tokens; a lone record delimiter yields one empty token. Everything
    /// after the first record delimiter is ignored.
    pub fn parse_record(&mut self, line: &str) -> Result<&[String]> {
        let d = self.delimiters;
        self.fields.clear();
        let mut field = String::new();
        let mut state = State::FieldStart;

        for (position, ch) in line.chars().enumerate() {
            match state {
                State::FieldStart => {
                    if d.enclose == Some(ch) {
                        state = State::EnclosedField;
                    } else if d.escape == Some(ch) {
                        state = State::UnenclosedEscape;
                    } else if ch == d.field_delim {
                        self.fields.push(std::mem::take(&mut field));
                    } else if ch == d.record_delim {
                        self.fields.push(std::mem::take(&mut field));
                        return Ok(&self.fields);
                    } else if d.enclose_required {
                        return Err(Error::LineParse {
                            position,
                            message: "expected the field enclosure",
                        });
                    } else {
                        field.push(ch);
                        state = State::UnenclosedField;
                    }
                }
                State::EnclosedField => {
                    if d.escape == Some(ch) {
                        state = State::EnclosedEscape;
                    } else if d.enclose == Some(ch) {
                        state = State::ClosedField;
                    } else {
                        field.push(ch);
                    }
                }
                State::EnclosedEscape => {
                    field.push(ch);
                    state = State::EnclosedField;
                }
                State::ClosedField => {
                    if ch == d.field_delim {
                        self.fields.push(std::mem::take(&mut field));
                        state = State::FieldStart;
                    } else if ch == d.record_delim {
                        self.fields.push(std::mem::take(&mut field));
                        return Ok(&self.fields);
                    } else {
                        return Err(Error::LineParse {
                            position,
                            message: "expected a delimiter after the closing enclosure",
                        });
                    }
                }
                State::UnenclosedField => {
                    if d.escape == Some(ch) {
                        state = State::UnenclosedEscape;
                    } else if ch == d.field_delim {
                        self.fields.push(std::mem::take(&mut field));
                        state = State::FieldStart;
                    } else if ch == d.record_delim {
                        self.fields.push(std::mem::take(&mut field));
                        return Ok(&self.fields);
                    } else {
                        field.push(ch);
                    }
                }
                State::UnenclosedEscape => {
                    field.push(ch);
                    state = State::UnenclosedField;
                }
            }
        }

        // Input ended without a record delimiter. Mid-field states flush
        // what accumulated; at a field boundary there is nothing to add.
        if state != State::FieldStart {
            self.fields.push(field);
        }
        Ok(&self.fields)
    }
}
