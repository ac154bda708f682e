//! Delimiter configuration.

/// The characters that frame fields and records in the text encoding.
///
/// The formatter and the tokenizer take the same `DelimiterSet`; a line
/// formatted with one configuration only parses back under that
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterSet {
    /// Separates fields within a record.
    pub field_delim: char,
    /// Ends a record.
    pub record_delim: char,
    /// Optional character wrapped around field content.
    pub enclose: Option<char>,
    /// Optional escape prefix for special characters inside a field.
    pub escape: Option<char>,
    /// Encloses every formatted field, not only the ones that contain a
    /// delimiter. The tokenizer then rejects unenclosed fields.
    pub enclose_required: bool,
}

impl DelimiterSet {
    /// Comma-separated, newline-terminated, no enclosing or escaping.
    pub const DEFAULT: DelimiterSet = DelimiterSet {
        field_delim: ',',
        record_delim: '\n',
        enclose: None,
        escape: None,
        enclose_required: false,
    };

    /// What `mysqldump` emits: single-quote enclosing with backslash
    /// escapes.
    pub const MYSQL: DelimiterSet = DelimiterSet {
        field_delim: ',',
        record_delim: '\n',
        enclose: Some('\''),
        escape: Some('\\'),
        enclose_required: false,
    };

    /// Hive's table defaults: `^A` between fields, newline records.
    pub const HIVE: DelimiterSet = DelimiterSet {
        field_delim: '\u{1}',
        record_delim: '\n',
        enclose: None,
        escape: None,
        enclose_required: false,
    };

    pub fn new(
        field_delim: char,
        record_delim: char,
        enclose: Option<char>,
        escape: Option<char>,
        enclose_required: bool,
    ) -> Self {
        Self {
            field_delim,
            record_delim,
            enclose,
            escape,
            enclose_required,
        }
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}
