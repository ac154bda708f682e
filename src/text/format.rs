//! Field-level escaping and enclosing.

use std::borrow::Cow;

use super::delimiters::DelimiterSet;

/// Prepares one rendered field for inclusion in a delimited line.
///
/// With an escape character configured, occurrences of the escape character
/// are doubled. What else gets escaped depends on whether enclosing is
/// available: without an enclose character, field and record delimiters are
/// escaped in place; with one, only the enclose character is escaped and the
/// field is wrapped when `enclose_required` is set or the original text
/// contains a delimiter.
///
/// Without an escape character nothing is rewritten, so under the plain
/// default configuration a field containing the delimiter will not survive a
/// round trip. Callers that need delimiter-proof output pick a configuration
/// with enclosing or escaping.
pub(super) fn escape_and_enclose<'a>(text: &'a str, d: &DelimiterSet) -> Cow<'a, str> {
    let escape_worthy = |ch: char| match d.enclose {
        Some(enclose) => ch == enclose,
        None => ch == d.field_delim || ch == d.record_delim,
    };

    let wrap = d.enclose.filter(|_| {
        d.enclose_required
            || text
                .chars()
                .any(|ch| ch == d.field_delim || ch == d.record_delim)
    });
    let escape = d
        .escape
        .filter(|&escape| text.chars().any(|ch| ch == escape || escape_worthy(ch)));

    if wrap.is_none() && escape.is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    if let Some(enclose) = wrap {
        out.push(enclose);
    }
    match escape {
        Some(escape) => {
            for ch in text.chars() {
                if ch == escape || escape_worthy(ch) {
                    out.push(escape);
                }
                out.push(ch);
            }
        }
        None => out.push_str(text),
    }
    if let Some(enclose) = wrap {
        out.push(enclose);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str, d: &DelimiterSet) -> String {
        escape_and_enclose(text, d).into_owned()
    }

    #[test]
    fn plain_text_is_borrowed_untouched() {
        let d = DelimiterSet::DEFAULT;
        assert!(matches!(escape_and_enclose("Dayton", &d), Cow::Borrowed(_)));
        // No escape configured: a delimiter passes through unprotected.
        assert_eq!(fmt("a,b", &d), "a,b");
    }

    #[test]
    fn escape_only_config_escapes_delimiters() {
        let d = DelimiterSet::new(',', '\n', None, Some('\\'), false);
        assert_eq!(fmt("a,b", &d), "a\\,b");
        assert_eq!(fmt("a\nb", &d), "a\\\nb");
        assert_eq!(fmt("a\\b", &d), "a\\\\b");
        assert_eq!(fmt("ab", &d), "ab");
    }

    #[test]
    fn enclosing_kicks_in_on_delimiters() {
        let d = DelimiterSet::MYSQL;
        assert_eq!(fmt("plain", &d), "plain");
        assert_eq!(fmt("a,b", &d), "'a,b'");
        assert_eq!(fmt("a\nb", &d), "'a\nb'");
    }

    #[test]
    fn enclose_char_is_escaped_even_without_wrapping() {
        let d = DelimiterSet::MYSQL;
        assert_eq!(fmt("it's", &d), "it\\'s");
        assert_eq!(fmt("it's a, test", &d), "'it\\'s a, test'");
    }

    #[test]
    fn escape_char_is_doubled() {
        let d = DelimiterSet::MYSQL;
        assert_eq!(fmt("c:\\temp", &d), "c:\\\\temp");
    }

    #[test]
    fn required_enclosing_wraps_everything() {
        let d = DelimiterSet::new(',', '\n', Some('\''), Some('\\'), true);
        assert_eq!(fmt("plain", &d), "'plain'");
        assert_eq!(fmt("", &d), "''");
        assert_eq!(fmt("null", &d), "'null'");
    }

    #[test]
    fn enclose_without_escape_still_wraps() {
        let d = DelimiterSet::new(',', '\n', Some('"'), None, false);
        assert_eq!(fmt("a,b", &d), "\"a,b\"");
        assert_eq!(fmt("plain", &d), "plain");
    }
}
