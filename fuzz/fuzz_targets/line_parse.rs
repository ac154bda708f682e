//! Fuzz testing for the delimited line parser.
//!
//! Both the line bytes and the delimiter configuration are
//! attacker-controlled here. Whatever tokenizes without a structural error
//! must convert or fail cleanly, and any record that comes out must format
//! again without panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use accident_record::{format_record, parse_record_bytes, DelimiterSet, RecordParser};

#[derive(Debug, Arbitrary)]
struct LineInput {
    data: Vec<u8>,
    field_delim: char,
    record_delim: char,
    enclose: Option<char>,
    escape: Option<char>,
    enclose_required: bool,
}

fuzz_target!(|input: LineInput| {
    let delimiters = DelimiterSet::new(
        input.field_delim,
        input.record_delim,
        input.enclose,
        input.escape,
        input.enclose_required,
    );

    let mut parser = RecordParser::new(delimiters);
    if let Ok(record) = parse_record_bytes(&mut parser, &input.data) {
        let _ = format_record(&record, &delimiters, true);
    }
});
