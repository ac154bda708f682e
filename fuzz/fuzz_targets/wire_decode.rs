//! Fuzz testing for the binary record decoder.
//!
//! Arbitrary byte sequences must surface as errors, never as panics:
//! truncated records, corrupt varint length prefixes, invalid UTF-8 in
//! string fields, and out-of-range timestamp components all land here.
//! When a sequence does decode, re-encoding it must produce bytes that
//! decode to the same record.

#![no_main]

use libfuzzer_sys::fuzz_target;

use accident_record::{decode_record, encode_record};

fuzz_target!(|data: &[u8]| {
    let mut offset = 0;
    if let Ok(record) = decode_record(data, &mut offset) {
        let mut buf = Vec::new();
        encode_record(&record, &mut buf);

        let mut check = 0;
        let again = decode_record(&buf, &mut check).expect("re-encoded record failed to decode");
        assert_eq!(again, record);
        assert_eq!(check, buf.len());
    }
});
