//! Variable-length signed integer encoding.
//!
//! String lengths on the wire use a variable-length format so short strings
//! cost one length byte. Values near zero encode as themselves; larger values
//! get a marker byte that states sign and byte count, then the magnitude
//! big-endian with leading zeros stripped:
//!
//! | value | encoding |
//! |-------|----------|
//! | `-112..=127` | the value itself, one byte |
//! | `> 127` | marker `-112 - n`, then the `n` magnitude bytes |
//! | `< -112` | marker `-120 - n`, then the `n` bytes of the one's complement |
//!
//! Negative values store `!value` so the magnitude is non-negative and the
//! decoder recovers the original by complementing again. A full `i64` never
//! needs more than nine bytes.
//!
//! ```
//! use accident_record::encoding::varint::{decode_vint, encode_vint};
//!
//! let mut buf = Vec::new();
//! encode_vint(300, &mut buf);
//! assert_eq!(buf, [0x8E, 0x01, 0x2C]);
//!
//! let mut offset = 0;
//! assert_eq!(decode_vint(&buf, &mut offset).ok(), Some(300));
//! assert_eq!(offset, buf.len());
//! ```

use crate::error::Result;

/// Number of bytes [`encode_vint`] will emit for `value`.
pub fn vint_len(value: i64) -> usize {
    if (-112..=127).contains(&value) {
        return 1;
    }
    let magnitude = if value < 0 { !value } else { value } as u64;
    1 + (64 - magnitude.leading_zeros() as usize).div_ceil(8)
}

/// Appends `value` in variable-length form.
pub fn encode_vint(value: i64, buf: &mut Vec<u8>) {
    if (-112..=127).contains(&value) {
        buf.push(value as i8 as u8);
        return;
    }
    let (base, magnitude) = if value < 0 {
        (-120i64, !value as u64)
    } else {
        (-112i64, value as u64)
    };
    let len = (64 - magnitude.leading_zeros() as usize).div_ceil(8);
    buf.push((base - len as i64) as i8 as u8);
    for shift in (0..len).rev() {
        buf.push((magnitude >> (shift * 8)) as u8);
    }
}

/// Decodes one variable-length integer starting at `*offset`, advancing the
/// offset past it.
///
/// Fails with [`Error::MalformedRecord`](crate::error::Error::MalformedRecord)
/// when the buffer ends inside the value. Markers with leading zero magnitude
/// bytes are not canonical but still decode, matching what existing writers
/// may have produced.
pub fn decode_vint(buf: &[u8], offset: &mut usize) -> Result<i64> {
    let first = *buf
        .get(*offset)
        .ok_or_else(|| malformed!("varint starts past end of buffer at offset {}", *offset))?
        as i8;
    *offset += 1;
    if first >= -112 {
        return Ok(i64::from(first));
    }
    let (len, negative) = if first >= -120 {
        ((-112 - i64::from(first)) as usize, false)
    } else {
        ((-120 - i64::from(first)) as usize, true)
    };
    let bytes = buf.get(*offset..*offset + len).ok_or_else(|| {
        malformed!("varint body of {len} bytes truncated at offset {}", *offset)
    })?;
    *offset += len;
    let mut magnitude = 0u64;
    for &byte in bytes {
        magnitude = magnitude << 8 | u64::from(byte);
    }
    Ok(if negative {
        !(magnitude as i64)
    } else {
        magnitude as i64
    })
}
