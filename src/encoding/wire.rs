//! The binary record codec.
//!
//! A record is its 47 fields in schema order, each one a flag byte followed
//! by the value when present. Flag `1` marks a null and ends the field; flag
//! `0` is followed by the value encoding for the field's kind:
//!
//! | kind | present encoding |
//! |------|------------------|
//! | integer | 4 bytes big-endian |
//! | double | IEEE 754 bit pattern, 8 bytes big-endian |
//! | boolean | 1 byte, `0` or `1` |
//! | string | varint byte length, then the UTF-8 bytes |
//! | timestamp | 8-byte epoch milliseconds, then 4-byte nanos-of-second |
//!
//! Millisecond and nanosecond parts of a timestamp overlap: the milliseconds
//! carry the whole-millisecond portion of the fraction too, and the decoder
//! takes the nanos field as authoritative for everything below one second.
//!
//! Nothing in the stream marks record boundaries or carries a length prefix;
//! the format is self-delimiting, so consecutive records can be decoded from
//! one buffer by threading the same offset through repeated calls. Decoding
//! is strict where the text codec is lenient: a truncated or corrupt buffer
//! fails with [`Error::MalformedRecord`] instead of yielding a partial row.

use crate::encoding::varint::{decode_vint, encode_vint};
use crate::error::Result;
use crate::record::UsAccident;
use crate::schema::{FieldKind, SCHEMA};
use crate::types::{Timestamp, Value};

/// Version tag of this record layout.
///
/// Never part of the encoded bytes; readers and writers compare it out of
/// band to detect schema drift.
pub const FORMAT_VERSION: u32 = 3;

const NULL_FLAG: u8 = 1;
const PRESENT_FLAG: u8 = 0;

/// Appends the binary encoding of `record` to `buf`.
pub fn encode_record(record: &UsAccident, buf: &mut Vec<u8>) {
    for def in SCHEMA.iter() {
        match record.slot(def.id) {
            None => buf.push(NULL_FLAG),
            Some(value) => {
                buf.push(PRESENT_FLAG);
                encode_value(value, buf);
            }
        }
    }
}

/// Decodes one record starting at `*offset`, advancing the offset past it.
///
/// On error nothing is returned; a partially decoded row is never observable
/// through this entry point.
pub fn decode_record(buf: &[u8], offset: &mut usize) -> Result<UsAccident> {
    let mut record = UsAccident::new();
    decode_record_into(&mut record, buf, offset)?;
    Ok(record)
}

/// Decodes one record into an existing row, advancing `*offset` past it.
///
/// Every slot is overwritten, nulls included, so the previous contents never
/// bleed through. Decoding stops at the first malformed field; slots before
/// it keep their newly decoded values and slots after it are left as they
/// were.
pub fn decode_record_into(
    record: &mut UsAccident,
    buf: &[u8],
    offset: &mut usize,
) -> Result<()> {
    for def in SCHEMA.iter() {
        let flag = take_byte(buf, offset)
            .map_err(|_| malformed!("record truncated before field {}", def.name))?;
        if flag != PRESENT_FLAG {
            record.set_slot(def.id, None);
            continue;
        }
        let value = decode_value(def.kind, buf, offset)?;
        record.set_slot(def.id, Some(value));
    }
    Ok(())
}

fn encode_value(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Int(v) => buf.extend_from_slice(&v.to_be_bytes()),
        Value::Float(v) => buf.extend_from_slice(&v.to_be_bytes()),
        Value::Bool(v) => buf.push(u8::from(*v)),
        Value::Text(v) => {
            encode_vint(v.len() as i64, buf);
            buf.extend_from_slice(v.as_bytes());
        }
        Value::Timestamp(ts) => {
            buf.extend_from_slice(&ts.millis().to_be_bytes());
            buf.extend_from_slice(&(ts.subsec_nanos() as i32).to_be_bytes());
        }
    }
}

fn decode_value(kind: FieldKind, buf: &[u8], offset: &mut usize) -> Result<Value> {
    match kind {
        FieldKind::Int => Ok(Value::Int(i32::from_be_bytes(take_array(buf, offset)?))),
        FieldKind::Float => Ok(Value::Float(f64::from_be_bytes(take_array(buf, offset)?))),
        FieldKind::Bool => Ok(Value::Bool(take_byte(buf, offset)? != 0)),
        FieldKind::Text => {
            let len = decode_vint(buf, offset)?;
            let len = usize::try_from(len)
                .map_err(|_| malformed!("negative string length {len}"))?;
            let bytes = buf
                .get(*offset..*offset + len)
                .ok_or_else(|| malformed!("string of {len} bytes truncated at offset {}", *offset))?;
            let text = std::str::from_utf8(bytes)
                .map_err(|_| malformed!("string field at offset {} is not valid utf-8", *offset))?;
            *offset += len;
            Ok(Value::Text(text.to_string()))
        }
        FieldKind::Timestamp => {
            let millis = i64::from_be_bytes(take_array(buf, offset)?);
            let nanos = i32::from_be_bytes(take_array(buf, offset)?);
            let ts = u32::try_from(nanos)
                .ok()
                .and_then(|n| Timestamp::from_parts(millis.div_euclid(1_000), n))
                .ok_or_else(|| malformed!("timestamp nanos {nanos} out of range"))?;
            Ok(Value::Timestamp(ts))
        }
    }
}

fn take_byte(buf: &[u8], offset: &mut usize) -> Result<u8> {
    let byte = *buf
        .get(*offset)
        .ok_or_else(|| malformed!("record truncated at offset {}", *offset))?;
    *offset += 1;
    Ok(byte)
}

fn take_array<const N: usize>(buf: &[u8], offset: &mut usize) -> Result<[u8; N]> {
    let bytes = buf
        .get(*offset..*offset + N)
        .ok_or_else(|| malformed!("record truncated at offset {}", *offset))?;
    *offset += N;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}
