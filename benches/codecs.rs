//! Codec benchmarks: formatting and parsing delimited lines, encoding and
//! decoding the binary wire format.
//!
//! All benchmarks run over a row with every field present, the worst case
//! for the per-field dispatch in each codec.

use std::hint::black_box;

use accident_record::{
    decode_record, encode_record, format_record, parse_record, DelimiterSet, FieldKind,
    RecordParser, Timestamp, UsAccident, Value, SCHEMA,
};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn populated_row() -> UsAccident {
    let mut row = UsAccident::new();
    for (i, def) in SCHEMA.iter().enumerate() {
        let seed = i as i32 + 1;
        let value = match def.kind {
            FieldKind::Int => Value::Int(seed * 3),
            FieldKind::Float => Value::Float(seed as f64 * 1.25 - 40.0),
            FieldKind::Bool => Value::Bool(seed % 2 == 0),
            FieldKind::Text => Value::Text(format!("value-{seed}")),
            FieldKind::Timestamp => Value::Timestamp(
                Timestamp::from_parts(1_454_891_828 + i64::from(seed), 123_456_789)
                    .expect("nanos in range"),
            ),
        };
        row.set_value(def.id, Some(value)).expect("kind matches");
    }
    row
}

fn bench_text(c: &mut Criterion) {
    let row = populated_row();
    let mut group = c.benchmark_group("text");

    group.bench_function("format_default", |b| {
        b.iter(|| format_record(black_box(&row), &DelimiterSet::DEFAULT, true));
    });
    group.bench_function("format_mysql", |b| {
        b.iter(|| format_record(black_box(&row), &DelimiterSet::MYSQL, true));
    });

    let line = format_record(&row, &DelimiterSet::DEFAULT, true);
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("parse_default", |b| {
        let mut parser = RecordParser::new(DelimiterSet::DEFAULT);
        b.iter(|| parse_record(&mut parser, black_box(&line)).unwrap());
    });

    let mysql_line = format_record(&row, &DelimiterSet::MYSQL, true);
    group.throughput(Throughput::Bytes(mysql_line.len() as u64));
    group.bench_function("parse_mysql", |b| {
        let mut parser = RecordParser::new(DelimiterSet::MYSQL);
        b.iter(|| parse_record(&mut parser, black_box(&mysql_line)).unwrap());
    });
    group.finish();
}

fn bench_wire(c: &mut Criterion) {
    let row = populated_row();
    let mut encoded = Vec::new();
    encode_record(&row, &mut encoded);

    let mut group = c.benchmark_group("wire");
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    group.bench_function("encode", |b| {
        let mut buf = Vec::with_capacity(encoded.len());
        b.iter(|| {
            buf.clear();
            encode_record(black_box(&row), &mut buf);
        });
    });
    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut offset = 0;
            decode_record(black_box(&encoded), &mut offset).unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_text, bench_wire);
criterion_main!(benches);
