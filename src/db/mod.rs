//! The positional database codec.
//!
//! [`RowSource`] abstracts a result cursor and [`ParamSink`] a prepared
//! statement; both speak 1-based positions and `Option` for SQL NULL, so a
//! driver adapter is a handful of one-line methods. [`read_record`] and
//! [`bind_record`] walk the schema table, dispatch per kind, and wrap any
//! transport failure with the column or parameter position and the field
//! name that hit it.
//!
//! Binding takes an extra position offset so several records can share one
//! statement: a two-row insert binds the second record with `offset` 47
//! (the count returned by the first [`bind_record`] call).

use crate::error::{BoxError, Error, Result};
use crate::record::UsAccident;
use crate::schema::{FieldKind, SqlType, FIELD_COUNT, SCHEMA};
use crate::types::{Timestamp, Value};

/// What driver adapters return: the value, or the driver's own error.
pub type DriverResult<T> = std::result::Result<T, BoxError>;

/// A positional cursor over one result row.
///
/// Columns are 1-based. `None` is SQL NULL; implementations map their
/// driver's null convention to it.
pub trait RowSource {
    fn get_int(&self, column: usize) -> DriverResult<Option<i32>>;
    fn get_double(&self, column: usize) -> DriverResult<Option<f64>>;
    fn get_bool(&self, column: usize) -> DriverResult<Option<bool>>;
    fn get_string(&self, column: usize) -> DriverResult<Option<String>>;
    fn get_timestamp(&self, column: usize) -> DriverResult<Option<Timestamp>>;
}

/// A positional parameter sink, 1-based.
///
/// The field's declared [`SqlType`] rides along on every bind; drivers need
/// it to type NULL parameters correctly.
pub trait ParamSink {
    fn bind_int(&mut self, position: usize, value: Option<i32>, sql_type: SqlType)
        -> DriverResult<()>;
    fn bind_double(
        &mut self,
        position: usize,
        value: Option<f64>,
        sql_type: SqlType,
    ) -> DriverResult<()>;
    fn bind_bool(
        &mut self,
        position: usize,
        value: Option<bool>,
        sql_type: SqlType,
    ) -> DriverResult<()>;
    fn bind_string(
        &mut self,
        position: usize,
        value: Option<&str>,
        sql_type: SqlType,
    ) -> DriverResult<()>;
    fn bind_timestamp(
        &mut self,
        position: usize,
        value: Option<Timestamp>,
        sql_type: SqlType,
    ) -> DriverResult<()>;
}

/// Reads one row from `source` into a fresh record.
pub fn read_record(source: &impl RowSource) -> Result<UsAccident> {
    let mut record = UsAccident::new();
    read_record_into(&mut record, source)?;
    Ok(record)
}

/// Reads one row from `source` into an existing record, all 47 columns in
/// schema order.
///
/// Every slot is overwritten. A failed column read stops the walk; slots
/// after it keep their previous contents.
pub fn read_record_into(record: &mut UsAccident, source: &impl RowSource) -> Result<()> {
    for def in SCHEMA.iter() {
        let column = def.id.column();
        let value = match def.kind {
            FieldKind::Int => source.get_int(column).map(|v| v.map(Value::Int)),
            FieldKind::Float => source.get_double(column).map(|v| v.map(Value::Float)),
            FieldKind::Bool => source.get_bool(column).map(|v| v.map(Value::Bool)),
            FieldKind::Text => source.get_string(column).map(|v| v.map(Value::Text)),
            FieldKind::Timestamp => source
                .get_timestamp(column)
                .map(|v| v.map(Value::Timestamp)),
        }
        .map_err(|err| Error::DatabaseRead {
            column,
            field: def.name,
            source: err,
        })?;
        record.set_slot(def.id, value);
    }
    Ok(())
}

/// Binds all 47 fields of `record` into `sink`.
///
/// Field at column N binds at position `offset + N`, with the column's fixed
/// SQL type code. Returns the number of parameters bound, so chained calls
/// can feed one call's return into the next call's offset.
pub fn bind_record(
    record: &UsAccident,
    sink: &mut impl ParamSink,
    offset: usize,
) -> Result<usize> {
    for def in SCHEMA.iter() {
        let position = offset + def.id.column();
        let value = record.slot(def.id);
        match def.kind {
            FieldKind::Int => sink.bind_int(position, value.and_then(Value::as_int), def.sql_type),
            FieldKind::Float => {
                sink.bind_double(position, value.and_then(Value::as_float), def.sql_type)
            }
            FieldKind::Bool => {
                sink.bind_bool(position, value.and_then(Value::as_bool), def.sql_type)
            }
            FieldKind::Text => {
                sink.bind_string(position, value.and_then(Value::as_str), def.sql_type)
            }
            FieldKind::Timestamp => {
                sink.bind_timestamp(position, value.and_then(Value::as_timestamp), def.sql_type)
            }
        }
        .map_err(|err| Error::DatabaseWrite {
            position,
            field: def.name,
            source: err,
        })?;
    }
    Ok(FIELD_COUNT)
}
