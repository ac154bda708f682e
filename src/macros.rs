//! Internal macros shared across the crate.

/// Builds an [`Error::MalformedRecord`](crate::error::Error::MalformedRecord)
/// from a format string.
macro_rules! malformed {
    ($($arg:tt)*) => {
        $crate::error::Error::MalformedRecord {
            message: format!($($arg)*),
        }
    };
}

/// Generates the typed getter, setter, and `with_` builder for each row
/// field.
///
/// Accessors go through the record's slot array, so the schema table stays
/// the only description of field order; this macro only fixes the Rust-level
/// signatures. Invoked once, inside `impl UsAccident`, with one line per
/// column in declared order.
macro_rules! field_accessors {
    ($($field:ident => $id:ident: $kind:tt),+ $(,)?) => {
        $(
            field_accessors!(@one $field, $id, $kind);
        )+
    };

    (@one $field:ident, $id:ident, int) => {
        field_accessors!(@copy $field, $id, i32, Int);
    };
    (@one $field:ident, $id:ident, float) => {
        field_accessors!(@copy $field, $id, f64, Float);
    };
    (@one $field:ident, $id:ident, bool) => {
        field_accessors!(@copy $field, $id, bool, Bool);
    };
    (@one $field:ident, $id:ident, timestamp) => {
        field_accessors!(@copy $field, $id, $crate::types::Timestamp, Timestamp);
    };
    (@one $field:ident, $id:ident, text) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<&str> {
                match self.slot($crate::schema::FieldId::$id) {
                    Some($crate::types::Value::Text(v)) => Some(v.as_str()),
                    _ => None,
                }
            }

            pub fn [<set_ $field>](&mut self, value: Option<String>) {
                self.set_slot(
                    $crate::schema::FieldId::$id,
                    value.map($crate::types::Value::Text),
                );
            }

            pub fn [<with_ $field>](mut self, value: Option<String>) -> Self {
                self.[<set_ $field>](value);
                self
            }
        }
    };

    (@copy $field:ident, $id:ident, $ty:ty, $variant:ident) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<$ty> {
                match self.slot($crate::schema::FieldId::$id) {
                    Some($crate::types::Value::$variant(v)) => Some(*v),
                    _ => None,
                }
            }

            pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                self.set_slot(
                    $crate::schema::FieldId::$id,
                    value.map($crate::types::Value::$variant),
                );
            }

            pub fn [<with_ $field>](mut self, value: Option<$ty>) -> Self {
                self.[<set_ $field>](value);
                self
            }
        }
    };
}
