//! The value model shared by every codec: dynamically typed field values
//! and nanosecond-precision timestamps.

mod timestamp;
mod value;

pub use timestamp::Timestamp;
pub use value::Value;

pub(crate) use timestamp::days_in_month;
