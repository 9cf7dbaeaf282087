mod number;
mod timestamp;

pub use number::{Number, NumberError};
pub use timestamp::{Timestamp, TimestampParseError};
