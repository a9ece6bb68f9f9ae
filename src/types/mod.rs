mod datetime;
pub use datetime::{CalDateTime, CalDateTimeError};
