pub mod error;
pub mod meter;
pub mod parse;

pub use error::{ParseError, ValidationError};
pub use meter::MeterReading;
pub use parse::parse_line;
