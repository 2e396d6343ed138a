#[macro_use]
extern crate log;

mod convert;
mod error;

pub use convert::{convert, convert_all, Conversion, OFFICE_DESIGNS};
pub use error::{Error, ErrorKind, Result};
