pub mod config;
pub mod convert;
pub mod error;
pub mod record;

pub use config::ConverterConfig;
pub use convert::{convert, Summary};
pub use error::{ConversionError, ReadFault};
pub use record::{Dataset, Record};
