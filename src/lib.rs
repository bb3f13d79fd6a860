pub mod config;
pub mod convert;
pub mod history;
pub mod session;
pub mod units;

pub use convert::{
    convert_in, ConversionRequest, Converter, LengthConverter, TemperatureConverter,
    WeightConverter,
};
pub use history::{ConversionHistory, ConversionRecord, SharedHistory};
pub use units::{ConversionError, Domain, UnknownUnitPolicy};
