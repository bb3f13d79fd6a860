// Unit symbols, domains and the registry that resolves them

pub mod error;
pub mod registry;
pub mod types;

pub use error::ConversionError;
pub use registry::{is_registered, resolve, units_of, UnitInfo, UnknownUnitPolicy};
pub use types::*;
