use crate::units::types::Domain;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Length and weight magnitudes must be non-negative
    #[error("Value cannot be negative: {0}")]
    NegativeValue(f64),

    /// Only raised under `UnknownUnitPolicy::Reject`
    #[error("Unknown {domain} unit: {symbol}")]
    UnknownUnit { domain: Domain, symbol: String },

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),
}
