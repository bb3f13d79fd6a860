pub mod length;
pub mod temperature;
pub mod validation;
pub mod weight;

#[cfg(test)]
mod tests;

pub use length::LengthConverter;
pub use temperature::TemperatureConverter;
pub use validation::ensure_non_negative;
pub use weight::WeightConverter;

use crate::units::{resolve, ConversionError, Domain, Unit, UnknownUnitPolicy};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single value waiting to be converted
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// Two-stage conversion through the domain's canonical base unit
pub trait Converter {
    type Unit: Unit;

    fn policy(&self) -> UnknownUnitPolicy;

    fn to_base(&self, value: f64, unit: Self::Unit) -> f64;

    fn from_base(&self, value: f64, unit: Self::Unit) -> f64;

    /// Checked before any unit lookup or arithmetic
    fn validate(&self, _value: f64) -> Result<(), ConversionError> {
        Ok(())
    }

    fn convert_units(
        &self,
        value: f64,
        from: Self::Unit,
        to: Self::Unit,
    ) -> Result<f64, ConversionError> {
        self.validate(value)?;
        Ok(self.route(value, from, to))
    }

    /// Convert between unit symbols, resolving them through the registry
    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
        self.validate(value)?;
        let from = resolve::<Self::Unit>(from_unit, self.policy())?;
        let to = resolve::<Self::Unit>(to_unit, self.policy())?;
        let result = self.route(value, from, to);
        let domain = <Self::Unit as Unit>::DOMAIN;
        debug!(%domain, value, from_unit, to_unit, result, "converted");
        Ok(result)
    }

    fn convert_request(&self, request: &ConversionRequest) -> Result<f64, ConversionError> {
        self.convert(request.value, &request.from_unit, &request.to_unit)
    }

    #[doc(hidden)]
    fn route(&self, value: f64, from: Self::Unit, to: Self::Unit) -> f64 {
        // Same unit returns the input untouched so identity is exact
        if from == to {
            return value;
        }
        self.from_base(self.to_base(value, from), to)
    }
}

/// Dispatch a request to the converter of `domain`
pub fn convert_in(
    domain: Domain,
    request: &ConversionRequest,
    policy: UnknownUnitPolicy,
) -> Result<f64, ConversionError> {
    match domain {
        Domain::Length => LengthConverter::with_policy(policy).convert_request(request),
        Domain::Weight => WeightConverter::with_policy(policy).convert_request(request),
        Domain::Temperature => TemperatureConverter::with_policy(policy).convert_request(request),
    }
}
