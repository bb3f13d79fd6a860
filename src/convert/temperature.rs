use crate::convert::Converter;
use crate::units::{TemperatureUnit, UnknownUnitPolicy};

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Converts temperatures through Celsius.
///
/// Negative values are valid in every unit; the Kelvin lower bound is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemperatureConverter {
    policy: UnknownUnitPolicy,
}

impl TemperatureConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnknownUnitPolicy) -> Self {
        Self { policy }
    }
}

impl Converter for TemperatureConverter {
    type Unit = TemperatureUnit;

    fn policy(&self) -> UnknownUnitPolicy {
        self.policy
    }

    fn to_base(&self, value: f64, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
            TemperatureUnit::Celsius => value,
        }
    }

    fn from_base(&self, celsius: f64, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
            TemperatureUnit::Celsius => celsius,
        }
    }
}
