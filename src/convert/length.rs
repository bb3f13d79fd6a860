use crate::convert::validation::ensure_non_negative;
use crate::convert::Converter;
use crate::units::{ConversionError, LengthUnit, UnknownUnitPolicy};

/// Converts lengths through meters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthConverter {
    policy: UnknownUnitPolicy,
}

impl LengthConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnknownUnitPolicy) -> Self {
        Self { policy }
    }
}

impl Converter for LengthConverter {
    type Unit = LengthUnit;

    fn policy(&self) -> UnknownUnitPolicy {
        self.policy
    }

    fn to_base(&self, value: f64, unit: LengthUnit) -> f64 {
        match unit {
            LengthUnit::Centimeter => value / 100.0,
            LengthUnit::Millimeter => value / 1000.0,
            LengthUnit::Kilometer => value * 1000.0,
            LengthUnit::Meter => value,
        }
    }

    fn from_base(&self, meters: f64, unit: LengthUnit) -> f64 {
        match unit {
            LengthUnit::Centimeter => meters * 100.0,
            LengthUnit::Millimeter => meters * 1000.0,
            LengthUnit::Kilometer => meters / 1000.0,
            LengthUnit::Meter => meters,
        }
    }

    fn validate(&self, value: f64) -> Result<(), ConversionError> {
        ensure_non_negative(value)
    }
}
