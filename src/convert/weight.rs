use crate::convert::validation::ensure_non_negative;
use crate::convert::Converter;
use crate::units::{ConversionError, UnknownUnitPolicy, WeightUnit};

/// Converts weights through grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightConverter {
    policy: UnknownUnitPolicy,
}

impl WeightConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnknownUnitPolicy) -> Self {
        Self { policy }
    }
}

impl Converter for WeightConverter {
    type Unit = WeightUnit;

    fn policy(&self) -> UnknownUnitPolicy {
        self.policy
    }

    fn to_base(&self, value: f64, unit: WeightUnit) -> f64 {
        match unit {
            WeightUnit::Decigram => value / 10.0,
            WeightUnit::Milligram => value / 1000.0,
            WeightUnit::Kilogram => value * 1000.0,
            WeightUnit::Gram => value,
        }
    }

    fn from_base(&self, grams: f64, unit: WeightUnit) -> f64 {
        match unit {
            WeightUnit::Decigram => grams * 10.0,
            WeightUnit::Milligram => grams * 1000.0,
            WeightUnit::Kilogram => grams / 1000.0,
            WeightUnit::Gram => grams,
        }
    }

    fn validate(&self, value: f64) -> Result<(), ConversionError> {
        ensure_non_negative(value)
    }
}
