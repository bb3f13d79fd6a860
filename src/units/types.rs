use crate::units::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three independent unit families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Length,
    Weight,
    Temperature,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Length, Domain::Weight, Domain::Temperature];

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Length => "length",
            Domain::Weight => "weight",
            Domain::Temperature => "temperature",
        }
    }

    /// Symbol of the canonical unit every conversion in this domain is routed through
    pub fn base_symbol(self) -> &'static str {
        match self {
            Domain::Length => LengthUnit::BASE.symbol(),
            Domain::Weight => WeightUnit::BASE.symbol(),
            Domain::Temperature => TemperatureUnit::BASE.symbol(),
        }
    }

    /// Length and weight reject negative magnitudes, temperature does not
    pub fn rejects_negative(self) -> bool {
        !matches!(self, Domain::Temperature)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(Domain::Length),
            "weight" => Ok(Domain::Weight),
            "temperature" | "temp" => Ok(Domain::Temperature),
            _ => Err(ConversionError::UnknownDomain(s.to_string())),
        }
    }
}

/// A unit symbol scoped to exactly one domain
pub trait Unit:
    Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = ConversionError> + 'static
{
    const DOMAIN: Domain;
    const BASE: Self;

    /// Every unit of the domain, in display order
    fn all() -> &'static [Self];

    fn symbol(self) -> &'static str;

    fn name(self) -> &'static str;
}

fn unknown_unit(domain: Domain, symbol: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        domain,
        symbol: symbol.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Kilometer,
    Millimeter,
}

impl Unit for LengthUnit {
    const DOMAIN: Domain = Domain::Length;
    const BASE: Self = LengthUnit::Meter;

    fn all() -> &'static [Self] {
        &[
            LengthUnit::Meter,
            LengthUnit::Centimeter,
            LengthUnit::Kilometer,
            LengthUnit::Millimeter,
        ]
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Kilometer => "km",
            LengthUnit::Millimeter => "mm",
        }
    }

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meters",
            LengthUnit::Centimeter => "Centimeters",
            LengthUnit::Kilometer => "Kilometers",
            LengthUnit::Millimeter => "Millimeters",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(LengthUnit::Meter),
            "cm" => Ok(LengthUnit::Centimeter),
            "km" => Ok(LengthUnit::Kilometer),
            "mm" => Ok(LengthUnit::Millimeter),
            _ => Err(unknown_unit(Domain::Length, s)),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    Gram,
    Milligram,
    Decigram,
    Kilogram,
}

impl Unit for WeightUnit {
    const DOMAIN: Domain = Domain::Weight;
    const BASE: Self = WeightUnit::Gram;

    fn all() -> &'static [Self] {
        &[
            WeightUnit::Gram,
            WeightUnit::Milligram,
            WeightUnit::Decigram,
            WeightUnit::Kilogram,
        ]
    }

    fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Gram => "g",
            WeightUnit::Milligram => "mg",
            WeightUnit::Decigram => "dg",
            WeightUnit::Kilogram => "kg",
        }
    }

    fn name(self) -> &'static str {
        match self {
            WeightUnit::Gram => "Grams",
            WeightUnit::Milligram => "Milligrams",
            WeightUnit::Decigram => "Decigrams",
            WeightUnit::Kilogram => "Kilograms",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(WeightUnit::Gram),
            "mg" => Ok(WeightUnit::Milligram),
            "dg" => Ok(WeightUnit::Decigram),
            "kg" => Ok(WeightUnit::Kilogram),
            _ => Err(unknown_unit(Domain::Weight, s)),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl Unit for TemperatureUnit {
    const DOMAIN: Domain = Domain::Temperature;
    const BASE: Self = TemperatureUnit::Celsius;

    fn all() -> &'static [Self] {
        &[
            TemperatureUnit::Celsius,
            TemperatureUnit::Kelvin,
            TemperatureUnit::Fahrenheit,
        ]
    }

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Kelvin => "Kelvin",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(TemperatureUnit::Celsius),
            "K" => Ok(TemperatureUnit::Kelvin),
            "F" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(unknown_unit(Domain::Temperature, s)),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
