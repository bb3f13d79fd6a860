//! Property-based tests for the three converters

use proptest::prelude::*;
use unit_converter::units::{LengthUnit, TemperatureUnit, Unit, WeightUnit};
use unit_converter::{ConversionError, Converter, LengthConverter, TemperatureConverter, WeightConverter};

fn unit_strategy<U: Unit>() -> impl Strategy<Value = U> {
    prop::sample::select(U::all().to_vec())
}

fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= scale * 1e-9
}

/// Property: converting to the same unit returns the input exactly.
#[test]
fn prop_same_unit_is_identity() {
    proptest!(|(value in 0.0f64..1e12, length in unit_strategy::<LengthUnit>(),
                weight in unit_strategy::<WeightUnit>(),
                temperature in unit_strategy::<TemperatureUnit>())| {
        prop_assert_eq!(
            LengthConverter::new().convert(value, length.symbol(), length.symbol()).unwrap(),
            value
        );
        prop_assert_eq!(
            WeightConverter::new().convert(value, weight.symbol(), weight.symbol()).unwrap(),
            value
        );
        prop_assert_eq!(
            TemperatureConverter::new()
                .convert(value, temperature.symbol(), temperature.symbol())
                .unwrap(),
            value
        );
    });
}

/// Property: a conversion followed by its reverse returns the input within tolerance.
#[test]
fn prop_length_round_trip() {
    proptest!(|(value in 0.0f64..1e9,
                a in unit_strategy::<LengthUnit>(),
                b in unit_strategy::<LengthUnit>())| {
        let converter = LengthConverter::new();
        let there = converter.convert_units(value, a, b).unwrap();
        let back = converter.convert_units(there, b, a).unwrap();
        prop_assert!(approx_eq(back, value), "{} {} -> {} {} -> {}", value, a, there, b, back);
    });
}

#[test]
fn prop_weight_round_trip() {
    proptest!(|(value in 0.0f64..1e9,
                a in unit_strategy::<WeightUnit>(),
                b in unit_strategy::<WeightUnit>())| {
        let converter = WeightConverter::new();
        let there = converter.convert_units(value, a, b).unwrap();
        let back = converter.convert_units(there, b, a).unwrap();
        prop_assert!(approx_eq(back, value), "{} {} -> {} {} -> {}", value, a, there, b, back);
    });
}

#[test]
fn prop_temperature_round_trip() {
    proptest!(|(value in -500.0f64..5000.0,
                a in unit_strategy::<TemperatureUnit>(),
                b in unit_strategy::<TemperatureUnit>())| {
        let converter = TemperatureConverter::new();
        let there = converter.convert_units(value, a, b).unwrap();
        let back = converter.convert_units(there, b, a).unwrap();
        prop_assert!(approx_eq(back, value), "{} {} -> {} {} -> {}", value, a, there, b, back);
    });
}

/// Property: length and weight reject every negative value regardless of units.
#[test]
fn prop_negative_magnitudes_rejected() {
    proptest!(|(value in -1e12f64..-1e-12,
                length in unit_strategy::<LengthUnit>(),
                weight in unit_strategy::<WeightUnit>())| {
        prop_assert_eq!(
            LengthConverter::new().convert(value, length.symbol(), "m"),
            Err(ConversionError::NegativeValue(value))
        );
        prop_assert_eq!(
            WeightConverter::new().convert(value, "g", weight.symbol()),
            Err(ConversionError::NegativeValue(value))
        );
    });
}
