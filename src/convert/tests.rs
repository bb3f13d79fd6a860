#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::units::{ConversionError, Domain, LengthUnit, TemperatureUnit, UnknownUnitPolicy};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_length_known_factors() {
        let converter = LengthConverter::new();
        assert_eq!(converter.convert(1.0, "km", "m").unwrap(), 1000.0);
        assert_eq!(converter.convert(100.0, "cm", "m").unwrap(), 1.0);
        assert_eq!(converter.convert(2500.0, "mm", "m").unwrap(), 2.5);
        assert_eq!(converter.convert(3.0, "m", "cm").unwrap(), 300.0);
        assert_eq!(converter.convert(1.0, "km", "mm").unwrap(), 1_000_000.0);
        assert_close(converter.convert(12.0, "cm", "km").unwrap(), 0.00012);
    }

    #[test]
    fn test_weight_known_factors() {
        let converter = WeightConverter::new();
        assert_eq!(converter.convert(1.0, "kg", "g").unwrap(), 1000.0);
        assert_eq!(converter.convert(1000.0, "mg", "g").unwrap(), 1.0);
        assert_eq!(converter.convert(10.0, "dg", "g").unwrap(), 1.0);
        assert_eq!(converter.convert(1.0, "g", "dg").unwrap(), 10.0);
        assert_eq!(converter.convert(2.0, "kg", "mg").unwrap(), 2_000_000.0);
    }

    #[test]
    fn test_temperature_reference_points() {
        let converter = TemperatureConverter::new();
        assert_eq!(converter.convert(-40.0, "C", "F").unwrap(), -40.0);
        assert_eq!(converter.convert(0.0, "C", "K").unwrap(), 273.15);
        assert_eq!(converter.convert(212.0, "F", "C").unwrap(), 100.0);
        assert_eq!(converter.convert(100.0, "C", "F").unwrap(), 212.0);
        assert_close(converter.convert(32.0, "F", "K").unwrap(), 273.15);
        assert_close(converter.convert(0.0, "K", "C").unwrap(), -273.15);
    }

    #[test]
    fn test_negative_values_rejected_before_unit_lookup() {
        let length = LengthConverter::with_policy(UnknownUnitPolicy::Reject);
        assert_eq!(
            length.convert(-1.0, "parsec", "m"),
            Err(ConversionError::NegativeValue(-1.0))
        );

        let weight = WeightConverter::new();
        assert_eq!(
            weight.convert(-1.0, "g", "g"),
            Err(ConversionError::NegativeValue(-1.0))
        );
    }

    #[test]
    fn test_temperature_accepts_negative_values() {
        let converter = TemperatureConverter::new();
        assert_close(converter.convert(-10.0, "C", "F").unwrap(), 14.0);
        // Below absolute zero is passed through
        assert_close(converter.convert(-5.0, "K", "C").unwrap(), -278.15);
    }

    #[test]
    fn test_unknown_unit_identity_fallback() {
        let length = LengthConverter::new();
        // "ft" behaves as meters on both legs
        assert_eq!(length.convert(5.0, "ft", "cm").unwrap(), 500.0);
        assert_eq!(length.convert(5.0, "km", "ft").unwrap(), 5000.0);

        let temperature = TemperatureConverter::new();
        assert_close(temperature.convert(20.0, "c", "K").unwrap(), 293.15);
    }

    #[test]
    fn test_unknown_unit_rejected_under_strict_policy() {
        let weight = WeightConverter::with_policy(UnknownUnitPolicy::Reject);
        let err = weight.convert(5.0, "g", "lb").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                domain: Domain::Weight,
                symbol: "lb".to_string(),
            }
        );
    }

    #[test]
    fn test_typed_conversion_matches_symbolic() {
        let converter = LengthConverter::new();
        let typed = converter
            .convert_units(42.0, LengthUnit::Kilometer, LengthUnit::Centimeter)
            .unwrap();
        let symbolic = converter.convert(42.0, "km", "cm").unwrap();
        assert_eq!(typed, symbolic);

        let temperature = TemperatureConverter::new();
        assert_eq!(
            temperature
                .convert_units(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit)
                .unwrap(),
            32.0
        );
    }

    #[test]
    fn test_same_unit_is_exact_identity() {
        let converter = LengthConverter::new();
        for value in [0.0, 0.07, 1e-300, 123456.789] {
            assert_eq!(converter.convert(value, "cm", "cm").unwrap(), value);
        }
    }

    #[test]
    fn test_convert_in_dispatches_by_domain() {
        let request = ConversionRequest::new(1.0, "km", "m");
        assert_eq!(
            convert_in(Domain::Length, &request, UnknownUnitPolicy::Identity).unwrap(),
            1000.0
        );

        let request = ConversionRequest::new(1.0, "kg", "g");
        assert_eq!(
            convert_in(Domain::Weight, &request, UnknownUnitPolicy::Identity).unwrap(),
            1000.0
        );

        let request = ConversionRequest::new(-40.0, "F", "C");
        assert_eq!(
            convert_in(Domain::Temperature, &request, UnknownUnitPolicy::Identity).unwrap(),
            -40.0
        );

        // Temperature symbols are not length symbols
        let request = ConversionRequest::new(1.0, "K", "m");
        assert!(convert_in(Domain::Length, &request, UnknownUnitPolicy::Reject).is_err());
    }
}
