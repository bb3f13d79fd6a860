use crate::units::ConversionError;

/// Reject magnitudes below zero. NaN and negative zero pass through.
pub fn ensure_non_negative(value: f64) -> Result<(), ConversionError> {
    if value < 0.0 {
        return Err(ConversionError::NegativeValue(value));
    }
    Ok(())
}
