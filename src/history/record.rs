use serde::{Deserialize, Serialize};

/// One completed conversion. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    value: f64,
    from_unit: String,
    to_unit: String,
    result: f64,
}

impl ConversionRecord {
    pub fn new(
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        result: f64,
    ) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            result,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn result(&self) -> f64 {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_display_column_names() {
        let record = ConversionRecord::new(1.0, "km", "m", 1000.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": 1.0,
                "fromUnit": "km",
                "toUnit": "m",
                "result": 1000.0
            })
        );
    }

    #[test]
    fn test_records_compare_by_fields() {
        let a = ConversionRecord::new(2.0, "kg", "g", 2000.0);
        let b = ConversionRecord::new(2.0, "kg", "g", 2000.0);
        let c = ConversionRecord::new(2.0, "kg", "mg", 2_000_000.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
