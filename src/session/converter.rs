use crate::config::Config;
use crate::convert::{convert_in, ConversionRequest};
use crate::history::{format_result, render_table, ConversionHistory, ConversionRecord};
use crate::units::{is_registered, units_of, ConversionError, Domain, UnitInfo, UnknownUnitPolicy};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Not a number: '{0}'")]
    InvalidNumber(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("No converter is open")]
    NoActiveConverter,

    #[error("Failed to export history to {path}: {reason}")]
    Export { path: String, reason: String },
}

impl SessionError {
    /// Text shown to the user in place of a result
    pub fn user_message(&self) -> String {
        match self {
            SessionError::InvalidNumber(_) => "Invalid Input. Please enter a number".to_string(),
            SessionError::Conversion(err) => format!("Invalid Input. {}", err),
            SessionError::NoActiveConverter => {
                "Choose length, weight or temperature first".to_string()
            }
            SessionError::Export { .. } => format!("Export failed. {}", self),
        }
    }
}

/// A successful conversion: the stored record plus its display label
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub record: ConversionRecord,
    pub label: String,
}

/// Parse user text into a finite number
pub fn parse_value(text: &str) -> Result<f64, SessionError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SessionError::InvalidNumber(trimmed.to_string())),
    }
}

/// Parse `text` and convert it in `domain` without touching any history
pub fn convert_text(
    domain: Domain,
    text: &str,
    from_unit: &str,
    to_unit: &str,
    policy: UnknownUnitPolicy,
) -> Result<ConversionRecord, SessionError> {
    let value = parse_value(text)?;
    let request = ConversionRequest::new(value, from_unit, to_unit);
    let result = convert_in(domain, &request, policy)?;
    Ok(ConversionRecord::new(value, from_unit, to_unit, result))
}

/// One open converter screen and the conversions made on it
#[derive(Debug, Clone)]
pub struct ConverterSession {
    domain: Domain,
    from_unit: String,
    to_unit: String,
    policy: UnknownUnitPolicy,
    precision: Option<usize>,
    history: ConversionHistory,
}

impl ConverterSession {
    pub fn new(domain: Domain, config: &Config) -> Self {
        let (from_unit, to_unit) = config.default_units(domain);
        Self {
            domain,
            from_unit,
            to_unit,
            policy: config.unknown_units,
            precision: config.precision,
            history: ConversionHistory::new(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    pub fn available_units(&self) -> Vec<UnitInfo> {
        units_of(self.domain)
    }

    pub fn select_from(&mut self, symbol: &str) -> Result<(), SessionError> {
        self.from_unit = self.checked_symbol(symbol)?;
        Ok(())
    }

    pub fn select_to(&mut self, symbol: &str) -> Result<(), SessionError> {
        self.to_unit = self.checked_symbol(symbol)?;
        Ok(())
    }

    // Selections only ever come from the registry list
    fn checked_symbol(&self, symbol: &str) -> Result<String, SessionError> {
        if is_registered(self.domain, symbol) {
            Ok(symbol.to_string())
        } else {
            Err(ConversionError::UnknownUnit {
                domain: self.domain,
                symbol: symbol.to_string(),
            }
            .into())
        }
    }

    /// Convert `text` using the selected units
    pub fn submit(&mut self, text: &str) -> Result<Outcome, SessionError> {
        let from = self.from_unit.clone();
        let to = self.to_unit.clone();
        self.convert_with(text, &from, &to)
    }

    /// Convert `text` between explicit symbols, subject to the session's policy
    pub fn convert_with(
        &mut self,
        text: &str,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<Outcome, SessionError> {
        let record = convert_text(self.domain, text, from_unit, to_unit, self.policy)?;
        self.history.append(record.clone());
        debug!(domain = %self.domain, entries = self.history.len(), "history appended");

        Ok(Outcome {
            label: format_result(record.result(), to_unit, self.precision),
            record,
        })
    }

    /// Write the history as JSON to `path` and return the number of records written.
    /// A failed write leaves the history as it was.
    pub fn export(&self, path: &Path) -> Result<usize, SessionError> {
        let failed = |reason: String| SessionError::Export {
            path: path.display().to_string(),
            reason,
        };

        let json = self.history.to_json().map_err(|e| failed(e.to_string()))?;
        if let Err(e) = std::fs::write(path, json) {
            warn!(path = %path.display(), error = %e, "history export failed");
            return Err(failed(e.to_string()));
        }

        debug!(path = %path.display(), entries = self.history.len(), "history exported");
        Ok(self.history.len())
    }

    pub fn table(&self) -> String {
        render_table(self.history.all(), self.precision)
    }
}
