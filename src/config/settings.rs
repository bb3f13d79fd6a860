use crate::config::validation::ValidationResult;
use crate::units::{is_registered, Domain, UnknownUnitPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Looked up in the working directory when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "unitconv.toml";

/// Largest decimal count that still says something about an f64
const MAX_PRECISION: usize = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Fallback filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub unknown_units: UnknownUnitPolicy,

    // Fixed decimals for displayed numbers; shortest form when absent
    #[serde(default)]
    pub precision: Option<usize>,

    // Initial unit selection of each converter screen
    #[serde(default)]
    pub defaults: DefaultUnits,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DefaultUnits {
    #[serde(default)]
    pub length: UnitSelection,
    #[serde(default)]
    pub weight: UnitSelection,
    #[serde(default)]
    pub temperature: UnitSelection,
}

impl DefaultUnits {
    pub fn get(&self, domain: Domain) -> &UnitSelection {
        match domain {
            Domain::Length => &self.length,
            Domain::Weight => &self.weight,
            Domain::Temperature => &self.temperature,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UnitSelection {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `explicit` if given, else `unitconv.toml` when present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load_from_file(fallback)
                } else {
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn empty() -> Self {
        Self {
            log_level: default_log_level(),
            unknown_units: UnknownUnitPolicy::default(),
            precision: None,
            defaults: DefaultUnits::default(),
        }
    }

    /// Starting (from, to) symbols for a converter screen.
    /// Unregistered or missing entries fall back to the domain's base unit.
    pub fn default_units(&self, domain: Domain) -> (String, String) {
        let selection = self.defaults.get(domain);
        (
            Self::pick_default(domain, selection.from.as_deref()),
            Self::pick_default(domain, selection.to.as_deref()),
        )
    }

    fn pick_default(domain: Domain, symbol: Option<&str>) -> String {
        match symbol {
            Some(symbol) if is_registered(domain, symbol) => symbol.to_string(),
            Some(symbol) => {
                warn!(%domain, symbol, "configured default unit is not registered, using base unit");
                domain.base_symbol().to_string()
            }
            None => domain.base_symbol().to_string(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut validation = ValidationResult::new();

        for domain in Domain::ALL {
            let selection = self.defaults.get(domain);
            for (side, symbol) in [("from", &selection.from), ("to", &selection.to)] {
                if let Some(symbol) = symbol {
                    if !is_registered(domain, symbol) {
                        validation.warn(
                            format!("defaults.{}.{}", domain, side),
                            format!(
                                "'{}' is not a {} unit, base unit '{}' will be used",
                                symbol,
                                domain,
                                domain.base_symbol()
                            ),
                        );
                    }
                }
            }
        }

        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                validation.warn(
                    "precision",
                    format!(
                        "precision {} exceeds the {} significant digits an f64 carries",
                        precision, MAX_PRECISION
                    ),
                );
            }
        }

        if tracing_subscriber::EnvFilter::try_new(&self.log_level).is_err() {
            validation.error(
                "log_level",
                format!("Invalid log level filter: {}", self.log_level),
            );
        }

        validation
    }
}
