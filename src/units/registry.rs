// Explicit per-domain unit registry
// Unknown symbols are never silently accepted: the caller picks a policy

use crate::units::error::ConversionError;
use crate::units::types::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How string-keyed conversions treat a symbol missing from the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownUnitPolicy {
    /// Treat the symbol as the domain's base unit
    #[default]
    Identity,
    /// Fail with `ConversionError::UnknownUnit`
    Reject,
}

/// Display entry for a registered unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitInfo {
    pub symbol: &'static str,
    pub name: &'static str,
}

fn infos<U: Unit>() -> Vec<UnitInfo> {
    U::all()
        .iter()
        .map(|u| UnitInfo {
            symbol: u.symbol(),
            name: u.name(),
        })
        .collect()
}

/// All units of a domain, in display order
pub fn units_of(domain: Domain) -> Vec<UnitInfo> {
    match domain {
        Domain::Length => infos::<LengthUnit>(),
        Domain::Weight => infos::<WeightUnit>(),
        Domain::Temperature => infos::<TemperatureUnit>(),
    }
}

pub fn is_registered(domain: Domain, symbol: &str) -> bool {
    units_of(domain).iter().any(|info| info.symbol == symbol)
}

/// Resolve a symbol to a typed unit according to `policy`
pub fn resolve<U: Unit>(symbol: &str, policy: UnknownUnitPolicy) -> Result<U, ConversionError> {
    match symbol.parse::<U>() {
        Ok(unit) => Ok(unit),
        Err(err) => match policy {
            UnknownUnitPolicy::Reject => Err(err),
            UnknownUnitPolicy::Identity => {
                let domain = U::DOMAIN;
                warn!(
                    %domain,
                    symbol,
                    base = U::BASE.symbol(),
                    "unrecognized unit, treating as base unit"
                );
                Ok(U::BASE)
            }
        },
    }
}
