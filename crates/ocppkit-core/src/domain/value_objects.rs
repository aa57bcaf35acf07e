//! Domain value objects: bounded enumerations.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Being enums, every value they can hold is valid, so fields of these types
//! need no runtime predicate. Parsing from text is where an out-of-range
//! value is rejected.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. For a new `EntityKind`, add an `EntityDef` in `catalog.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ChargingRateUnit ─────────────────────────────────────────────────────────

/// Unit in which a charging schedule expresses its limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargingRateUnit {
    /// Watts (power).
    W,
    /// Amperes (current).
    A,
}

impl ChargingRateUnit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W => "W",
            Self::A => "A",
        }
    }
}

impl fmt::Display for ChargingRateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChargingRateUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(Self::W),
            "A" => Ok(Self::A),
            other => Err(DomainError::UnknownEnumValue {
                enumeration: "ChargingRateUnit",
                value: other.to_string(),
            }),
        }
    }
}

// ── EntityKind ───────────────────────────────────────────────────────────────

/// Every entity type in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    CustomData,
    Evse,
    Component,
    ChargingSchedulePeriod,
    ChargingSchedule,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        Self::CustomData,
        Self::Evse,
        Self::Component,
        Self::ChargingSchedulePeriod,
        Self::ChargingSchedule,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CustomData => "custom-data",
            Self::Evse => "evse",
            Self::Component => "component",
            Self::ChargingSchedulePeriod => "charging-schedule-period",
            Self::ChargingSchedule => "charging-schedule",
        }
    }

    /// The protocol's own name for the type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::CustomData => "CustomData",
            Self::Evse => "EVSE",
            Self::Component => "Component",
            Self::ChargingSchedulePeriod => "ChargingSchedulePeriod",
            Self::ChargingSchedule => "ChargingSchedule",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    /// Accepts the kebab-case name, the protocol type name, or either written
    /// in any case with `-`/`_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "customdata" => Ok(Self::CustomData),
            "evse" => Ok(Self::Evse),
            "component" => Ok(Self::Component),
            "chargingscheduleperiod" | "period" => Ok(Self::ChargingSchedulePeriod),
            "chargingschedule" | "schedule" => Ok(Self::ChargingSchedule),
            _ => Err(DomainError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_unit_round_trips_through_text() {
        for unit in [ChargingRateUnit::W, ChargingRateUnit::A] {
            assert_eq!(unit.as_str().parse::<ChargingRateUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn rate_unit_rejects_unknown() {
        let err = "kW".parse::<ChargingRateUnit>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownEnumValue { .. }));
    }

    #[test]
    fn entity_kind_parses_aliases() {
        assert_eq!(
            EntityKind::from_str("ChargingSchedulePeriod").unwrap(),
            EntityKind::ChargingSchedulePeriod
        );
        assert_eq!(
            EntityKind::from_str("charging_schedule").unwrap(),
            EntityKind::ChargingSchedule
        );
        assert_eq!(EntityKind::from_str("EVSE").unwrap(), EntityKind::Evse);
        assert!(EntityKind::from_str("meter-value").is_err());
    }

    #[test]
    fn entity_kind_display_matches_as_str() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
    }
}
