//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod describe;
pub mod init;
pub mod kinds;
pub mod sample;

use ocppkit_core::{domain::EntityKind, error::OcppkitError};

use crate::error::{CliError, CliResult};

/// Parse a kind name as typed by the user (`component`, `Charging_Schedule`,
/// `period`, ...).
pub(crate) fn parse_kind(raw: &str) -> CliResult<EntityKind> {
    raw.parse::<EntityKind>()
        .map_err(|e| CliError::Core(OcppkitError::Domain(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kind_accepts_aliases() {
        assert_eq!(parse_kind("period").unwrap(), EntityKind::ChargingSchedulePeriod);
        assert_eq!(parse_kind("EVSE").unwrap(), EntityKind::Evse);
    }

    #[test]
    fn parse_kind_unknown_is_not_found() {
        assert_eq!(parse_kind("meter").unwrap_err().exit_code(), 3);
    }
}
