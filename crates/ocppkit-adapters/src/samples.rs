//! Built-in sample documents.
//!
//! One valid entity per kind, built through the checked constructors. Used by
//! `ocppkit sample` and as fixtures in tests.

use chrono::DateTime;

use ocppkit_core::{
    domain::{
        AnyEntity, ChargingRateUnit, ChargingSchedule, ChargingSchedulePeriod, Component,
        ConstraintViolation, CustomData, DomainError, EntityKind, Evse,
    },
    error::OcppkitResult,
};

const VENDOR_ID: &str = "org.example.ocppkit";

/// 2024-01-01T00:00:00Z
const SAMPLE_EPOCH_SECS: i64 = 1_704_067_200;

/// A valid sample entity of `kind`.
pub fn sample(kind: EntityKind) -> OcppkitResult<AnyEntity> {
    build(kind).map_err(|v| DomainError::from(v).into())
}

/// One sample per kind, in catalog order.
pub fn all() -> OcppkitResult<Vec<AnyEntity>> {
    EntityKind::ALL.into_iter().map(sample).collect()
}

fn build(kind: EntityKind) -> Result<AnyEntity, ConstraintViolation> {
    Ok(match kind {
        EntityKind::CustomData => CustomData::new(VENDOR_ID)?.into(),
        EntityKind::Evse => evse()?.into(),
        EntityKind::Component => Component::new("Connector")?
            .with_instance("Left")?
            .with_evse(evse()?)?
            .into(),
        EntityKind::ChargingSchedulePeriod => ChargingSchedulePeriod::new(0, 32.0)?.into(),
        EntityKind::ChargingSchedule => schedule()?.into(),
    })
}

fn evse() -> Result<Evse, ConstraintViolation> {
    Evse::new(1)
        .with_connector_id(1)
        .with_custom_data(CustomData::new(VENDOR_ID)?)
}

fn schedule() -> Result<ChargingSchedule, ConstraintViolation> {
    let mut schedule = ChargingSchedule::new(
        ChargingRateUnit::A,
        vec![
            ChargingSchedulePeriod::new(0, 32.0)?.with_number_phases(3),
            ChargingSchedulePeriod::new(3600, 16.0)?,
        ],
    )?
    .with_duration(7200)?
    .with_min_charging_rate(6.0)?;

    schedule.set_start_schedule(DateTime::from_timestamp(SAMPLE_EPOCH_SECS, 0));
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocppkit_core::domain::Validatable;

    #[test]
    fn every_sample_is_valid_and_of_its_kind() {
        for kind in EntityKind::ALL {
            let entity = sample(kind).unwrap();
            assert_eq!(entity.kind(), kind);
            assert!(entity.validate(), "{entity}");
        }
    }

    #[test]
    fn all_follows_catalog_order() {
        let kinds: Vec<_> = all().unwrap().iter().map(AnyEntity::kind).collect();
        assert_eq!(kinds, EntityKind::ALL);
    }

    #[test]
    fn schedule_sample_has_start() {
        let AnyEntity::ChargingSchedule(schedule) = sample(EntityKind::ChargingSchedule).unwrap()
        else {
            panic!("expected a schedule");
        };
        assert_eq!(
            schedule.start_schedule().map(|t| t.to_rfc3339()),
            Some("2024-01-01T00:00:00+00:00".to_string())
        );
    }
}
