//! JSON codec using serde_json.
//!
//! Decoding goes through the entities' serde derives, not their setters, so
//! a document with an over-long name still decodes. Whether it is valid is
//! for `validate()` to say.

use serde::de::DeserializeOwned;
use tracing::debug;

use ocppkit_core::{
    application::{ApplicationError, ports::EntityCodec},
    domain::{
        AnyEntity, ChargingSchedule, ChargingSchedulePeriod, Component, CustomData, EntityKind,
        Evse,
    },
    error::OcppkitResult,
};

/// `EntityCodec` for OCPP's JSON wire format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Compact output.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

fn decode_as<T>(kind: EntityKind, raw: &str) -> OcppkitResult<AnyEntity>
where
    T: DeserializeOwned + Into<AnyEntity>,
{
    serde_json::from_str::<T>(raw).map(Into::into).map_err(|e| {
        ApplicationError::DecodeFailed {
            kind: kind.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

impl EntityCodec for JsonCodec {
    fn decode(&self, kind: EntityKind, raw: &str) -> OcppkitResult<AnyEntity> {
        debug!(kind = %kind, "Decoding JSON document");
        match kind {
            EntityKind::CustomData => decode_as::<CustomData>(kind, raw),
            EntityKind::Evse => decode_as::<Evse>(kind, raw),
            EntityKind::Component => decode_as::<Component>(kind, raw),
            EntityKind::ChargingSchedulePeriod => decode_as::<ChargingSchedulePeriod>(kind, raw),
            EntityKind::ChargingSchedule => decode_as::<ChargingSchedule>(kind, raw),
        }
    }

    fn encode(&self, entity: &AnyEntity) -> OcppkitResult<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(entity)
        } else {
            serde_json::to_string(entity)
        };
        encoded.map_err(|e| {
            ApplicationError::EncodeFailed {
                kind: entity.kind().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocppkit_core::{domain::Validatable, error::OcppkitError};

    #[test]
    fn decodes_component_with_nested_evse() {
        let raw = r#"{"name":"Connector","instance":"Left","evse":{"id":1,"connectorId":2}}"#;
        let entity = JsonCodec::new().decode(EntityKind::Component, raw).unwrap();

        let AnyEntity::Component(component) = entity else {
            panic!("expected a component");
        };
        assert_eq!(component.name(), "Connector");
        assert_eq!(component.evse().and_then(|e| e.connector_id()), Some(2));
        assert!(component.validate());
    }

    #[test]
    fn constraint_breaking_document_still_decodes() {
        let raw = format!(r#"{{"name":"{}"}}"#, "n".repeat(51));
        let entity = JsonCodec::new().decode(EntityKind::Component, &raw).unwrap();
        assert!(!entity.validate());
    }

    #[test]
    fn malformed_document_is_decode_error() {
        let err = JsonCodec::new()
            .decode(EntityKind::Evse, r#"{"connectorId":1}"#)
            .unwrap_err();
        match err {
            OcppkitError::Application(ApplicationError::DecodeFailed { kind, reason }) => {
                assert_eq!(kind, "evse");
                assert!(reason.contains("missing field `id`"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_rate_unit_is_decode_error() {
        let raw = r#"{"chargingRateUnit":"kW","chargingSchedulePeriod":[]}"#;
        assert!(
            JsonCodec::new()
                .decode(EntityKind::ChargingSchedule, raw)
                .is_err()
        );
    }

    #[test]
    fn encode_omits_absent_optionals() {
        let entity: AnyEntity = ChargingSchedulePeriod::new(0, 32.0).unwrap().into();
        let out = JsonCodec::new().encode(&entity).unwrap();
        assert_eq!(out, r#"{"startPeriod":0,"limit":32.0}"#);
    }

    #[test]
    fn pretty_output_is_indented() {
        let entity: AnyEntity = CustomData::new("com.example").unwrap().into();
        let out = JsonCodec::pretty().encode(&entity).unwrap();
        assert_eq!(out, "{\n  \"vendorId\": \"com.example\"\n}");
    }
}
