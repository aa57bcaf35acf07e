//! Constraint catalog.
//!
//! A static description of every entity kind: which fields it has, whether
//! each is required, and what its predicate checks. This is the schema
//! surface shown to users (`ocppkit describe`); the predicates themselves
//! live on the entities.
//!
//! # Adding a New Entity
//!
//! 1. Add the entity under `entities/` implementing `Validatable`
//! 2. Add a variant to `EntityKind` and `AnyEntity`
//! 3. Add one [`EntityDef`] entry to [`ENTITY_REGISTRY`]

use crate::domain::value_objects::EntityKind;

/// One field of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Wire name.
    pub name: &'static str,
    pub required: bool,
    /// Human-readable form of the field's predicate.
    pub constraint: &'static str,
}

/// Describes one entity kind.
#[derive(Debug, Clone, Copy)]
pub struct EntityDef {
    pub kind: EntityKind,
    /// Protocol version the type comes from.
    pub protocol: &'static str,
    pub description: &'static str,
    /// Fields in declaration order (the order `validate()` checks them).
    pub fields: &'static [FieldDef],
}

const fn field(name: &'static str, required: bool, constraint: &'static str) -> FieldDef {
    FieldDef {
        name,
        required,
        constraint,
    }
}

// Length limits must match `CustomData::VENDOR_ID_MAX_LEN` and
// `Component::*_MAX_LEN`; `length_limits_match_entity_constants` compares them.
/// Single source of truth for the catalog description.
pub static ENTITY_REGISTRY: &[EntityDef] = &[
    EntityDef {
        kind: EntityKind::CustomData,
        protocol: "OCPP 2.0.1",
        description: "Vendor-specific extension data",
        fields: &[field("vendorId", true, "at most 255 characters")],
    },
    EntityDef {
        kind: EntityKind::Evse,
        protocol: "OCPP 2.0.1",
        description: "Electric Vehicle Supply Equipment",
        fields: &[
            field("customData", false, "valid CustomData"),
            field("id", true, "integer"),
            field("connectorId", false, "integer"),
        ],
    },
    EntityDef {
        kind: EntityKind::Component,
        protocol: "OCPP 2.0.1",
        description: "A physical or logical component",
        fields: &[
            field("customData", false, "valid CustomData"),
            field("evse", false, "valid EVSE"),
            field("name", true, "at most 50 characters"),
            field("instance", false, "at most 50 characters"),
        ],
    },
    EntityDef {
        kind: EntityKind::ChargingSchedulePeriod,
        protocol: "OCPP 1.6",
        description: "One interval of a charging schedule",
        fields: &[
            field("startPeriod", true, "integer (seconds from schedule start)"),
            field("limit", true, "finite decimal"),
            field("numberPhases", false, "integer"),
        ],
    },
    EntityDef {
        kind: EntityKind::ChargingSchedule,
        protocol: "OCPP 1.6",
        description: "Charging power or current profile over time",
        fields: &[
            field("duration", false, "integer >= 0 (seconds)"),
            field("startSchedule", false, "RFC 3339 timestamp"),
            field("chargingRateUnit", true, "one of W, A"),
            field(
                "chargingSchedulePeriod",
                true,
                "non-empty list of valid ChargingSchedulePeriod",
            ),
            field("minChargingRate", false, "finite decimal >= 0"),
        ],
    },
];

/// Look up the description of a kind.
pub fn find_entity(kind: EntityKind) -> Option<&'static EntityDef> {
    ENTITY_REGISTRY.iter().find(|def| def.kind == kind)
}
