//! Core domain layer for ocppkit.
//!
//! This module contains pure business logic: the validation protocol every
//! OCPP entity follows, and the entities themselves. All I/O and decoding
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: `validate()` is a pure read
//! - **Value entities**: All domain objects are Clone + Eq + Hash
//! - **Rich domain model**: Constraints live in entities, not services

// Public API - what the world sees
pub mod catalog;
pub mod constraint;
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    AnyEntity, ChargingSchedule, ChargingSchedulePeriod, Component, CustomData, Evse,
};

pub use catalog::{ENTITY_REGISTRY, EntityDef, FieldDef, find_entity};
pub use constraint::ConstraintViolation;
pub use error::{DomainError, ErrorCategory};
pub use validation::{Validatable, Validation};
pub use value_objects::{ChargingRateUnit, EntityKind};
