//! Ocppkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for ocppkit: a
//! self-validating data model for OCPP (Open Charge Point Protocol) message
//! structures, plus the use cases that check documents against it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           ocppkit-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: DocumentSource, Codec)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    ocppkit-adapters (Infrastructure)    │
//! │   (JsonCodec, LocalSource, MemorySource)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Validatable, constraints, entities)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ocppkit_core::domain::{Component, Evse, Validatable};
//!
//! let component = Component::new("Inverter")
//!     .unwrap()
//!     .with_evse(Evse::new(1).with_connector_id(2))
//!     .unwrap()
//!     .with_instance("Left")
//!     .unwrap();
//!
//! assert!(component.validate());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ReportStatus, ValidationReport, ValidationService,
        ports::{DocumentSource, EntityCodec},
    };
    pub use crate::domain::{
        AnyEntity, ChargingRateUnit, ChargingSchedule, ChargingSchedulePeriod, Component,
        ConstraintViolation, CustomData, EntityKind, Evse, Validatable, Validation,
    };
    pub use crate::error::{OcppkitError, OcppkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
