//! Application layer for ocppkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ValidationService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! constraint logic itself. Every rule lives on the entities in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ReportStatus, ValidationReport, ValidationService, ViolationInfo};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentSource, EntityCodec};

pub use error::ApplicationError;
