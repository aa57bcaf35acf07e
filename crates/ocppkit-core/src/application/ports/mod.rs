//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `ocppkit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `DocumentSource`: Where raw documents come from
//!   - `EntityCodec`: Wire format to entities and back

pub mod output;

pub use output::{DocumentSource, EntityCodec};

#[cfg(test)]
pub use output::{MockDocumentSource, MockEntityCodec};
