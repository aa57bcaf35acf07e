//! Driven (output) ports - implemented by infrastructure.

use crate::domain::{AnyEntity, EntityKind};
use crate::error::OcppkitResult;

/// Port for reading raw documents.
///
/// Implemented by:
/// - `ocppkit_adapters::source::LocalSource` (filesystem)
/// - `ocppkit_adapters::source::MemorySource` (testing)
///
/// A location is an opaque string to the application; adapters decide
/// whether it is a path, a key, or something else.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource: Send + Sync {
    /// Read the full text at `location`.
    fn read(&self, location: &str) -> OcppkitResult<String>;

    /// Every location this source can serve, sorted.
    fn list(&self) -> OcppkitResult<Vec<String>>;
}

/// Port for the wire format.
///
/// Decoding must not run setters: a document that breaks a constraint still
/// decodes, and the service reports the violations through `validate()`.
/// Only malformed input (wrong shape, wrong types) is a decode error.
///
/// Implemented by:
/// - `ocppkit_adapters::codec::JsonCodec`
#[cfg_attr(test, mockall::automock)]
pub trait EntityCodec: Send + Sync {
    /// Decode `raw` as an entity of `kind`.
    fn decode(&self, kind: EntityKind, raw: &str) -> OcppkitResult<AnyEntity>;

    /// Encode an entity to text.
    fn encode(&self, entity: &AnyEntity) -> OcppkitResult<String>;
}
