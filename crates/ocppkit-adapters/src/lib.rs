//! Infrastructure adapters for ocppkit.
//!
//! This crate implements the ports defined in `ocppkit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod codec;
pub mod samples;
pub mod source;

// Re-export commonly used adapters
pub use codec::JsonCodec;
pub use source::{LocalSource, MemorySource};
