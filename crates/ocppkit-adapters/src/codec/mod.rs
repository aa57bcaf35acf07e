//! Wire-format adapters.

mod json;

pub use json::JsonCodec;
