//! Document source adapters.

mod local;
mod memory;

pub use local::{LocalSource, discover};
pub use memory::MemorySource;
