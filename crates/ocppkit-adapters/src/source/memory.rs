//! In-memory document source for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use ocppkit_core::{
    application::{ApplicationError, ports::DocumentSource},
    error::OcppkitResult,
};

/// In-memory source keyed by location. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document.
    pub fn insert(
        &self,
        location: impl Into<String>,
        raw: impl Into<String>,
    ) -> OcppkitResult<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        documents.insert(location.into(), raw.into());
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(self, location: impl Into<String>, raw: impl Into<String>) -> OcppkitResult<Self> {
        self.insert(location, raw)?;
        Ok(self)
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, location: &str) -> OcppkitResult<String> {
        let documents = self
            .documents
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        documents.get(location).cloned().ok_or_else(|| {
            ApplicationError::SourceUnavailable {
                location: location.to_string(),
                reason: "no such document".into(),
            }
            .into()
        })
    }

    fn list(&self) -> OcppkitResult<Vec<String>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let mut locations: Vec<_> = documents.keys().cloned().collect();
        locations.sort();
        Ok(locations)
    }
}
