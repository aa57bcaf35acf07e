use crate::domain::{constraint::ConstraintViolation, error::DomainError};

/// Capability shared by every entity in the catalog.
///
/// Implementors describe their checks once in [`Validatable::validation`];
/// the boolean query and the error-returning form are derived from it, so
/// they can never disagree.
pub trait Validatable {
    /// Evaluate every field constraint against the current state.
    ///
    /// Must be a pure read: no mutation, no I/O, no logging.
    fn validation(&self) -> Validation;

    /// `true` when every field constraint holds.
    fn validate(&self) -> bool {
        self.validation().is_valid()
    }

    /// Like [`Validatable::validate`], but reports all violations.
    fn ensure_valid(&self) -> Result<(), DomainError> {
        self.validation().into_result()
    }
}

/// Outcome of validating one entity.
///
/// Field checks are recorded in declaration order. Every check runs; a
/// failing field never hides a later one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Validation {
    entity: &'static str,
    violations: Vec<ConstraintViolation>,
}

impl Validation {
    /// Start validating the entity named `entity`.
    pub fn of(entity: &'static str) -> Self {
        Self {
            entity,
            violations: Vec::new(),
        }
    }

    /// Record the outcome of one field predicate.
    pub fn check<T>(mut self, outcome: Result<T, ConstraintViolation>) -> Self {
        if let Err(violation) = outcome {
            self.violations.push(violation);
        }
        self
    }

    /// Record every violation of an optional nested entity under `field`.
    pub fn check_nested<V: Validatable>(mut self, field: &str, value: Option<&V>) -> Self {
        if let Some(entity) = value {
            self.absorb(field, entity.validation());
        }
        self
    }

    /// Record every violation of each list element under `field[index]`.
    pub fn check_each<V: Validatable>(mut self, field: &str, items: &[V]) -> Self {
        for (i, item) in items.iter().enumerate() {
            self.absorb(&format!("{field}[{i}]"), item.validation());
        }
        self
    }

    fn absorb(&mut self, field: &str, inner: Validation) {
        self.violations.extend(
            inner
                .violations
                .into_iter()
                .map(|violation| violation.nested_under(field)),
        );
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<ConstraintViolation> {
        self.violations
    }

    pub fn into_result(self) -> Result<(), DomainError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidEntity {
                entity: self.entity,
                violations: self.violations,
            })
        }
    }
}
