use thiserror::Error;

use crate::domain::constraint::ConstraintViolation;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep copies)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Constraint Violations
    // ========================================================================
    /// A setter or constructor rejected a value.
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// An entity failed aggregate validation.
    #[error(
        "{entity} is invalid ({count} violation(s)): {first}",
        count = .violations.len(),
        first = first_violation(.violations)
    )]
    InvalidEntity {
        entity: &'static str,
        violations: Vec<ConstraintViolation>,
    },

    // ========================================================================
    // Catalog Lookups
    // ========================================================================
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    #[error("unknown {enumeration} value: {value}")]
    UnknownEnumValue {
        enumeration: &'static str,
        value: String,
    },
}

fn first_violation(violations: &[ConstraintViolation]) -> String {
    violations
        .first()
        .map_or_else(String::new, ToString::to_string)
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Constraint(violation) => vec![
                format!("Field '{}' {}", violation.field(), violation.reason()),
                "Correct the value and try again".into(),
            ],
            Self::InvalidEntity { entity, violations } => {
                let mut out = vec![format!("{entity} has {} violation(s):", violations.len())];
                out.extend(violations.iter().map(|v| format!("  • {v}")));
                out
            }
            Self::UnknownKind(kind) => vec![
                format!("'{kind}' is not a known entity kind"),
                "Try: ocppkit kinds".into(),
            ],
            Self::UnknownEnumValue { enumeration, .. } => vec![format!(
                "Use one of the documented {enumeration} values (see: ocppkit describe)"
            )],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Constraint(_) | Self::InvalidEntity { .. } | Self::UnknownEnumValue { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownKind(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_entity_message_names_first_violation() {
        let err = DomainError::InvalidEntity {
            entity: "Component",
            violations: vec![ConstraintViolation::new(
                "name",
                "x",
                "must not exceed 50 characters (was 51)",
            )],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Component is invalid (1 violation(s))"));
        assert!(msg.contains("name: must not exceed 50 characters"));
    }

    #[test]
    fn constraint_is_transparent() {
        let v = ConstraintViolation::new("vendorId", "", "is required");
        assert_eq!(DomainError::from(v.clone()).to_string(), v.to_string());
    }

    #[test]
    fn categories() {
        assert_eq!(
            DomainError::UnknownKind("x".into()).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DomainError::UnknownEnumValue {
                enumeration: "ChargingRateUnit",
                value: "kW".into()
            }
            .category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn invalid_entity_suggestions_list_each_violation() {
        let err = DomainError::InvalidEntity {
            entity: "Evse",
            violations: vec![
                ConstraintViolation::new("a", &1, "bad"),
                ConstraintViolation::new("b", &2, "bad"),
            ],
        };
        assert_eq!(err.suggestions().len(), 3);
    }
}
