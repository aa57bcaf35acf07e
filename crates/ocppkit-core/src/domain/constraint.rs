//! Field constraints.
//!
//! Every constrained field in the catalog is checked by exactly one pure
//! predicate built from the helpers below. Entity setters call the predicate
//! before storing a value; `Validatable::validation` calls the same predicate
//! against the stored value. Nothing in here mutates or logs.

use std::fmt;

use thiserror::Error;

use crate::domain::validation::Validatable;

/// A single field rejected by its constraint predicate.
///
/// `field` is the wire name of the field (`name`, `vendorId`, ...). Violations
/// surfaced from nested entities carry a dotted path such as `evse.id` or
/// `chargingSchedulePeriod[1].limit`.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("{field}: {reason} (got {value})")]
pub struct ConstraintViolation {
    field: String,
    value: String,
    reason: String,
}

impl ConstraintViolation {
    pub fn new(
        field: impl Into<String>,
        value: &(impl fmt::Debug + ?Sized),
        reason: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            value: format!("{value:?}"),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Debug rendering of the rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Prefix the field path with the owning field of a parent entity.
    pub(crate) fn nested_under(mut self, parent: &str) -> Self {
        self.field = format!("{parent}.{}", self.field);
        self
    }
}

/// Presence: a required field must hold a value.
pub fn required<'a, T: fmt::Debug>(
    field: &str,
    value: Option<&'a T>,
) -> Result<&'a T, ConstraintViolation> {
    value.ok_or_else(|| ConstraintViolation::new(field, &None::<()>, "is required"))
}

/// Bounded length, counted in characters rather than bytes.
pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), ConstraintViolation> {
    let len = value.chars().count();
    if len > max {
        return Err(ConstraintViolation::new(
            field,
            value,
            format!("must not exceed {max} characters (was {len})"),
        ));
    }
    Ok(())
}

/// Bounded length for an optional text field. Absence is valid; the empty
/// string is a present value and is checked like any other.
pub fn optional_max_length(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ConstraintViolation> {
    value.map_or(Ok(()), |v| max_length(field, v, max))
}

/// Inclusive range. NaN never satisfies the bounds.
pub fn in_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), ConstraintViolation>
where
    T: PartialOrd + fmt::Debug + fmt::Display,
{
    if min <= value && value <= max {
        Ok(())
    } else {
        Err(ConstraintViolation::new(
            field,
            &value,
            format!("must be between {min} and {max} inclusive"),
        ))
    }
}

/// Inclusive lower bound.
pub fn at_least<T>(field: &str, value: T, min: T) -> Result<(), ConstraintViolation>
where
    T: PartialOrd + fmt::Debug + fmt::Display,
{
    if value >= min {
        Ok(())
    } else {
        Err(ConstraintViolation::new(
            field,
            &value,
            format!("must be at least {min}"),
        ))
    }
}

/// Decimal fields must be finite numbers.
pub fn finite(field: &str, value: f64) -> Result<(), ConstraintViolation> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConstraintViolation::new(field, &value, "must be a finite number"))
    }
}

/// A required list must carry at least one element.
pub fn non_empty<T>(field: &str, items: &[T]) -> Result<(), ConstraintViolation> {
    if items.is_empty() {
        Err(ConstraintViolation::new(
            field,
            &Vec::<()>::new(),
            "must contain at least one element",
        ))
    } else {
        Ok(())
    }
}

/// Nested validity: absent, or the nested entity validates.
pub fn nested<V>(field: &str, value: Option<&V>) -> Result<(), ConstraintViolation>
where
    V: Validatable + fmt::Debug,
{
    let Some(entity) = value else {
        return Ok(());
    };

    let validation = entity.validation();
    if validation.is_valid() {
        return Ok(());
    }

    let details = validation
        .violations()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(ConstraintViolation::new(
        field,
        entity,
        format!("is invalid: {details}"),
    ))
}

/// Every element of a list of nested entities validates. The first offending
/// element is reported with its index.
pub fn each_valid<V>(field: &str, items: &[V]) -> Result<(), ConstraintViolation>
where
    V: Validatable + fmt::Debug,
{
    items
        .iter()
        .enumerate()
        .try_for_each(|(i, item)| nested(&format!("{field}[{i}]"), Some(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::Validation;

    #[derive(Debug)]
    struct Flag(bool);

    impl Validatable for Flag {
        fn validation(&self) -> Validation {
            Validation::of("Flag").check(if self.0 {
                Ok(())
            } else {
                Err(ConstraintViolation::new("flag", &self.0, "must be set"))
            })
        }
    }

    #[test]
    fn required_reports_field_name() {
        let err = required::<i32>("startPeriod", None).unwrap_err();
        assert_eq!(err.field(), "startPeriod");
        assert_eq!(err.reason(), "is required");
        assert_eq!(required("startPeriod", Some(&0)).unwrap(), &0);
    }

    #[test]
    fn max_length_boundary() {
        let fifty = "a".repeat(50);
        let fifty_one = "a".repeat(51);
        assert!(max_length("name", &fifty, 50).is_ok());

        let err = max_length("name", &fifty_one, 50).unwrap_err();
        assert!(err.reason().contains("50 characters"));
        assert!(err.to_string().starts_with("name:"));
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        // 50 two-byte characters
        let umlauts = "ü".repeat(50);
        assert!(max_length("name", &umlauts, 50).is_ok());
    }

    #[test]
    fn optional_max_length_accepts_absent_and_empty() {
        assert!(optional_max_length("instance", None, 50).is_ok());
        assert!(optional_max_length("instance", Some(""), 50).is_ok());
        assert!(optional_max_length("instance", Some("x".repeat(51).as_str()), 50).is_err());
    }

    #[test]
    fn range_is_inclusive() {
        assert!(in_range("numberPhases", 1, 1, 3).is_ok());
        assert!(in_range("numberPhases", 3, 1, 3).is_ok());
        assert!(in_range("numberPhases", 0, 1, 3).is_err());
        assert!(in_range("numberPhases", 4, 1, 3).is_err());
    }

    #[test]
    fn range_rejects_nan() {
        assert!(in_range("limit", f64::NAN, 0.0, 100.0).is_err());
        assert!(at_least("minChargingRate", f64::NAN, 0.0).is_err());
    }

    #[test]
    fn finite_rejects_infinity() {
        assert!(finite("limit", 32.0).is_ok());
        assert!(finite("limit", f64::INFINITY).is_err());
    }

    #[test]
    fn non_empty_list() {
        assert!(non_empty::<u8>("periods", &[]).is_err());
        assert!(non_empty("periods", &[1]).is_ok());
    }

    #[test]
    fn nested_absent_is_valid() {
        assert!(nested::<Flag>("flag", None).is_ok());
        assert!(nested("flag", Some(&Flag(true))).is_ok());

        let err = nested("flag", Some(&Flag(false))).unwrap_err();
        assert_eq!(err.field(), "flag");
        assert!(err.reason().contains("must be set"));
    }

    #[test]
    fn each_valid_reports_index() {
        let items = [Flag(true), Flag(false)];
        let err = each_valid("flags", &items).unwrap_err();
        assert_eq!(err.field(), "flags[1]");
    }

    #[test]
    fn nested_under_prefixes_path() {
        let v = ConstraintViolation::new("id", &-1, "must be at least 0").nested_under("evse");
        assert_eq!(v.field(), "evse.id");
    }
}
