//! Helpers shared by entities holding decimal fields.
//!
//! `f64` is neither `Eq` nor `Hash`. Entities with decimal fields implement
//! both by hand; these helpers keep the hash consistent with `==`.
//!
//! Invariant: a decimal stored in an entity is never NaN and never `-0.0`.
//! Setters reject non-finite values and JSON cannot encode NaN, so `==` on
//! the stored values is reflexive. Setters and the decoder both store zero
//! as `0.0`, so equal entities render and encode identically.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer};

/// `-0.0` becomes `0.0`; every other value is returned unchanged.
pub(crate) fn normalize_f64(value: f64) -> f64 {
    value + 0.0
}

pub(crate) fn normalize_opt_f64(value: Option<f64>) -> Option<f64> {
    value.map(normalize_f64)
}

/// `deserialize_with` hook for optional decimal fields.
pub(crate) fn deserialize_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(normalize_opt_f64)
}

/// Hash a decimal so that values comparing equal hash equally.
pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    // 0.0 == -0.0 but their bit patterns differ.
    let normalized = if value == 0.0 { 0.0 } else { value };
    normalized.to_bits().hash(state);
}

pub(crate) fn hash_opt_f64<H: Hasher>(value: Option<f64>, state: &mut H) {
    match value {
        Some(v) => {
            1u8.hash(state);
            hash_f64(v, state);
        }
        None => 0u8.hash(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn digest(value: Option<f64>) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_opt_f64(value, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert!(normalize_f64(-0.0).is_sign_positive());
        assert_eq!(normalize_f64(-1.5), -1.5);
        assert_eq!(normalize_opt_f64(None), None);
    }

    #[test]
    fn signed_zeros_hash_equal() {
        assert_eq!(digest(Some(0.0)), digest(Some(-0.0)));
    }

    #[test]
    fn absent_differs_from_zero() {
        assert_ne!(digest(None), digest(Some(0.0)));
    }
}
