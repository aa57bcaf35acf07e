//! One interval of a charging schedule (OCPP 1.6).
//!
//! A leaf entity: scalar fields only. `startPeriod` and `limit` are required
//! but stored as `Option` because a period decoded from the wire, or built
//! up field by field from `Default`, can be observed with them missing;
//! `validate()` reports that. Setters never let a required field become
//! absent.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::{
    constraint::{self, ConstraintViolation},
    entities::common::{deserialize_opt_f64, hash_opt_f64, normalize_f64, normalize_opt_f64},
    validation::{Validatable, Validation},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingSchedulePeriod {
    /// Offset in seconds from the start of the schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_period: Option<i32>,
    /// Maximum charging rate, in the schedule's rate unit.
    #[serde(
        default,
        deserialize_with = "deserialize_opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number_phases: Option<i32>,
}

impl ChargingSchedulePeriod {
    pub fn new(start_period: i32, limit: f64) -> Result<Self, ConstraintViolation> {
        Self::check_start_period(Some(&start_period))?;
        Self::check_limit(Some(&limit))?;
        Ok(Self {
            start_period: Some(start_period),
            limit: Some(normalize_f64(limit)),
            number_phases: None,
        })
    }

    pub fn start_period(&self) -> Option<i32> {
        self.start_period
    }

    /// Set the start offset. Passing `None` is rejected.
    pub fn set_start_period(
        &mut self,
        start_period: Option<i32>,
    ) -> Result<(), ConstraintViolation> {
        Self::check_start_period(start_period.as_ref())?;
        self.start_period = start_period;
        Ok(())
    }

    pub fn with_start_period(mut self, start_period: i32) -> Result<Self, ConstraintViolation> {
        self.set_start_period(Some(start_period))?;
        Ok(self)
    }

    fn check_start_period(start_period: Option<&i32>) -> Result<(), ConstraintViolation> {
        constraint::required("startPeriod", start_period).map(|_| ())
    }

    pub fn limit(&self) -> Option<f64> {
        self.limit
    }

    /// Set the rate limit. `None` and non-finite values are rejected.
    pub fn set_limit(&mut self, limit: Option<f64>) -> Result<(), ConstraintViolation> {
        Self::check_limit(limit.as_ref())?;
        self.limit = normalize_opt_f64(limit);
        Ok(())
    }

    pub fn with_limit(mut self, limit: f64) -> Result<Self, ConstraintViolation> {
        self.set_limit(Some(limit))?;
        Ok(self)
    }

    fn check_limit(limit: Option<&f64>) -> Result<(), ConstraintViolation> {
        let limit = constraint::required("limit", limit)?;
        constraint::finite("limit", *limit)
    }

    pub fn number_phases(&self) -> Option<i32> {
        self.number_phases
    }

    pub fn set_number_phases(&mut self, number_phases: Option<i32>) {
        self.number_phases = number_phases;
    }

    pub fn with_number_phases(mut self, number_phases: i32) -> Self {
        self.set_number_phases(Some(number_phases));
        self
    }
}

impl Validatable for ChargingSchedulePeriod {
    fn validation(&self) -> Validation {
        Validation::of("ChargingSchedulePeriod")
            .check(Self::check_start_period(self.start_period.as_ref()))
            .check(Self::check_limit(self.limit.as_ref()))
    }
}

// `limit` is never NaN once stored (see `entities::common`).
impl Eq for ChargingSchedulePeriod {}

impl Hash for ChargingSchedulePeriod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start_period.hash(state);
        hash_opt_f64(self.limit, state);
        self.number_phases.hash(state);
    }
}

impl fmt::Display for ChargingSchedulePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChargingSchedulePeriod")
            .field("start_period", &self.start_period)
            .field("limit", &self.limit)
            .field("number_phases", &self.number_phases)
            .field("is_valid", &self.validate())
            .finish()
    }
}
