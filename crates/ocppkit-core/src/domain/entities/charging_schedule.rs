use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    constraint::{self, ConstraintViolation},
    entities::{
        charging_schedule_period::ChargingSchedulePeriod,
        common::{deserialize_opt_f64, hash_opt_f64, normalize_opt_f64},
    },
    validation::{Validatable, Validation},
    value_objects::ChargingRateUnit,
};

/// A charging power or current profile over time (OCPP 1.6).
///
/// Periods are kept in the order given; ordering by `startPeriod` is a
/// protocol-semantics rule and is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingSchedule {
    /// Duration of the schedule in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_schedule: Option<DateTime<Utc>>,
    charging_rate_unit: ChargingRateUnit,
    charging_schedule_period: Vec<ChargingSchedulePeriod>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    min_charging_rate: Option<f64>,
}

impl ChargingSchedule {
    pub fn new(
        charging_rate_unit: ChargingRateUnit,
        charging_schedule_period: Vec<ChargingSchedulePeriod>,
    ) -> Result<Self, ConstraintViolation> {
        Self::check_periods(&charging_schedule_period)?;
        Ok(Self {
            duration: None,
            start_schedule: None,
            charging_rate_unit,
            charging_schedule_period,
            min_charging_rate: None,
        })
    }

    // ── duration ──────────────────────────────────────────────────────────

    pub fn duration(&self) -> Option<i32> {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Option<i32>) -> Result<(), ConstraintViolation> {
        Self::check_duration(duration)?;
        self.duration = duration;
        Ok(())
    }

    pub fn with_duration(mut self, duration: i32) -> Result<Self, ConstraintViolation> {
        self.set_duration(Some(duration))?;
        Ok(self)
    }

    fn check_duration(duration: Option<i32>) -> Result<(), ConstraintViolation> {
        duration.map_or(Ok(()), |d| constraint::at_least("duration", d, 0))
    }

    // ── startSchedule ─────────────────────────────────────────────────────

    pub fn start_schedule(&self) -> Option<DateTime<Utc>> {
        self.start_schedule
    }

    pub fn set_start_schedule(&mut self, start_schedule: Option<DateTime<Utc>>) {
        self.start_schedule = start_schedule;
    }

    pub fn with_start_schedule(mut self, start_schedule: DateTime<Utc>) -> Self {
        self.set_start_schedule(Some(start_schedule));
        self
    }

    // ── chargingRateUnit ──────────────────────────────────────────────────

    pub fn charging_rate_unit(&self) -> ChargingRateUnit {
        self.charging_rate_unit
    }

    pub fn set_charging_rate_unit(&mut self, unit: ChargingRateUnit) {
        self.charging_rate_unit = unit;
    }

    // ── chargingSchedulePeriod ────────────────────────────────────────────

    pub fn charging_schedule_period(&self) -> &[ChargingSchedulePeriod] {
        &self.charging_schedule_period
    }

    /// Direct access to the periods; edits skip the setter checks and are
    /// only caught by the next `validate()`.
    pub fn charging_schedule_period_mut(&mut self) -> &mut Vec<ChargingSchedulePeriod> {
        &mut self.charging_schedule_period
    }

    pub fn set_charging_schedule_period(
        &mut self,
        periods: Vec<ChargingSchedulePeriod>,
    ) -> Result<(), ConstraintViolation> {
        Self::check_periods(&periods)?;
        self.charging_schedule_period = periods;
        Ok(())
    }

    /// Append one period. An invalid period is rejected and the list is left
    /// untouched.
    pub fn push_period(
        &mut self,
        period: ChargingSchedulePeriod,
    ) -> Result<(), ConstraintViolation> {
        let index = self.charging_schedule_period.len();
        constraint::nested(&format!("chargingSchedulePeriod[{index}]"), Some(&period))?;
        self.charging_schedule_period.push(period);
        Ok(())
    }

    pub fn with_period(
        mut self,
        period: ChargingSchedulePeriod,
    ) -> Result<Self, ConstraintViolation> {
        self.push_period(period)?;
        Ok(self)
    }

    fn check_periods(periods: &[ChargingSchedulePeriod]) -> Result<(), ConstraintViolation> {
        constraint::non_empty("chargingSchedulePeriod", periods)?;
        constraint::each_valid("chargingSchedulePeriod", periods)
    }

    // ── minChargingRate ───────────────────────────────────────────────────

    pub fn min_charging_rate(&self) -> Option<f64> {
        self.min_charging_rate
    }

    pub fn set_min_charging_rate(&mut self, rate: Option<f64>) -> Result<(), ConstraintViolation> {
        Self::check_min_charging_rate(rate)?;
        self.min_charging_rate = normalize_opt_f64(rate);
        Ok(())
    }

    pub fn with_min_charging_rate(mut self, rate: f64) -> Result<Self, ConstraintViolation> {
        self.set_min_charging_rate(Some(rate))?;
        Ok(self)
    }

    fn check_min_charging_rate(rate: Option<f64>) -> Result<(), ConstraintViolation> {
        rate.map_or(Ok(()), |r| {
            constraint::finite("minChargingRate", r)?;
            constraint::at_least("minChargingRate", r, 0.0)
        })
    }
}

impl Validatable for ChargingSchedule {
    fn validation(&self) -> Validation {
        Validation::of("ChargingSchedule")
            .check(Self::check_duration(self.duration))
            .check(constraint::non_empty(
                "chargingSchedulePeriod",
                &self.charging_schedule_period,
            ))
            .check_each("chargingSchedulePeriod", &self.charging_schedule_period)
            .check(Self::check_min_charging_rate(self.min_charging_rate))
    }
}

// Decimals are never NaN once stored (see `entities::common`).
impl Eq for ChargingSchedule {}

impl Hash for ChargingSchedule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.duration.hash(state);
        self.start_schedule.hash(state);
        self.charging_rate_unit.hash(state);
        self.charging_schedule_period.hash(state);
        hash_opt_f64(self.min_charging_rate, state);
    }
}

impl fmt::Display for ChargingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChargingSchedule")
            .field("duration", &self.duration)
            .field("start_schedule", &self.start_schedule)
            .field("charging_rate_unit", &self.charging_rate_unit)
            .field("charging_schedule_period", &self.charging_schedule_period)
            .field("min_charging_rate", &self.min_charging_rate)
            .field("is_valid", &self.validate())
            .finish()
    }
}
