pub mod charging_schedule;
pub mod charging_schedule_period;
pub mod common;
pub mod component;
pub mod custom_data;
pub mod evse;

use std::fmt;

use serde::Serialize;

pub use crate::domain::DomainError;
pub use charging_schedule::ChargingSchedule;
pub use charging_schedule_period::ChargingSchedulePeriod;
pub use component::Component;
pub use custom_data::CustomData;
pub use evse::Evse;

use crate::domain::{
    validation::{Validatable, Validation},
    value_objects::EntityKind,
};

/// Any entity in the catalog.
///
/// Used where the concrete type is only known at run time, e.g. a document
/// decoded for a kind chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum AnyEntity {
    CustomData(CustomData),
    Evse(Evse),
    Component(Component),
    ChargingSchedulePeriod(ChargingSchedulePeriod),
    ChargingSchedule(ChargingSchedule),
}

impl AnyEntity {
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::CustomData(_) => EntityKind::CustomData,
            Self::Evse(_) => EntityKind::Evse,
            Self::Component(_) => EntityKind::Component,
            Self::ChargingSchedulePeriod(_) => EntityKind::ChargingSchedulePeriod,
            Self::ChargingSchedule(_) => EntityKind::ChargingSchedule,
        }
    }
}

impl Validatable for AnyEntity {
    fn validation(&self) -> Validation {
        match self {
            Self::CustomData(e) => e.validation(),
            Self::Evse(e) => e.validation(),
            Self::Component(e) => e.validation(),
            Self::ChargingSchedulePeriod(e) => e.validation(),
            Self::ChargingSchedule(e) => e.validation(),
        }
    }
}

impl fmt::Display for AnyEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CustomData(e) => fmt::Display::fmt(e, f),
            Self::Evse(e) => fmt::Display::fmt(e, f),
            Self::Component(e) => fmt::Display::fmt(e, f),
            Self::ChargingSchedulePeriod(e) => fmt::Display::fmt(e, f),
            Self::ChargingSchedule(e) => fmt::Display::fmt(e, f),
        }
    }
}

macro_rules! impl_from_entity {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyEntity {
                fn from(entity: $variant) -> Self {
                    Self::$variant(entity)
                }
            }
        )*
    };
}

impl_from_entity!(
    CustomData,
    Evse,
    Component,
    ChargingSchedulePeriod,
    ChargingSchedule,
);
