//! The `Component` entity: a physical or logical part of a charging station.
//!
//! `Component` is the reference composite in the catalog. It owns two
//! optional nested entities (`CustomData`, `Evse`), one required bounded text
//! field and one optional bounded text field. Every field has a single
//! `check_*` predicate used by its setter and by `validation()`.
//!
//! # Construction
//!
//! `Component::new` takes the required `name`; optional fields are chained
//! with `with_*` in any order:
//!
//! ```rust
//! use ocppkit_core::domain::{Component, CustomData, Evse, Validatable};
//!
//! let component = Component::new("Connector")?
//!     .with_instance("Left")?
//!     .with_evse(Evse::new(1).with_connector_id(1))?
//!     .with_custom_data(CustomData::new("com.example")?)?;
//! assert!(component.validate());
//! # Ok::<(), ocppkit_core::domain::ConstraintViolation>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    constraint::{self, ConstraintViolation},
    entities::{custom_data::CustomData, evse::Evse},
    validation::{Validatable, Validation},
};

/// A physical or logical component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    evse: Option<Evse>,
    /// Name of the component, preferably from the standardized list.
    /// Case-insensitive, Camel Case advised.
    name: String,
    /// Name of the instance when the component exists more than once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance: Option<String>,
}

impl Component {
    pub const NAME_MAX_LEN: usize = 50;
    pub const INSTANCE_MAX_LEN: usize = 50;

    /// Create a component from its required `name`.
    pub fn new(name: impl Into<String>) -> Result<Self, ConstraintViolation> {
        let name = name.into();
        Self::check_name(&name)?;
        Ok(Self {
            custom_data: None,
            evse: None,
            name,
            instance: None,
        })
    }

    // ── customData ────────────────────────────────────────────────────────

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }

    pub fn set_custom_data(
        &mut self,
        custom_data: Option<CustomData>,
    ) -> Result<(), ConstraintViolation> {
        Self::check_custom_data(custom_data.as_ref())?;
        self.custom_data = custom_data;
        Ok(())
    }

    pub fn with_custom_data(
        mut self,
        custom_data: CustomData,
    ) -> Result<Self, ConstraintViolation> {
        self.set_custom_data(Some(custom_data))?;
        Ok(self)
    }

    fn check_custom_data(custom_data: Option<&CustomData>) -> Result<(), ConstraintViolation> {
        constraint::nested("customData", custom_data)
    }

    // ── evse ──────────────────────────────────────────────────────────────

    pub fn evse(&self) -> Option<&Evse> {
        self.evse.as_ref()
    }

    /// Direct handle on the nested EVSE. Edits made through it skip the
    /// setter and are only caught by the next `validate()`.
    pub fn evse_mut(&mut self) -> Option<&mut Evse> {
        self.evse.as_mut()
    }

    pub fn set_evse(&mut self, evse: Option<Evse>) -> Result<(), ConstraintViolation> {
        Self::check_evse(evse.as_ref())?;
        self.evse = evse;
        Ok(())
    }

    pub fn with_evse(mut self, evse: Evse) -> Result<Self, ConstraintViolation> {
        self.set_evse(Some(evse))?;
        Ok(self)
    }

    fn check_evse(evse: Option<&Evse>) -> Result<(), ConstraintViolation> {
        constraint::nested("evse", evse)
    }

    // ── name ──────────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name. On rejection the current name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ConstraintViolation> {
        let name = name.into();
        Self::check_name(&name)?;
        self.name = name;
        Ok(())
    }

    fn check_name(name: &str) -> Result<(), ConstraintViolation> {
        constraint::max_length("name", name, Self::NAME_MAX_LEN)
    }

    // ── instance ──────────────────────────────────────────────────────────

    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    pub fn set_instance(&mut self, instance: Option<String>) -> Result<(), ConstraintViolation> {
        Self::check_instance(instance.as_deref())?;
        self.instance = instance;
        Ok(())
    }

    pub fn with_instance(
        mut self,
        instance: impl Into<String>,
    ) -> Result<Self, ConstraintViolation> {
        self.set_instance(Some(instance.into()))?;
        Ok(self)
    }

    fn check_instance(instance: Option<&str>) -> Result<(), ConstraintViolation> {
        constraint::optional_max_length("instance", instance, Self::INSTANCE_MAX_LEN)
    }
}

impl Validatable for Component {
    fn validation(&self) -> Validation {
        Validation::of("Component")
            .check_nested("customData", self.custom_data.as_ref())
            .check_nested("evse", self.evse.as_ref())
            .check(Self::check_name(&self.name))
            .check(Self::check_instance(self.instance.as_deref()))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("custom_data", &self.custom_data)
            .field("evse", &self.evse)
            .field("name", &self.name)
            .field("instance", &self.instance)
            .field("is_valid", &self.validate())
            .finish()
    }
}
