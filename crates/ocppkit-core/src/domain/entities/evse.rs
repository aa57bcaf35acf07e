use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    constraint::{self, ConstraintViolation},
    entities::custom_data::CustomData,
    validation::{Validatable, Validation},
};

/// Electric Vehicle Supply Equipment: one charging point of a station,
/// optionally narrowed to a single connector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,
    id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    connector_id: Option<i32>,
}

impl Evse {
    /// `id` is the only required field and any integer is acceptable.
    pub fn new(id: i32) -> Self {
        Self {
            custom_data: None,
            id,
            connector_id: None,
        }
    }

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

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn connector_id(&self) -> Option<i32> {
        self.connector_id
    }

    pub fn set_connector_id(&mut self, connector_id: Option<i32>) {
        self.connector_id = connector_id;
    }

    pub fn with_connector_id(mut self, connector_id: i32) -> Self {
        self.set_connector_id(Some(connector_id));
        self
    }

    /// Mutable access to the nested custom data, bypassing the setter.
    ///
    /// Changes made through this handle are only caught by a later
    /// `validate()`.
    pub fn custom_data_mut(&mut self) -> Option<&mut CustomData> {
        self.custom_data.as_mut()
    }
}

impl Validatable for Evse {
    fn validation(&self) -> Validation {
        Validation::of("EVSE").check_nested("customData", self.custom_data.as_ref())
    }
}

impl fmt::Display for Evse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EVSE")
            .field("custom_data", &self.custom_data)
            .field("id", &self.id)
            .field("connector_id", &self.connector_id)
            .field("is_valid", &self.validate())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_evse_is_valid() {
        let evse = Evse::new(1);
        assert!(evse.validate());
        assert_eq!(evse.connector_id(), None);
    }

    #[test]
    fn connector_id_is_optional() {
        let evse = Evse::new(1).with_connector_id(2);
        assert_eq!(evse.connector_id(), Some(2));
        assert!(evse.validate());
    }

    #[test]
    fn nested_custom_data_mutated_in_place_is_caught() {
        let mut evse = Evse::new(1)
            .with_custom_data(CustomData::new("com.example").unwrap())
            .unwrap();

        // Deserialize a too-long vendor id to get past the setter.
        let long: CustomData =
            serde_json::from_str(&format!(r#"{{"vendorId":"{}"}}"#, "v".repeat(256))).unwrap();
        *evse.custom_data_mut().unwrap() = long;

        let validation = evse.validation();
        assert!(!validation.is_valid());
        assert_eq!(validation.violations()[0].field(), "customData.vendorId");
    }

    #[test]
    fn invalid_custom_data_is_rejected_by_setter() {
        let long: CustomData =
            serde_json::from_str(&format!(r#"{{"vendorId":"{}"}}"#, "v".repeat(256))).unwrap();
        let mut evse = Evse::new(1);
        let err = evse.set_custom_data(Some(long)).unwrap_err();
        assert_eq!(err.field(), "customData");
        assert!(evse.custom_data().is_none());
    }
}
