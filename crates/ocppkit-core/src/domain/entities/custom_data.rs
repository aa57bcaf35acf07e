use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    constraint::{self, ConstraintViolation},
    validation::{Validatable, Validation},
};

/// Vendor-specific extension point carried by most OCPP 2.0.1 types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomData {
    vendor_id: String,
}

impl CustomData {
    pub const VENDOR_ID_MAX_LEN: usize = 255;

    pub fn new(vendor_id: impl Into<String>) -> Result<Self, ConstraintViolation> {
        let vendor_id = vendor_id.into();
        Self::check_vendor_id(&vendor_id)?;
        Ok(Self { vendor_id })
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn set_vendor_id(
        &mut self,
        vendor_id: impl Into<String>,
    ) -> Result<(), ConstraintViolation> {
        let vendor_id = vendor_id.into();
        Self::check_vendor_id(&vendor_id)?;
        self.vendor_id = vendor_id;
        Ok(())
    }

    fn check_vendor_id(vendor_id: &str) -> Result<(), ConstraintViolation> {
        constraint::max_length("vendorId", vendor_id, Self::VENDOR_ID_MAX_LEN)
    }
}

impl Validatable for CustomData {
    fn validation(&self) -> Validation {
        Validation::of("CustomData").check(Self::check_vendor_id(&self.vendor_id))
    }
}

impl fmt::Display for CustomData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomData")
            .field("vendor_id", &self.vendor_id)
            .field("is_valid", &self.validate())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_id_bound_is_255() {
        assert!(CustomData::new("v".repeat(255)).is_ok());
        let err = CustomData::new("v".repeat(256)).unwrap_err();
        assert_eq!(err.field(), "vendorId");
        assert!(err.reason().contains("255"));
    }

    #[test]
    fn rejected_vendor_id_keeps_previous() {
        let mut data = CustomData::new("com.example").unwrap();
        assert!(data.set_vendor_id("v".repeat(300)).is_err());
        assert_eq!(data.vendor_id(), "com.example");
    }

    #[test]
    fn display_reports_validity() {
        let data = CustomData::new("com.example").unwrap();
        assert_eq!(
            data.to_string(),
            r#"CustomData { vendor_id: "com.example", is_valid: true }"#
        );
    }
}
