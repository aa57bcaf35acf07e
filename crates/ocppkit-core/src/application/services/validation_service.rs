//! Validation Service - main application orchestrator.
//!
//! This service coordinates the checking workflow:
//! 1. Read the raw document from a source
//! 2. Decode it for the requested kind
//! 3. Validate the entity and collect every violation
//!
//! It also guards the way out: `encode_checked` refuses to serialize an
//! entity that does not validate.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{DocumentSource, EntityCodec},
    domain::{AnyEntity, ConstraintViolation, EntityKind, Validatable},
    error::{OcppkitError, OcppkitResult},
};

/// Outcome of checking one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Valid,
    Invalid,
    /// The text could not be decoded as the requested kind.
    Undecodable,
}

/// One violation, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationInfo {
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl From<&ConstraintViolation> for ViolationInfo {
    fn from(v: &ConstraintViolation) -> Self {
        Self {
            field: v.field().to_string(),
            value: v.value().to_string(),
            reason: v.reason().to_string(),
        }
    }
}

/// Result of checking one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub location: String,
    pub kind: EntityKind,
    pub status: ReportStatus,
    pub violations: Vec<ViolationInfo>,
    /// Diagnostic rendering of the decoded entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendering: Option<String>,
    /// Decode failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.status == ReportStatus::Valid
    }
}

/// Checks documents against the entity constraints.
pub struct ValidationService {
    source: Box<dyn DocumentSource>,
    codec: Box<dyn EntityCodec>,
}

impl ValidationService {
    /// Create a new validation service with the given adapters.
    pub fn new(source: Box<dyn DocumentSource>, codec: Box<dyn EntityCodec>) -> Self {
        Self { source, codec }
    }

    /// Read, decode and validate one document.
    ///
    /// A document that cannot be read is an error. A document that cannot be
    /// decoded is reported as [`ReportStatus::Undecodable`] so that a batch
    /// keeps going.
    #[instrument(skip(self, kind), fields(kind = %kind))]
    pub fn check(&self, kind: EntityKind, location: &str) -> OcppkitResult<ValidationReport> {
        let raw = self.source.read(location)?;
        debug!(bytes = raw.len(), "Document read");

        let entity = match self.codec.decode(kind, &raw) {
            Ok(entity) => entity,
            Err(e) => {
                info!(error = %e, "Document could not be decoded");
                return Ok(ValidationReport {
                    location: location.to_string(),
                    kind,
                    status: ReportStatus::Undecodable,
                    violations: Vec::new(),
                    rendering: None,
                    error: Some(e.to_string()),
                });
            }
        };

        Ok(Self::report(location, entity))
    }

    /// Check several documents in order.
    ///
    /// With `fail_fast` the batch stops after the first document that is not
    /// valid; that document's report is the last one returned.
    #[instrument(skip(self, kind, locations), fields(kind = %kind, count = locations.len()))]
    pub fn check_many(
        &self,
        kind: EntityKind,
        locations: &[String],
        fail_fast: bool,
    ) -> OcppkitResult<Vec<ValidationReport>> {
        let mut reports = Vec::with_capacity(locations.len());

        for location in locations {
            let report = self.check(kind, location)?;
            let stop = fail_fast && !report.is_valid();
            reports.push(report);
            if stop {
                info!(location = %location, "Stopping at first invalid document");
                break;
            }
        }

        let invalid = reports.iter().filter(|r| !r.is_valid()).count();
        info!(checked = reports.len(), invalid, "Check completed");
        Ok(reports)
    }

    /// Check every document the source lists.
    pub fn check_source(
        &self,
        kind: EntityKind,
        fail_fast: bool,
    ) -> OcppkitResult<Vec<ValidationReport>> {
        let locations = self.source.list()?;
        self.check_many(kind, &locations, fail_fast)
    }

    /// Encode an entity, refusing if it does not validate.
    #[instrument(skip_all, fields(kind = %entity.kind()))]
    pub fn encode_checked(&self, entity: &AnyEntity) -> OcppkitResult<String> {
        entity.ensure_valid().map_err(OcppkitError::Domain)?;
        self.codec.encode(entity)
    }

    fn report(location: &str, entity: AnyEntity) -> ValidationReport {
        let validation = entity.validation();
        let status = if validation.is_valid() {
            ReportStatus::Valid
        } else {
            ReportStatus::Invalid
        };
        if status == ReportStatus::Invalid {
            info!(
                violations = validation.violations().len(),
                "{} is invalid",
                validation.entity()
            );
        }

        ValidationReport {
            location: location.to_string(),
            kind: entity.kind(),
            status,
            violations: validation.violations().iter().map(Into::into).collect(),
            rendering: Some(entity.to_string()),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockDocumentSource, MockEntityCodec};
    use crate::domain::{Component, DomainError, Evse};
    use mockall::predicate::eq;

    fn valid_component() -> AnyEntity {
        Component::new("Inverter")
            .unwrap()
            .with_evse(Evse::new(1))
            .unwrap()
            .into()
    }

    /// Over-long vendorId and name, built past the setters as a decoder would.
    fn invalid_component() -> AnyEntity {
        let json = format!(
            r#"{{"evse":{{"id":1,"customData":{{"vendorId":"{}"}}}},"name":"{}"}}"#,
            "v".repeat(256),
            "n".repeat(51),
        );
        AnyEntity::Component(serde_json::from_str::<Component>(&json).unwrap())
    }

    fn source_with(docs: &'static [&'static str]) -> MockDocumentSource {
        let mut source = MockDocumentSource::new();
        source
            .expect_read()
            .returning(|location| Ok(format!("raw:{location}")));
        source
            .expect_list()
            .returning(move || Ok(docs.iter().map(|d| d.to_string()).collect()));
        source
    }

    fn codec_by_location() -> MockEntityCodec {
        let mut codec = MockEntityCodec::new();
        codec.expect_decode().returning(|_, raw| match raw {
            "raw:good.json" => Ok(valid_component()),
            "raw:bad.json" => Ok(invalid_component()),
            _ => Err(ApplicationError::DecodeFailed {
                kind: "component".into(),
                reason: "expected value at line 1 column 1".into(),
            }
            .into()),
        });
        codec
    }

    #[test]
    fn valid_document_reports_valid() {
        let service = ValidationService::new(
            Box::new(source_with(&[])),
            Box::new(codec_by_location()),
        );
        let report = service.check(EntityKind::Component, "good.json").unwrap();
        assert!(report.is_valid());
        assert!(report.violations.is_empty());
        assert!(report.rendering.unwrap().contains("is_valid: true"));
    }

    #[test]
    fn invalid_document_lists_every_violation() {
        let service = ValidationService::new(
            Box::new(source_with(&[])),
            Box::new(codec_by_location()),
        );
        let report = service.check(EntityKind::Component, "bad.json").unwrap();
        assert_eq!(report.status, ReportStatus::Invalid);
        let fields: Vec<_> = report.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, ["evse.customData.vendorId", "name"]);
    }

    #[test]
    fn undecodable_document_is_reported_not_raised() {
        let service = ValidationService::new(
            Box::new(source_with(&[])),
            Box::new(codec_by_location()),
        );
        let report = service.check(EntityKind::Component, "garbage.json").unwrap();
        assert_eq!(report.status, ReportStatus::Undecodable);
        assert!(report.error.unwrap().contains("line 1"));
    }

    #[test]
    fn unreadable_document_is_an_error() {
        let mut source = MockDocumentSource::new();
        source
            .expect_read()
            .with(eq("missing.json"))
            .returning(|location| {
                Err(ApplicationError::SourceUnavailable {
                    location: location.to_string(),
                    reason: "No such file or directory".into(),
                }
                .into())
            });
        let mut codec = MockEntityCodec::new();
        codec.expect_decode().never();

        let service = ValidationService::new(Box::new(source), Box::new(codec));
        let err = service
            .check(EntityKind::Component, "missing.json")
            .unwrap_err();
        assert!(matches!(
            err,
            OcppkitError::Application(ApplicationError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn check_many_runs_all_without_fail_fast() {
        let service = ValidationService::new(
            Box::new(source_with(&[])),
            Box::new(codec_by_location()),
        );
        let locations = ["bad.json", "good.json"].map(String::from);
        let reports = service
            .check_many(EntityKind::Component, &locations, false)
            .unwrap();
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn check_many_stops_at_first_invalid_with_fail_fast() {
        let service = ValidationService::new(
            Box::new(source_with(&[])),
            Box::new(codec_by_location()),
        );
        let locations = ["good.json", "bad.json", "good.json"].map(String::from);
        let reports = service
            .check_many(EntityKind::Component, &locations, true)
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].location, "bad.json");
    }

    #[test]
    fn check_source_uses_listed_locations() {
        let service = ValidationService::new(
            Box::new(source_with(&["good.json", "good.json"])),
            Box::new(codec_by_location()),
        );
        let reports = service.check_source(EntityKind::Component, false).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(ValidationReport::is_valid));
    }

    #[test]
    fn encode_checked_refuses_invalid_entity() {
        let mut codec = MockEntityCodec::new();
        codec.expect_encode().never();
        let service = ValidationService::new(Box::new(MockDocumentSource::new()), Box::new(codec));

        let err = service.encode_checked(&invalid_component()).unwrap_err();
        match err {
            OcppkitError::Domain(DomainError::InvalidEntity { entity, violations }) => {
                assert_eq!(entity, "Component");
                assert_eq!(violations.len(), 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn encode_checked_passes_valid_entity_to_codec() {
        let mut codec = MockEntityCodec::new();
        codec
            .expect_encode()
            .times(1)
            .returning(|_| Ok(r#"{"name":"Inverter"}"#.into()));
        let service = ValidationService::new(Box::new(MockDocumentSource::new()), Box::new(codec));

        let out = service.encode_checked(&valid_component()).unwrap();
        assert_eq!(out, r#"{"name":"Inverter"}"#);
    }

    #[test]
    fn report_serializes_status_lowercase() {
        let report = ValidationReport {
            location: "a.json".into(),
            kind: EntityKind::Evse,
            status: ReportStatus::Valid,
            violations: vec![],
            rendering: None,
            error: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "valid");
        assert_eq!(json["kind"], "evse");
        assert!(json.get("error").is_none());
    }
}
