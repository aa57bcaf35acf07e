//! End-to-end checks of `ValidationService` wired to the real adapters.

use std::fs;

use ocppkit_adapters::{JsonCodec, LocalSource, MemorySource, samples};
use ocppkit_core::{
    domain::{DomainError, EntityKind},
    error::OcppkitError,
    prelude::*,
};
use tempfile::TempDir;

fn service(source: impl DocumentSource + 'static) -> ValidationService {
    ValidationService::new(Box::new(source), Box::new(JsonCodec::new()))
}

#[test]
fn samples_survive_encode_and_check() {
    let memory = MemorySource::new();
    let encoder = service(MemorySource::new());

    for entity in samples::all().unwrap() {
        let raw = encoder.encode_checked(&entity).unwrap();
        memory.insert(entity.kind().as_str(), raw).unwrap();
    }

    let checker = service(memory);
    for kind in EntityKind::ALL {
        let report = checker.check(kind, kind.as_str()).unwrap();
        assert!(report.is_valid(), "{kind}: {:?}", report.violations);
    }
}

#[test]
fn directory_of_mixed_documents() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("01-ok.json"),
        r#"{"name":"Inverter","evse":{"id":1}}"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("02-long.json"),
        format!(r#"{{"name":"{}","instance":"{}"}}"#, "n".repeat(51), "i".repeat(60)),
    )
    .unwrap();
    fs::write(temp.path().join("03-broken.json"), "{").unwrap();

    let reports = service(LocalSource::new([temp.path()]))
        .check_source(EntityKind::Component, false)
        .unwrap();

    let statuses: Vec<_> = reports.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        [
            ReportStatus::Valid,
            ReportStatus::Invalid,
            ReportStatus::Undecodable
        ]
    );

    let fields: Vec<_> = reports[1]
        .violations
        .iter()
        .map(|v| v.field.as_str())
        .collect();
    assert_eq!(fields, ["name", "instance"]);
}

#[test]
fn invalid_entity_is_not_encoded() {
    let entity: AnyEntity = serde_json::from_str::<ChargingSchedulePeriod>(r#"{"limit":1.0}"#)
        .unwrap()
        .into();

    let err = service(MemorySource::new())
        .encode_checked(&entity)
        .unwrap_err();
    assert!(matches!(
        err,
        OcppkitError::Domain(DomainError::InvalidEntity { .. })
    ));
}
