//! Implementation of the `ocppkit check` command.
//!
//! Responsibility: turn paths into a document source, run the core
//! validation service, and display the reports. No constraint logic lives
//! here.

use tracing::{debug, instrument};

use ocppkit_adapters::{JsonCodec, LocalSource};
use ocppkit_core::application::{ReportStatus, ValidationReport, ValidationService};

use crate::{
    cli::{CheckArgs, CheckFormat},
    commands::parse_kind,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `ocppkit check` command.
///
/// Exits with an error (code 2) when any document is invalid or cannot be
/// decoded, after every report has been printed.
#[instrument(skip_all, fields(paths = args.paths.len()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind_name = args.kind.as_deref().unwrap_or(&config.check.default_kind);
    let kind = parse_kind(kind_name)?;
    let format = resolve_format(args.format, &config)?;
    let fail_fast = args.fail_fast || config.check.fail_fast;
    debug!(%kind, ?format, fail_fast, "Checking documents");

    let service = ValidationService::new(
        Box::new(LocalSource::new(args.paths)),
        Box::new(JsonCodec::new()),
    );
    let reports = service
        .check_source(kind, fail_fast)
        .with_cli_context(|| "checking documents")?;

    match format {
        CheckFormat::Human => print_human(&reports, args.render, &output)?,
        CheckFormat::Json => {
            let json =
                serde_json::to_string_pretty(&reports).map_err(|e| CliError::IoError {
                    message: "Failed to serialise reports".into(),
                    source: e.into(),
                })?;
            output.data(&json)?;
        }
    }

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        return Err(CliError::InvalidDocuments {
            kind: kind.to_string(),
            invalid,
            total: reports.len(),
        });
    }
    Ok(())
}

fn resolve_format(flag: Option<CheckFormat>, config: &AppConfig) -> CliResult<CheckFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match config.check.format.as_str() {
        "human" => Ok(CheckFormat::Human),
        "json" => Ok(CheckFormat::Json),
        other => Err(CliError::ConfigError {
            message: format!("check.format must be 'human' or 'json', got '{other}'"),
            source: None,
        }),
    }
}

fn print_human(
    reports: &[ValidationReport],
    render: bool,
    output: &OutputManager,
) -> CliResult<()> {
    for report in reports {
        match report.status {
            ReportStatus::Valid => output.success(&format!("{} is valid", report.location))?,
            ReportStatus::Invalid => {
                output.error(&format!(
                    "{} has {} violation(s)",
                    report.location,
                    report.violations.len()
                ))?;
                for v in &report.violations {
                    output.detail(&format!("{}: {} (got {})", v.field, v.reason, v.value))?;
                }
            }
            ReportStatus::Undecodable => {
                output.error(&format!("{} could not be decoded", report.location))?;
                if let Some(error) = &report.error {
                    output.detail(error)?;
                }
            }
        }

        if let Some(rendering) = report.rendering.as_ref().filter(|_| render) {
            output.detail(rendering)?;
        }
    }

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    output.print("")?;
    output.info(&format!(
        "{} document(s) checked, {} invalid",
        reports.len(),
        invalid
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.check.format = "json".into();
        assert_eq!(
            resolve_format(Some(CheckFormat::Human), &config).unwrap(),
            CheckFormat::Human
        );
        assert_eq!(resolve_format(None, &config).unwrap(), CheckFormat::Json);
    }

    #[test]
    fn unknown_configured_format_is_config_error() {
        let mut config = AppConfig::default();
        config.check.format = "xml".into();
        assert_eq!(resolve_format(None, &config).unwrap_err().exit_code(), 4);
    }
}
