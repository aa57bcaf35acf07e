//! `ocppkit sample`: print a valid document of a kind.

use ocppkit_adapters::{JsonCodec, MemorySource, samples};
use ocppkit_core::application::ValidationService;

use crate::{
    cli::SampleArgs,
    commands::parse_kind,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: SampleArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind = parse_kind(&args.kind)?;
    let entity = samples::sample(kind).with_cli_context(|| "building sample")?;

    let codec = if config.codec.pretty && !args.compact {
        JsonCodec::pretty()
    } else {
        JsonCodec::new()
    };
    let service = ValidationService::new(Box::new(MemorySource::new()), Box::new(codec));
    let json = service
        .encode_checked(&entity)
        .with_cli_context(|| "encoding sample")?;

    output.data(&json)?;
    Ok(())
}
