//! `ocppkit describe`: fields and constraints of one entity kind.

use ocppkit_core::domain::{DomainError, find_entity};

use crate::{
    cli::DescribeArgs,
    commands::parse_kind,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: DescribeArgs, output: OutputManager) -> CliResult<()> {
    let kind = parse_kind(&args.kind)?;
    let def = find_entity(kind)
        .ok_or_else(|| CliError::Core(DomainError::UnknownKind(args.kind.clone()).into()))?;

    output.header(&format!(
        "{} ({}), {}",
        kind.type_name(),
        kind,
        def.protocol
    ))?;
    output.print(&format!("  {}", def.description))?;
    output.print("")?;

    let width = def.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    for field in def.fields {
        let presence = if field.required { "required" } else { "optional" };
        output.print(&format!(
            "  {:<width$}  {:<8}  {}",
            field.name, presence, field.constraint
        ))?;
    }

    Ok(())
}
