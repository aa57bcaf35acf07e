//! Implementation of the `ocppkit kinds` command.

use serde_json::json;

use ocppkit_core::domain::ENTITY_REGISTRY;

use crate::{
    cli::{KindsArgs, KindsFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: KindsArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        KindsFormat::Table => {
            output.header("Entity kinds:")?;
            for def in ENTITY_REGISTRY {
                output.print(&format!(
                    "  {:<26} {:<24} {:<12} {}",
                    def.kind.as_str(),
                    def.kind.type_name(),
                    def.protocol,
                    def.description
                ))?;
            }
        }

        KindsFormat::List => {
            for def in ENTITY_REGISTRY {
                output.data(def.kind.as_str())?;
            }
        }

        KindsFormat::Json => {
            let kinds: Vec<_> = ENTITY_REGISTRY
                .iter()
                .map(|def| {
                    json!({
                        "kind": def.kind,
                        "typeName": def.kind.type_name(),
                        "protocol": def.protocol,
                        "description": def.description,
                    })
                })
                .collect();
            output.data(&serde_json::Value::Array(kinds).to_string())?;
        }
    }

    Ok(())
}
