//! `recado tools` command.

use clap::Args;

use crate::shared;

/// List the registered tools.
#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Print the full descriptors as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the tools command.
pub fn execute(args: &ToolsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = shared::load_config(config_path)?;
    let registry = shared::build_registry(&config);
    let descriptors = registry.list();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
    } else {
        for d in &descriptors {
            println!("{} - {}", d.name, d.description);
        }
    }
    Ok(())
}
