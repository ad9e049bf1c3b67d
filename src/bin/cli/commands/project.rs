use anyhow::Context;
use clap::Args;
use codeodyssey::config::Config;
use codeodyssey::output::{self, OutputConfig};
use codeodyssey::scaffold;

/// Arguments for `odyssey new`
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of the project to create
    name: String,
}

/// Executes a new-project command
pub fn execute(args: NewArgs, app_config: &Config, config: &OutputConfig) -> anyhow::Result<()> {
    let layout = scaffold::create_project(&args.name, &app_config.projects_dir)
        .with_context(|| format!("could not create project '{}'", args.name))?;
    let steps = scaffold::next_steps(&layout);
    output::print_project(&layout, &steps, config)?;
    Ok(())
}
