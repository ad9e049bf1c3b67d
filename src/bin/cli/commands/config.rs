use codeodyssey::config::Config;
use codeodyssey::output::{self, OutputConfig};

/// Prints the resolved configuration
pub fn execute(app_config: &Config, config: &OutputConfig) -> anyhow::Result<()> {
    output::print_config(app_config, config)?;
    Ok(())
}
