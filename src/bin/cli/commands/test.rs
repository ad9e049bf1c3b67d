use anyhow::bail;
use clap::Args;
use codeodyssey::config::Config;
use codeodyssey::output::{self, OutputConfig};
use codeodyssey::runner;

/// Arguments for `odyssey test`
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Only test this project
    project: Option<String>,
}

/// Executes a test command, failing when any project's tests fail
pub fn execute(args: TestArgs, app_config: &Config, config: &OutputConfig) -> anyhow::Result<()> {
    let report = runner::run_tests(
        &app_config.projects_dir,
        args.project.as_deref(),
        &app_config.test_command,
        |name| output::print_test_start(name, config),
    )?;
    output::print_report(&report, config)?;

    if !report.success() {
        bail!("tests failed for {} project(s)", report.failures());
    }
    Ok(())
}
