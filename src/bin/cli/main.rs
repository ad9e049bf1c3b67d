mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use codeodyssey::config::{self, CliArgs};
use codeodyssey::logging;
use codeodyssey::output::{OutputConfig, OutputFormat};
use std::process;

/// CLI for managing the CodeOdyssey monorepo
#[derive(Parser, Debug)]
#[clap(name = "odyssey", about = "Manage the CodeOdyssey project monorepo")]
struct Cli {
    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Quiet mode: minimal output (just values, paths or failures)
    #[clap(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    config: CliArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Roll a die
    Roll(commands::roll::RollArgs),
    /// Create a new project skeleton
    New(commands::project::NewArgs),
    /// Run tests for all projects or a single one
    Test(commands::test::TestArgs),
    /// Show the resolved configuration
    Config,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let resolved = config::get_config(cli.config);
    let app_config = &resolved.config;
    let _log_guard = logging::init_logging(&app_config.log_level, app_config.log_file.as_deref())
        .context("failed to initialise logging")?;
    resolved.report();

    let output_config = OutputConfig {
        format: cli.format,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Roll(args) => commands::roll::execute(args, app_config, &output_config),
        Commands::New(args) => commands::project::execute(args, app_config, &output_config),
        Commands::Test(args) => commands::test::execute(args, app_config, &output_config),
        Commands::Config => commands::config::execute(app_config, &output_config),
    }
}

fn main() {
    config::load_dotenv();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
