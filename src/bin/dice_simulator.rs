use anyhow::Context;
use clap::Parser;
use codeodyssey::config::{self, CliArgs};
use codeodyssey::dice::{Die, MAX_ROLLS};
use codeodyssey::logging;
use codeodyssey::output::{self, OutputConfig, OutputFormat};
use std::process;
use tracing::debug;

/// A simple command-line dice rolling simulator
#[derive(Parser, Debug)]
#[clap(name = "dice-simulator", about = "Roll a die using a secure random source")]
struct Args {
    /// Number of sides on the die (defaults to the configured default, 6)
    #[clap(short, long, allow_negative_numbers = true)]
    sides: Option<i64>,

    /// How many times to roll (at most 10000)
    #[clap(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ROLLS)))]
    count: u32,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Quiet mode: print only the rolled values
    #[clap(short, long)]
    quiet: bool,

    #[command(flatten)]
    config: CliArgs,
}

fn run(args: Args) -> anyhow::Result<()> {
    let resolved = config::get_config(args.config);
    let app_config = &resolved.config;
    let _log_guard = logging::init_logging(&app_config.log_level, app_config.log_file.as_deref())
        .context("failed to initialise logging")?;
    resolved.report();

    let die = Die::new(args.sides.unwrap_or(app_config.default_sides))?;
    debug!(sides = die.sides(), count = args.count, "rolling");

    let rolls = die.throw_many(args.count)?;

    let output_config = OutputConfig {
        format: args.format,
        quiet: args.quiet,
    };
    output::print_rolls(&rolls, &output_config)?;
    Ok(())
}

fn main() {
    config::load_dotenv();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
