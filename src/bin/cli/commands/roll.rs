use clap::Args;
use codeodyssey::config::Config;
use codeodyssey::dice::{Die, MAX_ROLLS};
use codeodyssey::output::{self, OutputConfig};

/// Arguments for `odyssey roll`
#[derive(Args, Debug)]
pub struct RollArgs {
    /// Number of sides on the die
    #[clap(short, long, allow_negative_numbers = true)]
    sides: Option<i64>,

    /// How many times to roll (at most 10000)
    #[clap(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ROLLS)))]
    count: u32,
}

/// Executes a roll command
pub fn execute(args: RollArgs, app_config: &Config, config: &OutputConfig) -> anyhow::Result<()> {
    let die = Die::new(args.sides.unwrap_or(app_config.default_sides))?;
    let rolls = die.throw_many(args.count)?;
    output::print_rolls(&rolls, config)?;
    Ok(())
}
