//! CodeOdyssey: shared tooling for a monorepo of small exercise projects
//!
//! ### Modules
//!
//! - `dice`: the dice simulator core (secure rolls of an N-sided die)
//! - `scaffold`: generates the skeleton of a new project
//! - `runner`: discovers projects and runs their test suites
//! - `config`: layered application config and a generic key/value store
//! - `logging`: tracing subscriber setup with an optional log file
//! - `output`: human and JSON rendering used by the binaries
//! - `errors`: error types for each of the above
//!
//! ### Binaries
//!
//! - `dice-simulator`: rolls a die and prints the result
//! - `odyssey`: manages the monorepo (`roll`, `new`, `test`, `config`)

/// Dice simulator module
pub mod dice;

/// Error types module
pub mod errors;

/// Configuration module
pub mod config;

pub mod logging;

pub mod output;

/// Project scaffolding module
pub mod scaffold;

/// Test runner module
pub mod runner;

#[cfg(test)]
pub mod test_utils;
