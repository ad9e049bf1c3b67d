use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or rolling a die
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("Number of sides must be at least 1.")]
    InvalidSides(i64),
    #[error("Number of sides must be at most {max}, got {sides}.")]
    TooManySides { sides: i64, max: u32 },
    #[error("Cannot roll more than {max} times at once, got {count}.")]
    TooManyRolls { count: u32, max: u32 },
}

/// Errors raised while scaffolding a new project
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Project name cannot be empty")]
    EmptyName,
    #[error("Invalid project name: '{0}'. Use letters, numbers, hyphens, or underscores, and ensure it doesn't start with a number.")]
    InvalidName(String),
    #[error("Invalid project name: '{0}' is a Rust keyword or reserved crate name.")]
    ReservedName(String),
    #[error("Project '{name}' already exists at {}. Delete the directory first to recreate it.", path.display())]
    AlreadyExists { name: String, path: PathBuf },
    #[error("Failed to create {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while selecting or running project tests
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Invalid project name: {0}")]
    InvalidName(String),
    #[error("Project {0} not found.")]
    ProjectNotFound(String),
    #[error("Projects directory {} does not exist", .0.display())]
    ProjectsDirMissing(PathBuf),
    #[error("Test command is empty")]
    EmptyCommand,
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required environment variable {0} not set")]
    MissingEnv(String),
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON config {} must contain an object at the top level", .0.display())]
    NotAnObject(PathBuf),
}

/// Errors raised while installing the tracing subscriber
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging has already been initialised")]
    AlreadyInitialised,
    #[error("Failed to prepare log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while rendering command output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to render TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests;
