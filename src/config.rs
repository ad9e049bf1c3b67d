use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use clap::Args;
use std::fs;
use tracing::{info, warn};

use crate::errors::ConfigError;

mod store;

pub use store::ConfigStore;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration for the CodeOdyssey tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the monorepo's projects
    pub projects_dir: PathBuf,
    /// Side count used when a roll does not name one
    pub default_sides: i64,
    /// Command run inside each project to execute its tests
    pub test_command: String,
    /// Tracing filter directive, e.g. `info` or `codeodyssey=debug`
    pub log_level: String,
    /// Optional file that receives a copy of every log line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub projects_dir: Option<PathBuf>,
    #[serde(default)]
    pub default_sides: Option<i64>,
    #[serde(default)]
    pub test_command: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

/// Command line arguments shared by every CodeOdyssey binary
#[derive(Args, Debug, Clone, Default)]
pub struct CliArgs {
    /// Directory containing the projects
    #[clap(long, env = "ODYSSEY_PROJECTS_DIR", global = true)]
    pub projects_dir: Option<PathBuf>,

    /// Default number of sides for rolls
    #[clap(long, env = "ODYSSEY_DEFAULT_SIDES", global = true, allow_negative_numbers = true)]
    pub default_sides: Option<i64>,

    /// Command used to run a project's tests
    ///
    /// Split on whitespace; shell quoting is not supported.
    #[clap(long, env = "ODYSSEY_TEST_COMMAND", global = true)]
    pub test_command: Option<String>,

    /// Log filter (trace, debug, info, warn, error)
    #[clap(long, env = "ODYSSEY_LOG", global = true)]
    pub log_level: Option<String>,

    /// Also write logs to this file
    #[clap(long, env = "ODYSSEY_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            projects_dir: update.projects_dir.unwrap_or(self.projects_dir),
            default_sides: update.default_sides.unwrap_or(self.default_sides),
            test_command: update.test_command.unwrap_or(self.test_command),
            log_level: update.log_level.unwrap_or(self.log_level),
            log_file: update.log_file.or(self.log_file),
        }
    }
}

/// Returns the base (default) configuration
pub fn base_config() -> Config {
    Config {
        projects_dir: PathBuf::from("projects"),
        default_sides: i64::from(crate::dice::DEFAULT_SIDES),
        test_command: "cargo test".to_string(),
        log_level: "info".to_string(),
        log_file: None,
    }
}

/// Loads configuration from a TOML file
///
/// A missing path or a path that does not exist yields an empty update.
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate, ConfigError> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;
    let update = toml::from_str::<ConfigUpdate>(&content)?;
    info!("Loaded configuration from {:?}", config_path);
    Ok(update)
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        projects_dir: args.projects_dir,
        default_sides: args.default_sides,
        test_command: args.test_command,
        log_level: args.log_level,
        log_file: args.log_file,
    }
}

/// Returns the platform config directory, if one can be determined
pub fn get_config_dir_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "codeodyssey", "codeodyssey") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            warn!("Could not determine config directory, skipping config file");
            None
        }
    }
}

/// Loads a `.env` file from the working directory into the process environment
///
/// Must run before argument parsing so `env = ...` fallbacks can see it.
pub fn load_dotenv() {
    if let Ok(path) = dotenv::dotenv() {
        info!("Loaded environment from {:?}", path);
    }
}

/// A resolved configuration plus anything worth logging about how it was built
///
/// Configuration is resolved before the tracing subscriber exists, so the
/// file error is held here and reported once logging is up.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub config: Config,
    /// Why the config file was skipped, if it was
    pub file_error: Option<ConfigError>,
}

impl ResolvedConfig {
    /// Logs the deferred config-file error and the final configuration
    pub fn report(&self) {
        if let Some(e) = &self.file_error {
            warn!("{}, using defaults", e);
        }
        info!(
            "Final configuration: projects_dir={:?}, default_sides={}, test_command={:?}, log_level={}",
            self.config.projects_dir,
            self.config.default_sides,
            self.config.test_command,
            self.config.log_level
        );
    }
}

/// Gets the complete configuration by combining defaults with
/// values from config file, environment variables, and command line arguments
/// in order of increasing precedence
pub fn get_config(args: CliArgs) -> ResolvedConfig {
    let config_path = get_config_dir_path().map(|dir| dir.join(CONFIG_FILE_NAME));
    resolve_config(config_path, args)
}

/// Layers the config file at `config_path` and `args` over the defaults
///
/// An unreadable or invalid config file is skipped and kept in
/// `ResolvedConfig::file_error`.
pub fn resolve_config(config_path: Option<PathBuf>, args: CliArgs) -> ResolvedConfig {
    let (file_update, file_error) = match config_from_file(config_path) {
        Ok(update) => (update, None),
        Err(e) => (ConfigUpdate::default(), Some(e)),
    };

    let config = base_config()
        .apply_update(file_update)
        .apply_update(config_from_args(args));

    ResolvedConfig { config, file_error }
}
