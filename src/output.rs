use clap::ValueEnum;
use serde_json::json;

use crate::config::Config;
use crate::dice::Roll;
use crate::errors::OutputError;
use crate::runner::{TestOutcome, TestReport, TestStatus};
use crate::scaffold::ProjectLayout;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}

/// Bundled output configuration passed to all print functions
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// The output format
    pub format: OutputFormat,
    /// When true, print minimal output (just values or paths)
    pub quiet: bool,
}

/// Prints rendered text if there is any
fn emit(text: String) {
    if !text.is_empty() {
        println!("{}", text);
    }
}

/// Renders one or more rolls
///
/// Human output mirrors the dice simulator's console banner; JSON output is a
/// single object for one roll and an array otherwise.
pub fn render_rolls(rolls: &[Roll], config: &OutputConfig) -> Result<String, OutputError> {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                let values: Vec<String> = rolls.iter().map(|r| r.value.to_string()).collect();
                return Ok(values.join("\n"));
            }
            let mut lines = Vec::with_capacity(rolls.len() + 2);
            if rolls.len() == 1 {
                lines.push("Rolling the die...".to_string());
            } else {
                lines.push(format!("Rolling the die {} times...", rolls.len()));
            }
            for roll in rolls {
                lines.push(format!("🎲 You rolled a: {}", roll.value));
            }
            if rolls.len() > 1 {
                let total: u64 = rolls.iter().map(|r| u64::from(r.value)).sum();
                lines.push(format!("Total: {}", total));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => match rolls {
            [single] => Ok(serde_json::to_string(single)?),
            _ => Ok(serde_json::to_string(rolls)?),
        },
    }
}

pub fn print_rolls(rolls: &[Roll], config: &OutputConfig) -> Result<(), OutputError> {
    emit(render_rolls(rolls, config)?);
    Ok(())
}

/// Renders a freshly created project and its next steps
pub fn render_project(
    layout: &ProjectLayout,
    next_steps: &[String],
    config: &OutputConfig,
) -> Result<String, OutputError> {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                return Ok(layout.root.display().to_string());
            }
            let mut lines = vec![
                format!(
                    "Project '{}' created at {}",
                    layout.name,
                    layout.root.display()
                ),
                String::new(),
                "--- Next Steps ---".to_string(),
            ];
            lines.extend(next_steps.iter().cloned());
            lines.push("------------------".to_string());
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let value = json!({
                "name": layout.name,
                "root": layout.root,
                "directories": layout.directories,
                "files": layout.files,
                "next_steps": next_steps,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

pub fn print_project(
    layout: &ProjectLayout,
    next_steps: &[String],
    config: &OutputConfig,
) -> Result<(), OutputError> {
    emit(render_project(layout, next_steps, config)?);
    Ok(())
}

/// Announces that a project's tests are about to run (human, non-quiet only)
pub fn print_test_start(project: &str, config: &OutputConfig) {
    if config.format == OutputFormat::Human && !config.quiet {
        println!("\nRunning tests for {}...", project);
    }
}

fn status_json(outcome: &TestOutcome) -> serde_json::Value {
    let (status, code, error) = match &outcome.status {
        TestStatus::Passed => ("passed", Some(0), None),
        TestStatus::Failed(code) => ("failed", *code, None),
        TestStatus::NoTests => ("no_tests", None, None),
        TestStatus::Error(msg) => ("error", None, Some(msg.clone())),
    };
    json!({
        "project": outcome.project,
        "status": status,
        "code": code,
        "error": error,
    })
}

/// Renders the result of a whole test run
pub fn render_report(report: &TestReport, config: &OutputConfig) -> Result<String, OutputError> {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                let failed: Vec<&str> = report
                    .outcomes
                    .iter()
                    .filter(|o| matches!(o.status, TestStatus::Failed(_) | TestStatus::Error(_)))
                    .map(|o| o.project.as_str())
                    .collect();
                return Ok(failed.join("\n"));
            }
            if report.outcomes.is_empty() {
                return Ok("No projects found.".to_string());
            }
            let max_name = report
                .outcomes
                .iter()
                .map(|o| o.project.len())
                .max()
                .unwrap_or(7)
                .max("PROJECT".len());
            let mut lines = vec![String::new(), format!("{:<width$}  RESULT", "PROJECT", width = max_name)];
            for outcome in &report.outcomes {
                lines.push(format!(
                    "{:<width$}  {}",
                    outcome.project,
                    outcome.status,
                    width = max_name
                ));
            }
            lines.push(format!(
                "{} project(s) tested, {} failed",
                report.outcomes.len(),
                report.failures()
            ));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let outcomes: Vec<serde_json::Value> = report.outcomes.iter().map(status_json).collect();
            let value = json!({
                "success": report.success(),
                "outcomes": outcomes,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

pub fn print_report(report: &TestReport, config: &OutputConfig) -> Result<(), OutputError> {
    emit(render_report(report, config)?);
    Ok(())
}

/// Renders the resolved configuration as TOML or JSON
pub fn render_config(app_config: &Config, config: &OutputConfig) -> Result<String, OutputError> {
    match config.format {
        OutputFormat::Human => Ok(toml::to_string_pretty(app_config)?.trim_end().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(app_config)?),
    }
}

pub fn print_config(app_config: &Config, config: &OutputConfig) -> Result<(), OutputError> {
    emit(render_config(app_config, config)?);
    Ok(())
}
