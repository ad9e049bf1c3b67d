use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

use crate::errors::RunnerError;

/// Result of running one project's tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStatus {
    /// The test command exited successfully
    Passed,
    /// The test command exited with a failure status (`None` if killed by a signal)
    Failed(Option<i32>),
    /// The project has no `tests/` directory
    NoTests,
    /// The test command could not be started
    Error(String),
}

/// The outcome of testing a single project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    /// Directory name of the project
    pub project: String,
    pub status: TestStatus,
}

/// Outcomes for every project that was tested, in run order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestReport {
    pub outcomes: Vec<TestOutcome>,
}

impl TestReport {
    /// True when no project failed or errored
    pub fn success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.status, TestStatus::Passed | TestStatus::NoTests))
    }

    /// Number of projects that failed or could not be run
    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, TestStatus::Failed(_) | TestStatus::Error(_)))
            .count()
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "passed"),
            TestStatus::Failed(Some(code)) => write!(f, "failed with return code {}", code),
            TestStatus::Failed(None) => write!(f, "failed (terminated by signal)"),
            TestStatus::NoTests => write!(f, "no tests directory found"),
            TestStatus::Error(msg) => write!(f, "error: {}", msg),
        }
    }
}

/// A test command split into program and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCommand {
    program: String,
    args: Vec<String>,
}

impl TestCommand {
    /// Parses a whitespace-separated command line such as `cargo test --quiet`
    ///
    /// There is no shell quoting: `"slow one"` becomes the two arguments
    /// `"slow` and `one"`. Wrap commands that need quoted arguments in a
    /// script and pass the script instead.
    pub fn parse(command: &str) -> Result<Self, RunnerError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(RunnerError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Lists every project directory under `projects_dir`, sorted by name
pub fn discover_projects(projects_dir: &Path) -> Result<Vec<PathBuf>, RunnerError> {
    if !projects_dir.is_dir() {
        return Err(RunnerError::ProjectsDirMissing(projects_dir.to_path_buf()));
    }

    let entries = fs::read_dir(projects_dir).map_err(|source| RunnerError::Io {
        path: projects_dir.to_path_buf(),
        source,
    })?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RunnerError::Io {
            path: projects_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            projects.push(path);
        }
    }
    projects.sort();
    debug!("Discovered {} projects in {:?}", projects.len(), projects_dir);
    Ok(projects)
}

/// Selects one named project, or every project when `name` is `None`
pub fn select_projects(
    projects_dir: &Path,
    name: Option<&str>,
) -> Result<Vec<PathBuf>, RunnerError> {
    let Some(name) = name else {
        return discover_projects(projects_dir);
    };

    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(RunnerError::InvalidName(name.to_string()));
    }

    let path = projects_dir.join(name);
    if path.is_dir() {
        Ok(vec![path])
    } else {
        Err(RunnerError::ProjectNotFound(name.to_string()))
    }
}

fn project_name(project: &Path) -> String {
    project
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| project.display().to_string())
}

/// Runs `command` inside `project` if the project has a `tests/` directory
pub fn run_project_tests(project: &Path, command: &TestCommand) -> TestOutcome {
    let name = project_name(project);

    if !project.join("tests").is_dir() {
        info!("No tests directory found in {}", name);
        return TestOutcome {
            project: name,
            status: TestStatus::NoTests,
        };
    }

    info!("Running tests for {}...", name);
    // Child stdout goes to our stderr so the report on stdout stays parseable
    let status = match Command::new(command.program())
        .args(command.args())
        .current_dir(project)
        .stdout(io::stderr())
        .status()
    {
        Ok(exit) if exit.success() => TestStatus::Passed,
        Ok(exit) => TestStatus::Failed(exit.code()),
        Err(e) => {
            warn!("Error running tests for {}: {}", name, e);
            TestStatus::Error(e.to_string())
        }
    };
    info!("Tests completed for {}: {}", name, status);

    TestOutcome {
        project: name,
        status,
    }
}

/// Runs tests for one project or for all of them
///
/// `on_start` is called with each project's name before its tests run.
pub fn run_tests<F>(
    projects_dir: &Path,
    name: Option<&str>,
    command: &str,
    mut on_start: F,
) -> Result<TestReport, RunnerError>
where
    F: FnMut(&str),
{
    let command = TestCommand::parse(command)?;
    let projects = select_projects(projects_dir, name)?;

    let mut report = TestReport::default();
    for project in projects {
        on_start(&project_name(&project));
        report.outcomes.push(run_project_tests(&project, &command));
    }
    Ok(report)
}

#[cfg(test)]
mod tests;
