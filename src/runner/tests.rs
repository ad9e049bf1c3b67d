use super::*;
use tempfile::{TempDir, tempdir};

/// Creates `projects/<name>` (plus `tests/` when `with_tests`) inside a temp dir
fn make_project(base: &TempDir, name: &str, with_tests: bool) -> PathBuf {
    let path = base.path().join(name);
    fs::create_dir_all(&path).unwrap();
    if with_tests {
        fs::create_dir_all(path.join("tests")).unwrap();
    }
    path
}

#[test]
fn test_parse_command_splits_args() {
    let command = TestCommand::parse("cargo test --quiet").unwrap();
    assert_eq!(command.program(), "cargo");
    assert_eq!(command.args(), ["test".to_string(), "--quiet".to_string()]);
}

#[test]
fn test_parse_does_not_honour_quotes() {
    let command = TestCommand::parse(r#"cargo test -- --skip "slow one""#).unwrap();
    assert_eq!(
        command.args(),
        ["test", "--", "--skip", "\"slow", "one\""].map(String::from)
    );
}

#[test]
fn test_parse_empty_command_fails() {
    assert!(matches!(TestCommand::parse("   "), Err(RunnerError::EmptyCommand)));
}

#[test]
fn test_discover_projects_sorted_and_dirs_only() {
    let base = tempdir().unwrap();
    make_project(&base, "quiz", false);
    make_project(&base, "calculator", false);
    fs::write(base.path().join("notes.txt"), "not a project").unwrap();

    let projects = discover_projects(base.path()).unwrap();
    let names: Vec<String> = projects.iter().map(|p| project_name(p)).collect();
    assert_eq!(names, vec!["calculator", "quiz"]);
}

#[test]
fn test_discover_missing_dir() {
    let base = tempdir().unwrap();
    let missing = base.path().join("nope");
    assert!(matches!(
        discover_projects(&missing),
        Err(RunnerError::ProjectsDirMissing(_))
    ));
}

#[test]
fn test_select_rejects_path_separators() {
    let base = tempdir().unwrap();
    for name in ["a/b", "a\\b", "..", ""] {
        assert!(
            matches!(select_projects(base.path(), Some(name)), Err(RunnerError::InvalidName(_))),
            "expected {name:?} to be rejected"
        );
    }
}

#[test]
fn test_select_unknown_project() {
    let base = tempdir().unwrap();
    assert!(matches!(
        select_projects(base.path(), Some("ghost")),
        Err(RunnerError::ProjectNotFound(_))
    ));
}

#[test]
fn test_select_named_project() {
    let base = tempdir().unwrap();
    let quiz = make_project(&base, "quiz", true);
    make_project(&base, "other", true);
    assert_eq!(select_projects(base.path(), Some("quiz")).unwrap(), vec![quiz]);
}

#[test]
fn test_project_without_tests_dir() {
    let base = tempdir().unwrap();
    let project = make_project(&base, "empty", false);
    let command = TestCommand::parse("cargo test").unwrap();

    let outcome = run_project_tests(&project, &command);
    assert_eq!(outcome.project, "empty");
    assert_eq!(outcome.status, TestStatus::NoTests);
}

#[test]
fn test_unknown_program_is_error() {
    let base = tempdir().unwrap();
    let project = make_project(&base, "quiz", true);
    let command = TestCommand::parse("definitely-not-a-real-program-4821").unwrap();

    let outcome = run_project_tests(&project, &command);
    assert!(matches!(outcome.status, TestStatus::Error(_)));
}

#[cfg(unix)]
#[test]
fn test_passing_and_failing_commands() {
    let base = tempdir().unwrap();
    let project = make_project(&base, "quiz", true);

    let passed = run_project_tests(&project, &TestCommand::parse("true").unwrap());
    assert_eq!(passed.status, TestStatus::Passed);

    let failed = run_project_tests(&project, &TestCommand::parse("false").unwrap());
    assert_eq!(failed.status, TestStatus::Failed(Some(1)));
}

#[cfg(unix)]
#[test]
fn test_run_tests_reports_every_project() {
    let base = tempdir().unwrap();
    make_project(&base, "alpha", true);
    make_project(&base, "beta", false);

    let mut started = Vec::new();
    let report = run_tests(base.path(), None, "true", |name| started.push(name.to_string())).unwrap();

    assert_eq!(started, vec!["alpha", "beta"]);
    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.outcomes[0].status, TestStatus::Passed);
    assert_eq!(report.outcomes[1].status, TestStatus::NoTests);
    assert!(report.success());
    assert_eq!(report.failures(), 0);
}

#[cfg(unix)]
#[test]
fn test_run_tests_failure_marks_report() {
    let base = tempdir().unwrap();
    make_project(&base, "alpha", true);

    let report = run_tests(base.path(), Some("alpha"), "false", |_| {}).unwrap();
    assert!(!report.success());
    assert_eq!(report.failures(), 1);
}

#[test]
fn test_run_tests_empty_command() {
    let base = tempdir().unwrap();
    assert!(matches!(
        run_tests(base.path(), None, "", |_| {}),
        Err(RunnerError::EmptyCommand)
    ));
}

#[test]
fn test_status_display() {
    assert_eq!(TestStatus::Passed.to_string(), "passed");
    assert_eq!(TestStatus::Failed(Some(101)).to_string(), "failed with return code 101");
    assert_eq!(TestStatus::NoTests.to_string(), "no tests directory found");
}
