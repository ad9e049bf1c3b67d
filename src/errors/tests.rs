use super::*;
use std::error::Error as _;
use std::io;

#[test]
fn test_invalid_sides_message() {
    let error = DiceError::InvalidSides(0);
    assert_eq!(error.to_string(), "Number of sides must be at least 1.");
}

#[test]
fn test_too_many_sides_message() {
    let error = DiceError::TooManySides {
        sides: 5_000_000_000,
        max: u32::MAX,
    };
    assert_eq!(
        error.to_string(),
        "Number of sides must be at most 4294967295, got 5000000000."
    );
}

#[test]
fn test_invalid_project_name_message() {
    let error = ScaffoldError::InvalidName("9lives".to_string());
    assert!(error.to_string().starts_with("Invalid project name: '9lives'."));
}

#[test]
fn test_already_exists_mentions_path() {
    let error = ScaffoldError::AlreadyExists {
        name: "quiz".to_string(),
        path: PathBuf::from("projects/quiz"),
    };
    let message = error.to_string();
    assert!(message.contains("'quiz'"));
    assert!(message.contains("projects/quiz"));
}

#[test]
fn test_scaffold_io_keeps_source() {
    let error = ScaffoldError::Io {
        path: PathBuf::from("projects/quiz/src"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(error.source().is_some());
    assert!(error.to_string().contains("denied"));
}

#[test]
fn test_project_not_found_message() {
    let error = RunnerError::ProjectNotFound("ghost".to_string());
    assert_eq!(error.to_string(), "Project ghost not found.");
}

#[test]
fn test_missing_env_message() {
    let error = ConfigError::MissingEnv("DB_HOST".to_string());
    assert_eq!(
        error.to_string(),
        "Required environment variable DB_HOST not set"
    );
}

#[test]
fn test_json_error_converts() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: ConfigError = parse_error.into();
    assert!(matches!(error, ConfigError::Json(_)));
}
