use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::ScaffoldError;

/// The directories and files written for a freshly scaffolded project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Name of the project as given by the user
    pub name: String,
    /// Root directory of the project (`<base_dir>/<name>`)
    pub root: PathBuf,
    /// Directories created, in creation order
    pub directories: Vec<PathBuf>,
    /// Files written, in creation order
    pub files: Vec<PathBuf>,
}

/// Rust keywords, which Cargo refuses as library target names
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen",
    "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override",
    "priv", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where",
    "while", "yield",
];

/// Names that collide with the built-in sysroot crates
const SYSROOT_CRATES: &[&str] = &["alloc", "core", "proc_macro", "std", "test"];

/// True when the crate name of `name` is a keyword, a sysroot crate or `_`
pub fn is_reserved_name(name: &str) -> bool {
    let module = module_name(name);
    module == "_" || KEYWORDS.contains(&module.as_str()) || SYSROOT_CRATES.contains(&module.as_str())
}

/// Checks that `name` can be used as a project and crate name
///
/// Names may contain ASCII letters, digits, hyphens and underscores, and must
/// not start with a digit or a hyphen. The name doubles as the Cargo package
/// name of the generated project, so Rust keywords, sysroot crate names
/// (`std`, `test`, ...) and a lone `_` are refused as well.
pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::EmptyName);
    }

    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if !(valid_start && valid_rest) {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }
    if is_reserved_name(name) {
        return Err(ScaffoldError::ReservedName(name.to_string()));
    }
    Ok(())
}

/// Returns the snake_case module name for a project
pub fn module_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Builds the initial files of a project as `(relative path, contents)` pairs
fn initial_files(name: &str) -> Vec<(PathBuf, String)> {
    let module = module_name(name);
    vec![
        (
            PathBuf::from("README.md"),
            format!("# {name}\n\nProject description goes here.\n"),
        ),
        (
            PathBuf::from("Cargo.toml"),
            format!(
                "[package]\nname = \"{name}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[dependencies]\n"
            ),
        ),
        (
            PathBuf::from("src").join("lib.rs"),
            format!("//! {name} library.\n"),
        ),
        (
            PathBuf::from("tests").join(format!("{module}_tests.rs")),
            format!(
                "//! Test suite for {name}.\n\n#[test]\nfn test_{module}_builds() {{}}\n"
            ),
        ),
    ]
}

/// Creates a new project skeleton under `base_dir`
///
/// The project root is `<base_dir>/<name>`. An existing root is never
/// touched; the call fails with `ScaffoldError::AlreadyExists` instead.
///
/// ### Layout
///
/// - `src/lib.rs`
/// - `tests/<name>_tests.rs`
/// - `docs/`
/// - `README.md` and `Cargo.toml`
pub fn create_project(name: &str, base_dir: &Path) -> Result<ProjectLayout, ScaffoldError> {
    validate_project_name(name)?;

    let root = base_dir.join(name);
    if root.exists() {
        warn!(
            "Project '{}' already exists at {:?}, skipping creation",
            name, root
        );
        return Err(ScaffoldError::AlreadyExists {
            name: name.to_string(),
            path: root,
        });
    }

    let directories = vec![root.join("src"), root.join("tests"), root.join("docs")];
    for dir in &directories {
        fs::create_dir_all(dir).map_err(|source| ScaffoldError::Io {
            path: dir.clone(),
            source,
        })?;
        debug!("Created directory: {:?}", dir);
    }

    let mut files = Vec::new();
    for (relative, contents) in initial_files(name) {
        let path = root.join(relative);
        fs::write(&path, contents).map_err(|source| ScaffoldError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Created file: {:?}", path);
        files.push(path);
    }

    info!("Project '{}' created successfully at {:?}", name, root);

    Ok(ProjectLayout {
        name: name.to_string(),
        root,
        directories,
        files,
    })
}

/// Returns the follow-up instructions shown after a project is created
pub fn next_steps(layout: &ProjectLayout) -> Vec<String> {
    vec![
        format!(
            "1. Navigate to your project directory: cd {}",
            layout.root.display()
        ),
        "2. Add project-specific dependencies to Cargo.toml".to_string(),
        "3. Build and test it: cargo test".to_string(),
        format!(
            "4. Start developing in: {}",
            layout.root.join("src").display()
        ),
    ]
}
