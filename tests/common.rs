use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds a command for `bin` isolated from the caller's environment
///
/// Runs inside `workdir` with logging limited to errors so stderr only
/// carries failures. `HOME` and `XDG_CONFIG_HOME` point into `workdir` so a
/// developer's own config file is never read.
#[allow(dead_code)]
pub fn isolated_cmd(bin: &str, workdir: &Path) -> Command {
    let mut cmd = match bin {
        "odyssey" => cargo_bin_cmd!("odyssey"),
        "dice-simulator" => cargo_bin_cmd!("dice-simulator"),
        other => panic!("unknown binary {other}"),
    };
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", config_home(workdir))
        .env("ODYSSEY_LOG", "error")
        .env_remove("ODYSSEY_PROJECTS_DIR")
        .env_remove("ODYSSEY_DEFAULT_SIDES")
        .env_remove("ODYSSEY_TEST_COMMAND")
        .env_remove("ODYSSEY_LOG_FILE");
    cmd
}

/// Creates `<base>/<name>` with an optional `tests/` directory
#[allow(dead_code)]
pub fn make_project(base: &Path, name: &str, with_tests: bool) -> PathBuf {
    let path = base.join(name);
    fs::create_dir_all(&path).unwrap();
    if with_tests {
        fs::create_dir_all(path.join("tests")).unwrap();
    }
    path
}

/// The `XDG_CONFIG_HOME` used by `isolated_cmd` for `workdir`
#[allow(dead_code)]
pub fn config_home(workdir: &Path) -> PathBuf {
    workdir.join(".config")
}

/// Writes `contents` as the codeodyssey config file seen by `isolated_cmd`
#[allow(dead_code)]
pub fn write_user_config(workdir: &Path, contents: &str) -> PathBuf {
    let dir = config_home(workdir).join("codeodyssey");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}
