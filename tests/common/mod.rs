//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_deploy-webhook"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to create a Command isolated from the host: `PATH` is only
/// `search_dir`, the working directory is `cwd`, and stdin is closed so the
/// final prompt returns immediately.
pub fn test_command(search_dir: &Path, cwd: &Path) -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.env("PATH", search_dir)
        .env_remove("DEPLOY_WEBHOOK_LOG")
        .current_dir(cwd)
        .stdin(Stdio::null());
    cmd
}

/// Run the deployer and return its output.
pub fn run_deployer(search_dir: &Path, cwd: &Path) -> Output {
    test_command(search_dir, cwd)
        .output()
        .expect("Failed to execute command")
}

/// Install a fake `supabase` in `dir` that writes its `$0` and arguments,
/// one per line, to `args_file`, prints a marker line and exits with `code`.
#[cfg(unix)]
pub fn install_stub_tool(dir: &Path, args_file: &Path, code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("supabase");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$0\" \"$@\" > '{}'\necho 'stub tool ran'\nexit {}\n",
        args_file.display(),
        code
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Create the project-local install location with the given contents.
pub fn create_local_install(cwd: &Path, contents: &str) -> PathBuf {
    let path = cwd.join(deploy_webhook::DeployConfig::default().local_install);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
