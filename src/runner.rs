use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{bail, Context, Result};

/// Seam between the reset flow and the external CLIs, so tests can
/// substitute a recording mock.
pub trait CommandRunner {
    /// Resolves `program` on `PATH`, if present.
    fn lookup(&self, program: &str) -> Option<PathBuf>;

    /// Runs `program` with inherited stdio. A non-zero exit is an error.
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;

    /// Runs `program` with captured stdio and returns its stdout.
    /// A non-zero exit is an error carrying whatever stderr said.
    fn output(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runs commands as real subprocesses, blocking until they exit.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn lookup(&self, program: &str) -> Option<PathBuf> {
        let path = env::var_os("PATH")?;
        env::split_paths(&path)
            .map(|dir| dir.join(program))
            .find(|candidate| is_executable(candidate))
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to start `{}`", program))?;
        if !status.success() {
            bail!("`{} {}` failed with {}", program, args.join(" "), status);
        }
        Ok(())
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to start `{}`", program))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "`{} {}` failed with {}: {}",
                program,
                args.join(" "),
                output.status,
                stderr.trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

// A regular file without execute permission does not resolve, matching
// what `command -v` would find.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
