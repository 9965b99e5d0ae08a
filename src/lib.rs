use std::path::{Path, PathBuf};

pub mod config;
pub mod deploy;
pub mod prompt;
pub mod reset;
pub mod roles;
pub mod runner;
pub mod scaffold;

#[cfg(test)]
pub(crate) mod test_support;

/// Filesystem layout for one run, resolved once from a single base
/// directory and passed to every operation that touches disk.
#[derive(Debug)]
pub struct Paths {
    config_file: PathBuf,
    scratch_dir: PathBuf,
}

impl Paths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_file: base.join("config.json"),
            scratch_dir: base.join("empty-tenant"),
        }
    }

    /// Credential file, shared with `a0deploy` as its config file.
    /// Persists across runs as a convenience cache.
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Scratch directory holding the empty-tenant tree. Lives only for
    /// the duration of one run.
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }
}
