// SPDX-License-Identifier: GPL-3.0-only

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::json;

const EMPTY_DIRS: &[&str] = &[
    "database-connections",
    "clients",
    "resource-servers",
    "rules",
    "hooks",
    "actions",
    "pages",
];

const DEFAULT_CONNECTION: &str = "Username-Password-Authentication";

/// (Re)creates the fixed empty-tenant tree under `dir`: the category
/// subdirectories, a minimal `tenant.json`, and one default database
/// connection descriptor. Safe to rerun.
pub fn create(dir: &Path) -> Result<()> {
    for sub in EMPTY_DIRS {
        let path = dir.join(sub);
        fs::create_dir_all(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
    }

    let tenant = json!({
        "friendly_name": "Empty tenant",
        "picture_url": "",
        "support_email": "",
        "support_url": "",
    });
    write_json(&dir.join("tenant.json"), &tenant)?;

    let connection_dir = dir.join("database-connections").join(DEFAULT_CONNECTION);
    fs::create_dir_all(&connection_dir)
        .with_context(|| format!("failed to create {}", connection_dir.display()))?;
    let connection = json!({
        "name": DEFAULT_CONNECTION,
        "strategy": "auth0",
        "enabled_clients": [],
    });
    write_json(&connection_dir.join("database.json"), &connection)?;

    Ok(())
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    let data = serde_json::to_string_pretty(value)?;
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}

/// Removes the scratch tree when the run ends, whatever the outcome, so
/// a failed or cancelled run does not leak local state.
pub struct ScratchGuard {
    dir: PathBuf,
}

impl ScratchGuard {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Drop for ScratchGuard {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.dir) {
            if err.kind() != io::ErrorKind::NotFound {
                eprintln!("Failed to remove {}: {}", self.dir.display(), err);
            }
        }
    }
}
