// SPDX-License-Identifier: GPL-3.0-only

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::runner::CommandRunner;

/// One role object as reported by `auth0 roles list --json`. Only the
/// identifier matters for deletion; the name is kept for the console.
#[derive(Debug, Deserialize)]
pub struct Role {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

pub fn list(runner: &dyn CommandRunner) -> Result<Vec<Role>> {
    let output = runner.output("auth0", &["roles", "list", "--json"])?;
    // A tenant with no roles makes the CLI print nothing instead of `[]`.
    if output.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(output.trim())
        .context("unexpected output from `auth0 roles list --json`")
}

/// Deletes every role, one invocation per identifier, stopping at the
/// first failure. No batching, no retry, no recorded progress.
pub fn purge(runner: &dyn CommandRunner) -> Result<usize> {
    let roles = list(runner)?;
    for role in &roles {
        println!("Deleting role {} ({})", role.id, role.name);
        runner.run(
            "auth0",
            &["roles", "delete", &role.id, "--force", "--no-input"],
        )?;
    }
    Ok(roles.len())
}
