// SPDX-License-Identifier: GPL-3.0-only

use anyhow::Result;
use console::style;

use crate::{config, deploy, prompt::Prompter, roles, runner::CommandRunner, scaffold, Paths};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The operator declined the destructive confirmation. A normal
    /// exit, not an error.
    Cancelled,
}

const WARNING: &str = "This will irreversibly delete all clients, APIs, database connections, \
rules and hooks on the tenant and replace its configuration with an empty one.";

/// The whole reset flow, in fixed order: credential resolution, scaffold
/// generation, destructive confirmation, role purge, configuration
/// import. Fail-fast: the first error skips every later step. The
/// scratch tree is removed on every exit path.
pub fn run(
    paths: &Paths,
    runner: &dyn CommandRunner,
    prompter: &mut dyn Prompter,
) -> Result<Outcome> {
    let credentials = config::resolve(paths.config_file(), prompter)?;

    // The guard must exist before creation starts so a half-built tree
    // is cleaned up too.
    let scratch = scaffold::ScratchGuard::new(paths.scratch_dir());
    scaffold::create(scratch.dir())?;

    println!("Target tenant: {}", credentials.domain);
    if !prompter.confirm(WARNING)? {
        println!("Cancelled. Tenant {} was left untouched.", credentials.domain);
        return Ok(Outcome::Cancelled);
    }

    let deleted = roles::purge(runner)?;
    println!("Deleted {} role(s)", deleted);

    deploy::import(runner, scratch.dir(), paths.config_file())?;

    println!(
        "{} Tenant {} was reset to an empty configuration.",
        style("Done.").green().bold(),
        credentials.domain
    );
    Ok(Outcome::Completed)
}
