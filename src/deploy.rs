// SPDX-License-Identifier: GPL-3.0-only

use std::path::Path;

use anyhow::Result;

use crate::runner::CommandRunner;

/// Overwrites the remote tenant configuration with the contents of
/// `input`. `a0deploy`'s own retry and diffing behavior is opaque here;
/// only the exit status is interpreted.
pub fn import(runner: &dyn CommandRunner, input: &Path, config_file: &Path) -> Result<()> {
    let input = input.to_string_lossy();
    let config_file = config_file.to_string_lossy();
    runner.run(
        "a0deploy",
        &[
            "import",
            "--format",
            "directory",
            "--input_file",
            &input,
            "--config_file",
            &config_file,
        ],
    )
}
