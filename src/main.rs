use std::{env, process};

use tenant_reset::{
    prompt::ConsolePrompter,
    reset,
    runner::{CommandRunner, SystemRunner},
    Paths,
};

const REQUIRED_TOOLS: &[(&str, &str)] = &[
    (
        "auth0",
        "see https://github.com/auth0/auth0-cli#installation",
    ),
    ("a0deploy", "run `npm install -g auth0-deploy-cli`"),
];

fn main() {
    let runner = SystemRunner;

    let mut missing = false;
    for (program, hint) in REQUIRED_TOOLS {
        if runner.lookup(program).is_none() {
            eprintln!(
                "tenant-reset: `{}` not found on PATH; to install, {}",
                program, hint
            );
            missing = true;
        }
    }
    if missing {
        process::exit(1);
    }

    let base = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("tenant-reset: cannot resolve working directory: {}", err);
            process::exit(1);
        }
    };
    let paths = Paths::new(base);

    let mut prompter = ConsolePrompter;
    if let Err(err) = reset::run(&paths, &runner, &mut prompter) {
        eprintln!("tenant-reset: {:#}", err);
        process::exit(1);
    }
}
