use std::{cell::RefCell, collections::VecDeque, path::PathBuf};

use anyhow::{anyhow, Result};

use crate::prompt::{self, Prompter};
use crate::runner::CommandRunner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

pub enum MockResponse {
    Ok(String),
    Err(String),
}

/// Records every invocation and replays canned responses in order. With
/// no response queued, an invocation succeeds with empty output.
#[derive(Default)]
pub struct MockRunner {
    responses: RefCell<VecDeque<MockResponse>>,
    invocations: RefCell<Vec<Invocation>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, response: MockResponse) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    fn record(&self, program: &str, args: &[&str]) -> Result<String> {
        self.invocations.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });
        match self.responses.borrow_mut().pop_front() {
            Some(MockResponse::Ok(output)) => Ok(output),
            Some(MockResponse::Err(message)) => Err(anyhow!(message)),
            None => Ok(String::new()),
        }
    }
}

impl CommandRunner for MockRunner {
    fn lookup(&self, program: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/usr/bin").join(program))
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        self.record(program, args).map(|_| ())
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<String> {
        self.record(program, args)
    }
}

/// Replays scripted operator answers; any prompt beyond the script is
/// an error. Confirmation answers are raw lines, judged by the same
/// check the console prompter uses.
pub struct ScriptedPrompter {
    inputs: VecDeque<String>,
    passwords: VecDeque<String>,
    confirmations: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new(inputs: &[&str], passwords: &[&str], confirmations: &[&str]) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            inputs: owned(inputs),
            passwords: owned(passwords),
            confirmations: owned(confirmations),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[], &[], &[])
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| anyhow!("unscripted input prompt: {}", prompt))
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        self.passwords
            .pop_front()
            .ok_or_else(|| anyhow!("unscripted password prompt: {}", prompt))
    }

    fn confirm(&mut self, warning: &str) -> Result<bool> {
        let answer = self
            .confirmations
            .pop_front()
            .ok_or_else(|| anyhow!("unscripted confirmation: {}", warning))?;
        Ok(prompt::is_affirmative(&answer))
    }
}
