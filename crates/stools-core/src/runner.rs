//! Command line assembly and external process execution.
//!
//! Tool arguments are echoed as one quoted line and forwarded according to
//! a [`QuotingMode`]. The legacy mode reproduces the historical field split:
//! an argument containing whitespace reaches the tool as several arguments.

use std::borrow::Cow;
use std::fmt;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// How tool arguments are forwarded to the child process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuotingMode {
    /// Whitespace-bearing arguments are split into whitespace-separated fields.
    ///
    /// Only the arguments are split; the program path is never split.
    #[default]
    Legacy,
    /// Every argument is forwarded as exactly one argv entry.
    Exact,
}

/// An executable plus the arguments given to it on the stools command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    mode: QuotingMode,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: Vec<String>, mode: QuotingMode) -> Self {
        Self {
            program: program.into(),
            args,
            mode,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Wrap `arg` in double quotes if it contains whitespace.
    ///
    /// Embedded quote characters are not escaped.
    pub fn quote_arg(arg: &str) -> Cow<'_, str> {
        if arg.chars().any(char::is_whitespace) {
            Cow::Owned(format!("\"{arg}\""))
        } else {
            Cow::Borrowed(arg)
        }
    }

    /// The argument vector handed to the child, excluding the program.
    pub fn argv(&self) -> Vec<String> {
        match self.mode {
            QuotingMode::Exact => self.args.clone(),
            QuotingMode::Legacy => self
                .args
                .iter()
                .flat_map(|arg| arg.split_whitespace())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", Self::quote_arg(arg))?;
        }
        Ok(())
    }
}

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, `None` when the child was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Turn an unsuccessful exit into [`Error::CommandFailed`].
    pub fn check(&self, program: &str) -> Result<()> {
        if self.success {
            return Ok(());
        }
        let status = match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        };
        Err(Error::CommandFailed {
            program: program.to_string(),
            status,
            code: self.code,
            stderr: self.stderr.trim_end().to_string(),
        })
    }
}

/// Runs a command line to completion.
pub trait CommandRunner {
    /// Run `command`, blocking until it exits.
    ///
    /// Only a failure to start the process is an error here; the exit status
    /// is reported in the returned output.
    fn run(&self, command: &CommandLine) -> Result<CommandOutput>;
}

/// Spawns a real child process with captured stdout and stderr.
///
/// No timeout: a child that never exits blocks the caller forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandOutput> {
        let argv = command.argv();
        debug!(program = command.program(), ?argv, "Spawning tool");

        let output = Command::new(command.program())
            .args(&argv)
            .output()
            .map_err(|source| Error::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
