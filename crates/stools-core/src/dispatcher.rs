//! Routes command-line arguments to a management command or a tool.
//!
//! Only the argument count and the first token decide the route: there are
//! no flags. A tool literally named `add` or `rm` is therefore unreachable
//! whenever the arity matches the management command.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};
use crate::module::ModuleManager;
use crate::registry::RegistryStore;
use crate::root::InstallRoot;
use crate::runner::{CommandLine, CommandRunner, ProcessRunner, QuotingMode};
use crate::usage::render_usage;

/// Keyword for installing a tool: `add <toolpath> <description>`.
pub const ADD_COMMAND: &str = "add";
/// Keyword for removing a tool: `rm <toolname>`.
pub const REMOVE_COMMAND: &str = "rm";

/// What an argument list asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Show usage and fail
    Usage,
    Add { toolpath: PathBuf, description: String },
    Remove { name: String },
    /// Run the named tool with the remaining arguments
    Run { tool: String, args: Vec<String> },
}

impl Invocation {
    /// Classify `args` (program name excluded).
    pub fn parse(args: &[String]) -> Self {
        match args {
            [] => Self::Usage,
            [only] if only == ADD_COMMAND || only == REMOVE_COMMAND => Self::Usage,
            [cmd, name] if cmd == REMOVE_COMMAND => Self::Remove { name: name.clone() },
            [cmd, toolpath, description] if cmd == ADD_COMMAND => Self::Add {
                toolpath: PathBuf::from(toolpath),
                description: description.clone(),
            },
            [tool, rest @ ..] => Self::Run {
                tool: tool.clone(),
                args: rest.to_vec(),
            },
        }
    }
}

/// How a dispatch ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command or tool ran successfully
    Completed,
    /// The caller should show usage and exit unsuccessfully
    Usage,
}

/// Executes invocations against one install root.
pub struct Dispatcher<R: CommandRunner = ProcessRunner> {
    modules: ModuleManager,
    runner: R,
    quoting: QuotingMode,
}

impl Dispatcher<ProcessRunner> {
    pub fn new(root: InstallRoot) -> Self {
        Self::with_runner(root, ProcessRunner)
    }
}

impl<R: CommandRunner> Dispatcher<R> {
    pub fn with_runner(root: InstallRoot, runner: R) -> Self {
        Self {
            modules: ModuleManager::new(root),
            runner,
            quoting: QuotingMode::default(),
        }
    }

    /// Set how tool arguments are forwarded (builder pattern).
    pub fn with_quoting(mut self, quoting: QuotingMode) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn modules(&self) -> &ModuleManager {
        &self.modules
    }

    pub fn registry(&self) -> &RegistryStore {
        self.modules.registry()
    }

    /// Parse and execute `args`, writing tool output to `out`.
    pub fn dispatch(&self, args: &[String], out: &mut dyn Write) -> Result<Outcome> {
        self.execute(Invocation::parse(args), out)
    }

    pub fn execute(&self, invocation: Invocation, out: &mut dyn Write) -> Result<Outcome> {
        debug!(?invocation, "Dispatching");
        match invocation {
            Invocation::Usage => Ok(Outcome::Usage),
            Invocation::Add {
                toolpath,
                description,
            } => {
                self.modules.add_tool(&toolpath, &description)?;
                Ok(Outcome::Completed)
            }
            Invocation::Remove { name } => {
                self.modules.remove_tool(&name)?;
                Ok(Outcome::Completed)
            }
            Invocation::Run { tool, args } => self.run_tool(&tool, args, out),
        }
    }

    /// Resolve `tool`, echo the assembled command line, run it and forward
    /// its stdout. An unknown tool yields [`Outcome::Usage`].
    pub fn run_tool(&self, tool: &str, args: Vec<String>, out: &mut dyn Write) -> Result<Outcome> {
        let executable = match self.modules.resolve(tool) {
            Ok(path) => path,
            Err(Error::ToolNotFound { name }) => {
                debug!(tool = %name, "Tool not installed");
                return Ok(Outcome::Usage);
            }
            Err(e) => return Err(e),
        };

        let command = CommandLine::new(executable.as_str(), args, self.quoting);
        writeln!(out, "{command}")?;
        out.flush()?;

        let output = self.runner.run(&command)?;
        out.write_all(output.stdout.as_bytes())?;
        out.flush()?;
        output.check(command.program())?;
        Ok(Outcome::Completed)
    }

    /// Usage text with the current registry listing.
    ///
    /// A registry file that exists but cannot be parsed is an error.
    pub fn usage(&self, program: &str) -> Result<String> {
        let registry = self.registry().load_if_exists()?;
        Ok(render_usage(program, registry.as_ref()))
    }
}
