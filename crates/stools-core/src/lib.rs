//! Tool registry and dispatch for stools.
//!
//! stools keeps a set of named tools under an install root:
//!
//! ```text
//! <root>/conf.yaml           name -> description, in listing order
//! <root>/module/<name>/tool  entry point of each tool
//! ```
//!
//! The [`Dispatcher`] maps a command line either to a management command
//! (`add`, `rm`) handled by the [`ModuleManager`], or to a tool run through a
//! [`CommandRunner`]. The install root is always passed in explicitly.

pub mod dispatcher;
pub mod error;
pub mod module;
pub mod registry;
pub mod root;
pub mod runner;
pub mod usage;

pub use dispatcher::{ADD_COMMAND, Dispatcher, Invocation, Outcome, REMOVE_COMMAND};
pub use error::{Error, Result};
pub use module::ModuleManager;
pub use registry::{Registry, RegistryStore, ToolEntry};
pub use root::InstallRoot;
pub use runner::{CommandLine, CommandOutput, CommandRunner, ProcessRunner, QuotingMode};
pub use usage::render_usage;
