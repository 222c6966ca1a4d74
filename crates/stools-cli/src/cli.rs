//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use stools_core::QuotingMode;

/// Run locally installed tools by name.
///
/// Examples:
///   stools                          # List installed tools
///   stools hello -n "a b"           # Run the 'hello' tool
///   stools add ./build/hello "Says hello"
///   stools rm hello
#[derive(Parser, Debug)]
#[command(name = "stools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Install root holding conf.yaml and module/ (default: the executable's directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Forward every tool argument as-is instead of splitting on whitespace
    #[arg(long)]
    pub exact_args: bool,

    /// `<tool> [parameters]`, `rm <toolname>` or `add <toolpath> <description>`
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    pub fn quoting(&self) -> QuotingMode {
        if self.exact_args {
            QuotingMode::Exact
        } else {
            QuotingMode::Legacy
        }
    }
}
