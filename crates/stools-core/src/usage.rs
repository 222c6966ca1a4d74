//! Usage screen with the ordered tool listing

use std::fmt::Write;

use crate::registry::Registry;

/// Column width tool names are padded to in the listing.
pub const NAME_COLUMN_WIDTH: usize = 21;

/// Render the usage text for `program`.
///
/// The "Available tools" section is only present when a registry was
/// loaded; entries appear in registry order.
pub fn render_usage(program: &str, registry: Option<&Registry>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out, "Usage:   {program}  <tool> [parameters]");
    let _ = writeln!(out, "         {program}  rm <toolname>");
    let _ = writeln!(out, "         {program}  add <toolpath> <description>");

    if let Some(registry) = registry {
        out.push_str("\nAvailable tools:\n");
        for entry in registry {
            let _ = writeln!(
                out,
                "\t{:<width$}\t{}",
                entry.name,
                entry.description,
                width = NAME_COLUMN_WIDTH
            );
        }
    }
    out
}
