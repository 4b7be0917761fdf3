//! Resolve command implementation.
//!
//! Prints the resolved configuration as JSON, either in the bundler's schema
//! or as the descriptor record.

use crate::cli::{ResolveArgs, ResolveFormat};
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the resolve command.
///
/// # Errors
///
/// Returns errors for a missing or invalid project file, a profile override
/// that does not fit the schema, or a failed write to `--output`.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let config = utils::resolve_project(&args.project)?;

    let json = match args.format {
        ResolveFormat::Bundler => config.to_bundler_json()?,
        ResolveFormat::Descriptor => config.to_descriptor_json()?,
    };

    match args.output {
        Some(path) => {
            utils::write_file(&path, &format!("{json}\n"))?;
            ui::success(&format!("Wrote {}", path.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}
