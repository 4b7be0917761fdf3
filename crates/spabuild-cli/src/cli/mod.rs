//! Command-line interface definition for spabuild.
//!
//! # Command Structure
//!
//! - `spabuild resolve` - Print the resolved configuration as JSON
//! - `spabuild check` - Validate the configuration and the files it names
//! - `spabuild init` - Write a starter spabuild.toml
//! - `spabuild new` - Create a project from the default template
//! - `spabuild assets` - Print the URLs of an entry's built assets

mod commands;
pub mod enums;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{
    AssetsArgs, CheckArgs, Command, InitArgs, NewArgs, ProjectArgs, ResolveArgs,
};
pub use enums::*;
pub use validation::{parse_profile, parse_project_name};

/// spabuild - build configuration for single-page application bundles
#[derive(Parser, Debug)]
#[command(
    name = "spabuild",
    version,
    about = "Resolve, validate, and inspect SPA bundle configuration",
    long_about = "spabuild turns a spabuild.toml project file into the fully resolved\n\
                  configuration a frontend bundler consumes: plugins, public base path,\n\
                  path aliases, entry points, and output settings with absolute paths."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
