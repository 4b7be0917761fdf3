//! spabuild CLI - resolve, validate, and inspect SPA bundle configuration.
//!
//! This crate is the command-line front end of `spabuild-config`. It loads a
//! project file, applies profiles and environment overrides, and prints the
//! resolved configuration or checks it against the filesystem.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument model
//! - [`commands`] - one module per subcommand
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use spabuild_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false, None);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
