//! Command implementations for the spabuild CLI.
//!
//! - [`resolve`] - Print the resolved configuration
//! - [`check`] - Configuration and filesystem validation
//! - [`init`] - Starter project file
//! - [`new`] - Project scaffolding from the default template
//! - [`assets`] - Entry asset URLs from the bundler manifest
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod assets;
pub mod check;
pub mod init;
pub mod new;
pub mod resolve;
mod templates;
pub mod utils;

pub use assets::execute as assets_execute;
pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use new::execute as new_execute;
pub use resolve::execute as resolve_execute;
