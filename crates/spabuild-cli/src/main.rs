//! spabuild CLI entry point.
//!
//! Parses arguments, initializes logging and colors, and dispatches to the
//! command implementations.

use clap::Parser;
use miette::Result;
use spabuild_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // settings.log_level from the project file applies when neither a flag
    // nor RUST_LOG picks the filter.
    let configured = commands::utils::configured_log_level(&args.command);
    logger::init_logger(args.verbose, args.quiet, args.no_color, configured.as_deref());
    ui::init_colors(args.no_color);
    ui::init_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
        cli::Command::New(new_args) => commands::new_execute(new_args),
        cli::Command::Assets(assets_args) => commands::assets_execute(assets_args),
    };

    result.map_err(error::cli_error_to_miette)
}
