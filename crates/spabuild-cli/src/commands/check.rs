//! Check command implementation.
//!
//! Validates configuration and the files it references without building.

use spabuild_config::{BuildConfiguration, ConfigValidator, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the project file and apply the profile
/// 2. Resolve paths against the project root
/// 3. Schema checks
/// 4. Filesystem checks (unless `--no-fs`)
///
/// # Errors
///
/// Returns the first failing check.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let config = utils::resolve_project(&args.project)?;
    ui::success(&format!(
        "Resolved {} with base {}",
        plural(config.entry_points().len(), "entry", "entries"),
        config.base()
    ));

    run_check("Schema", &SchemaValidator, &config)?;

    if args.no_fs {
        ui::warning("Skipping filesystem checks");
    } else {
        run_check("Files", &FsValidator, &config)?;
        for (name, path) in config.entry_points() {
            ui::success(&format!("  {name} -> {}", path.display()));
        }
    }

    ui::success("All checks passed!");
    Ok(())
}

fn run_check(
    label: &str,
    validator: &dyn ConfigValidator,
    config: &BuildConfiguration,
) -> Result<()> {
    match validator.validate(config) {
        Ok(()) => {
            ui::success(&format!("{label}: ok"));
            Ok(())
        }
        Err(e) => {
            ui::error(&format!("{label}: failed"));
            Err(e.into())
        }
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}
