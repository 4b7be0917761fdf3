//! Init command implementation.
//!
//! Writes a starter `spabuild.toml` holding the default configuration and
//! fills in the default entry when the project has none yet.

use std::fs;
use std::path::Path;

use spabuild_config::discovery::CONFIG_FILE_NAME;
use spabuild_config::ProjectConfig;

use crate::cli::InitArgs;
use crate::commands::{templates, utils};
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the init command.
///
/// # Errors
///
/// Returns `CliError::AlreadyExists` if the project file exists and
/// `--force` was not given, or I/O errors from writing it.
pub fn execute(args: InitArgs) -> Result<()> {
    let path = args.dir.join(CONFIG_FILE_NAME);

    if path.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "{} is a directory",
            path.display()
        )));
    }
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    fs::create_dir_all(&args.dir)?;
    fs::write(&path, ProjectConfig::example_toml())?;
    ui::success(&format!("Created {}", path.display()));

    create_missing_sources(&args.dir)?;
    print_next_steps(&args.dir);
    Ok(())
}

/// Write `src/main.js` and its root component when the entry does not exist.
fn create_missing_sources(dir: &Path) -> Result<()> {
    let src = dir.join("src");
    let main_js = src.join("main.js");
    if main_js.exists() {
        return Ok(());
    }

    utils::write_file(&main_js, templates::MAIN_JS)?;
    ui::success(&format!("Created {}", main_js.display()));

    let app_vue = src.join("App.vue");
    if !app_vue.exists() {
        let name = dir
            .canonicalize()?
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("app")
            .to_string();
        utils::write_file(&app_vue, &templates::app_vue(&name))?;
        ui::success(&format!("Created {}", app_vue.display()));
    }

    Ok(())
}

fn print_next_steps(dir: &Path) {
    let root = if dir == Path::new(".") {
        String::new()
    } else {
        format!(" --root {}", dir.display())
    };

    ui::info("Next steps:");
    ui::info(&format!("  Edit {CONFIG_FILE_NAME} to declare your entries"));
    ui::info(&format!("  spabuild check{root}"));
    ui::info(&format!("  spabuild resolve{root}"));
}
