//! New command implementation.
//!
//! Creates a project directory holding the default single-page application
//! layout: `spabuild.toml`, `package.json`, and the `src` tree the default
//! entry and alias point at.

use std::fs;
use std::path::Path;

use spabuild_config::discovery::CONFIG_FILE_NAME;
use spabuild_config::ProjectConfig;

use crate::cli::NewArgs;
use crate::commands::{templates, utils};
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the new command.
///
/// # Process
///
/// 1. Validate the project name against the output directory
/// 2. Refuse a non-empty output directory unless `--force`
/// 3. Write the project files
/// 4. Print the post-create checklist
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` when the name equals the output
/// directory's last component or the output path is a file, and
/// `CliError::AlreadyExists` for a non-empty directory without `--force`.
pub fn execute(args: NewArgs) -> Result<()> {
    validate_target(&args.name, &args.dir)?;

    if args.dir.exists() {
        if !args.dir.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "{} exists and is not a directory",
                args.dir.display()
            )));
        }
        if !args.force && fs::read_dir(&args.dir)?.next().is_some() {
            return Err(CliError::AlreadyExists(args.dir));
        }
    }

    ui::info(&format!(
        "Creating project {} at {}",
        args.name,
        args.dir.display()
    ));
    generate_project_files(&args.dir, &args.name)?;
    ui::success(&format!("Created project: {}", args.name));

    print_checklist(&args.dir);
    Ok(())
}

/// The project name may not repeat the output directory's last component.
fn validate_target(name: &str, dir: &Path) -> Result<()> {
    if dir.file_name().is_some_and(|last| last == name) {
        return Err(CliError::InvalidArgument(format!(
            "Project name '{name}' cannot be the same as the directory in the output path"
        )));
    }
    Ok(())
}

fn generate_project_files(dir: &Path, name: &str) -> Result<()> {
    let files = [
        (dir.join(CONFIG_FILE_NAME), ProjectConfig::example_toml().to_string()),
        (dir.join("package.json"), templates::package_json(name)?),
        (dir.join(".gitignore"), templates::GITIGNORE.to_string()),
        (dir.join("src").join("main.js"), templates::MAIN_JS.to_string()),
        (dir.join("src").join("App.vue"), templates::app_vue(name)),
    ];

    for (path, content) in &files {
        utils::write_file(path, content)?;
        tracing::debug!(path = %path.display(), "wrote project file");
    }

    Ok(())
}

fn print_checklist(dir: &Path) {
    ui::info("Post-create checklist:");
    ui::info("  - Review dependencies listed in package.json, bumping versions or removing them as needed");
    ui::info("  - Generate and commit a package-lock.json; e.g. npm i --package-lock-only");
    ui::info(&format!(
        "  - Validate the configuration: spabuild check --root {}",
        dir.display()
    ));
    ui::info("  - git init, set your upstream repository, and push your main branch");
}
