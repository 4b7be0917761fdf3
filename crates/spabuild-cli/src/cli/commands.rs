use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::{parse_profile, parse_project_name};

/// Available spabuild subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration
    ///
    /// Loads the project file, applies the profile and environment
    /// overrides, resolves every path against the project root, and prints
    /// the result as JSON.
    Resolve(ResolveArgs),

    /// Validate configuration and referenced files
    ///
    /// Runs schema checks (entries, aliases, plugins, base path, manifest
    /// name, output location) and, unless --no-fs is given, verifies that
    /// entries and alias targets exist on disk.
    Check(CheckArgs),

    /// Write a starter spabuild.toml
    ///
    /// Also creates `src/main.js` when the default entry is missing, so a
    /// fresh project passes `spabuild check`. Existing sources are never
    /// touched.
    Init(InitArgs),

    /// Create a new project from the default template
    ///
    /// Writes spabuild.toml, package.json, and the `src` tree the default
    /// entry and alias point at, then prints a post-create checklist.
    New(NewArgs),

    /// Print the URLs of an entry's built assets
    ///
    /// Reads the manifest the bundler wrote into the output directory.
    Assets(AssetsArgs),
}

impl Command {
    /// Project selection shared by the commands that load a project file.
    pub fn project(&self) -> Option<&ProjectArgs> {
        match self {
            Command::Resolve(args) => Some(&args.project),
            Command::Check(args) => Some(&args.project),
            Command::Assets(args) => Some(&args.project),
            Command::Init(_) | Command::New(_) => None,
        }
    }
}

/// Which project file to load and how
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing spabuild.toml or package.json
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Explicit project file; its directory becomes the project root
    #[arg(short, long, value_name = "FILE", conflicts_with = "root")]
    pub config: Option<PathBuf>,

    /// Profile to layer over the base configuration (e.g. production)
    #[arg(short, long, value_name = "NAME", value_parser = parse_profile)]
    pub profile: Option<String>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Shape of the printed JSON
    ///
    /// - bundler: the bundler's own schema (base, resolve.alias, build.outDir, ...)
    /// - descriptor: the resolved record (basePublicPath, entryPoints, ...)
    #[arg(short, long, value_enum, default_value = "bundler")]
    pub format: ResolveFormat,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Skip filesystem checks (schema validation only)
    #[arg(long)]
    pub no_fs: bool,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write spabuild.toml into (created if missing)
    #[arg(default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,

    /// Overwrite an existing spabuild.toml
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the new command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name (used in package.json and the root component)
    #[arg(value_name = "NAME", value_parser = parse_project_name)]
    pub name: String,

    /// Output directory; must be empty or missing unless --force is given
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Write into a non-empty directory, overwriting template files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the assets command
#[derive(Args, Debug)]
pub struct AssetsArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Entry name as declared under [entries]
    #[arg(default_value = "main", value_name = "ENTRY")]
    pub entry: String,

    /// Output shape
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: AssetsFormat,
}
