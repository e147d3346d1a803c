//! lualink CLI — resolves host build configurations for the Lua scripting
//! module, one compiled target at a time.

mod commands;
mod manifest;

use std::process;

use clap::{Parser, Subcommand};

use manifest::LualinkManifest;

#[derive(Parser)]
#[command(name = "lualink", version, about = "Lua module build-configuration resolver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new lualink project
    Init {
        /// Project name
        name: String,
    },
    /// Resolve the build configuration for one target
    Resolve {
        /// Named descriptor from targets/ (alternative to the flags below)
        #[arg(long)]
        target: Option<String>,
        /// Target platform (ios, android, win32, win64, mac, linux, other)
        #[arg(long)]
        platform: Option<String>,
        /// Host toolchain version token (e.g., 4.24, 5.2)
        #[arg(long)]
        toolchain: Option<String>,
        /// Build type (editor, game, client, server)
        #[arg(long)]
        build_type: Option<String>,
        /// Plugin directory holding External/ and Library/
        #[arg(long)]
        plugin_dir: Option<String>,
        /// Output format (text, json)
        #[arg(long)]
        export: Option<String>,
        /// Fail instead of emitting an empty link contribution
        #[arg(long)]
        strict: bool,
    },
    /// Manage target descriptors and platforms
    Target {
        #[command(subcommand)]
        action: TargetAction,
    },
}

#[derive(Subcommand)]
enum TargetAction {
    /// List supported platforms and project target descriptors
    List,
    /// Show a platform's contribution at a given toolchain version
    Describe {
        /// Platform name
        name: String,
        /// Toolchain version to describe at (default: manifest default)
        #[arg(long)]
        toolchain: Option<String>,
    },
    /// Add a template target descriptor to targets/
    Add {
        /// Descriptor name (becomes targets/<name>.target.toml)
        name: String,
    },
    /// Validate a target descriptor from targets/
    Validate {
        /// Descriptor name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Resolve {
            target,
            platform,
            toolchain,
            build_type,
            plugin_dir,
            export,
            strict,
        } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            commands::resolve::run(
                &project_dir,
                manifest.as_ref(),
                target.as_deref(),
                platform.as_deref(),
                toolchain.as_deref(),
                build_type.as_deref(),
                plugin_dir.as_deref(),
                export.as_deref(),
                strict,
            )
        }

        Commands::Target { action } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            match action {
                TargetAction::List => commands::target::list(&project_dir),
                TargetAction::Describe { name, toolchain } => commands::target::describe(
                    manifest.as_ref(),
                    &name,
                    toolchain.as_deref(),
                ),
                TargetAction::Add { name } => commands::target::add(&project_dir, &name),
                TargetAction::Validate { name } => commands::target::validate(&project_dir, &name),
            }
        }
    }
}

/// Load the nearest `lualink.toml`, if any, walking up from `cwd`.
fn load_manifest_optional(
    cwd: &std::path::Path,
) -> anyhow::Result<(Option<LualinkManifest>, Option<std::path::PathBuf>)> {
    match LualinkManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}
