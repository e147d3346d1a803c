//! `lualink resolve` — run the resolution pipeline for one target.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use lualink_resolve::pipeline::{resolve, resolve_strict, BuildConfig};
use lualink_targets::descriptor::{BuildType, PluginLayout, TargetDescriptor};
use lualink_targets::parse::{load_descriptor_toml, validate_descriptor};
use lualink_targets::platform::Platform;
use lualink_targets::toolchain::ToolchainVersion;

use crate::manifest::LualinkManifest;

/// Resolve and print one target's build configuration.
///
/// The descriptor comes from a named `targets/<name>.target.toml` file or
/// from the `--platform`/`--toolchain`/`--build-type` flags, with manifest
/// defaults filling any gap.
#[allow(clippy::too_many_arguments)]
pub fn run(
    project_dir: &Path,
    manifest: Option<&LualinkManifest>,
    target: Option<&str>,
    platform: Option<&str>,
    toolchain: Option<&str>,
    build_type: Option<&str>,
    plugin_dir: Option<&str>,
    export: Option<&str>,
    strict: bool,
) -> Result<()> {
    let descriptor = build_descriptor(project_dir, manifest, target, platform, toolchain, build_type)?;

    // Warn but proceed on configurations that resolve to nothing; strict
    // mode turns those into a hard error below.
    if let Err(issues) = validate_descriptor(&descriptor) {
        for issue in &issues {
            eprintln!("{}: {}", issue.severity, issue.message);
        }
        if issues.iter().any(|i| i.severity == "error") {
            bail!("target descriptor failed validation");
        }
    }

    let layout = PluginLayout::from_plugin_dir(&resolve_plugin_dir(
        project_dir,
        manifest,
        plugin_dir,
    ));

    let config = if strict {
        resolve_strict(&descriptor, &layout)?
    } else {
        resolve(&descriptor, &layout)
    };

    print_config(&config, export)
}

fn build_descriptor(
    project_dir: &Path,
    manifest: Option<&LualinkManifest>,
    target: Option<&str>,
    platform: Option<&str>,
    toolchain: Option<&str>,
    build_type: Option<&str>,
) -> Result<TargetDescriptor> {
    if let Some(name) = target {
        let path = project_dir
            .join("targets")
            .join(format!("{name}.target.toml"));
        return load_descriptor_toml(&path)
            .with_context(|| format!("loading target descriptor '{name}'"));
    }

    let platform: Platform = match platform {
        Some(p) => p.parse().map_err(anyhow::Error::msg)?,
        None => bail!("specify --platform or --target <name>"),
    };

    let toolchain_token = toolchain
        .or_else(|| manifest.and_then(|m| m.default_toolchain()))
        .ok_or_else(|| {
            anyhow::anyhow!("specify --toolchain or set [defaults] toolchain in lualink.toml")
        })?;
    let toolchain: ToolchainVersion = toolchain_token.parse()?;

    let build_type_name = build_type
        .or_else(|| manifest.and_then(|m| m.default_build_type()))
        .unwrap_or("game");
    let build_type = BuildType::parse(build_type_name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown build type '{build_type_name}' (expected editor, game, client, or server)"
        )
    })?;

    Ok(TargetDescriptor::new(platform, toolchain, build_type))
}

fn resolve_plugin_dir(
    project_dir: &Path,
    manifest: Option<&LualinkManifest>,
    flag: Option<&str>,
) -> PathBuf {
    match flag {
        Some(dir) => project_dir.join(dir),
        None => match manifest {
            Some(m) => m.plugin_dir(project_dir),
            None => project_dir.to_path_buf(),
        },
    }
}

fn print_config(config: &BuildConfig, export: Option<&str>) -> Result<()> {
    match export {
        None | Some("text") => println!("{}", config.report()),
        Some("json") => {
            let json = serde_json::to_string_pretty(config).context("serializing configuration")?;
            println!("{json}");
        }
        Some(other) => bail!("unknown export format '{other}' (expected text or json)"),
    }
    Ok(())
}
