//! `lualink target` — platform listing and descriptor management.

use std::path::Path;

use anyhow::{bail, Context, Result};

use lualink_resolve::libraries::resolve_libraries;
use lualink_targets::descriptor::PluginLayout;
use lualink_targets::parse::{
    discover_targets, generate_template, load_descriptor_toml, validate_descriptor,
};
use lualink_targets::platform::Platform;
use lualink_targets::toolchain::ToolchainVersion;

use crate::manifest::LualinkManifest;

/// List supported platforms and any descriptors under `targets/`.
pub fn list(project_dir: &Path) -> Result<()> {
    println!("Supported platforms:");
    println!();
    for (name, note) in platform_notes() {
        println!("  {name:<10} {note}");
    }
    println!();

    let targets = discover_targets(project_dir)?;
    if targets.is_empty() {
        println!("No target descriptors found under targets/.");
    } else {
        println!("Project target descriptors:");
        for (name, path) in targets {
            println!("  {name:<20} {}", path.display());
        }
    }
    println!();
    println!("Use 'lualink target describe <platform>' for details.");
    Ok(())
}

/// Describe one platform's library contribution at a toolchain version.
pub fn describe(
    manifest: Option<&LualinkManifest>,
    name: &str,
    toolchain: Option<&str>,
) -> Result<()> {
    let platform: Platform = match name.parse() {
        Ok(p) => p,
        Err(_) => bail!("unknown platform: '{name}'. Use 'lualink target list' to see platforms."),
    };

    let token = toolchain
        .or_else(|| manifest.and_then(|m| m.default_toolchain()))
        .unwrap_or("5.5");
    let toolchain: ToolchainVersion = token.parse()?;

    // A placeholder layout keeps the output about shape, not absolute paths.
    let layout = PluginLayout::from_plugin_dir(Path::new("<plugin>"));
    let contribution = resolve_libraries(platform, &toolchain, &layout);

    println!("=== Platform: {platform} (toolchain {toolchain}) ===");
    if platform.version_refined() {
        println!("Contribution varies with toolchain version.");
    }
    if contribution.is_empty() {
        println!("No library contribution at this version.");
        return Ok(());
    }
    println!("Libraries:");
    for lib in &contribution.libraries {
        println!("  {}", lib.path.display());
    }
    if !contribution.search_paths.is_empty() {
        println!("Search paths:");
        for path in &contribution.search_paths {
            println!("  {}", path.display());
        }
    }
    Ok(())
}

/// Write a template descriptor to `targets/<name>.target.toml`.
pub fn add(project_dir: &Path, name: &str) -> Result<()> {
    let targets_dir = project_dir.join("targets");
    std::fs::create_dir_all(&targets_dir).context("creating targets/ directory")?;

    let path = targets_dir.join(format!("{name}.target.toml"));
    if path.exists() {
        bail!("descriptor '{}' already exists", path.display());
    }

    let template = generate_template()?;
    std::fs::write(&path, template).with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    println!("Edit the platform/toolchain/build-type fields, then run:");
    println!("  lualink resolve --target {name}");
    Ok(())
}

/// Load and validate `targets/<name>.target.toml`.
pub fn validate(project_dir: &Path, name: &str) -> Result<()> {
    let path = project_dir
        .join("targets")
        .join(format!("{name}.target.toml"));
    let descriptor =
        load_descriptor_toml(&path).with_context(|| format!("loading descriptor '{name}'"))?;

    match validate_descriptor(&descriptor) {
        Ok(()) => {
            println!("'{name}' is valid: {descriptor:?}");
            Ok(())
        }
        Err(issues) => {
            for issue in &issues {
                println!("{}: {}", issue.severity, issue.message);
            }
            if issues.iter().any(|i| i.severity == "error") {
                bail!("descriptor '{name}' failed validation");
            }
            println!("'{name}' is usable (warnings only).");
            Ok(())
        }
    }
}

fn platform_notes() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ios", "one static archive"),
        ("android", "3 ABI archives from 4.24; search paths + bare name before"),
        ("win32", "one import library, toolchain 5.0+ only"),
        ("win64", "one import library"),
        ("mac", "one static archive"),
        ("linux", "one static archive"),
        ("other", "no library mapping (empty contribution)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_validate() {
        let dir = tempfile::tempdir().unwrap();
        add(dir.path(), "win64-game").unwrap();
        validate(dir.path(), "win64-game").unwrap();
    }

    #[test]
    fn add_refuses_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        add(dir.path(), "dup").unwrap();
        assert!(add(dir.path(), "dup").is_err());
    }

    #[test]
    fn validate_missing_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate(dir.path(), "ghost").is_err());
    }

    #[test]
    fn validate_passes_warning_only_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let targets = dir.path().join("targets");
        std::fs::create_dir_all(&targets).unwrap();
        std::fs::write(
            targets.join("old-win32.target.toml"),
            "platform = \"win32\"\ntoolchain = \"4.27\"\nbuild-type = \"game\"\n",
        )
        .unwrap();
        // Warning-level issue (empty contribution), not an error.
        validate(dir.path(), "old-win32").unwrap();
    }

    #[test]
    fn describe_rejects_unknown_platform() {
        assert!(describe(None, "playstation", Some("5.5")).is_err());
    }

    #[test]
    fn describe_known_platform_ok() {
        describe(None, "android", Some("4.23")).unwrap();
        describe(None, "other", None).unwrap();
    }
}
