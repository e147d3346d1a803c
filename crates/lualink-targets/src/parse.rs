//! TOML parsing, serialization, validation, and discovery for target
//! descriptors.
//!
//! Descriptors are stored as `.target.toml` files in the `targets/`
//! directory of a project. This module provides functions to load,
//! validate, serialize, and discover these files.

use std::path::{Path, PathBuf};

use crate::descriptor::{BuildType, TargetDescriptor};
use crate::error::{Result, TargetError};
use crate::platform::Platform;
use crate::toolchain::ToolchainVersion;

/// A validation issue found in a target descriptor.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Load a descriptor from a `.target.toml` file.
pub fn load_descriptor_toml(path: &Path) -> Result<TargetDescriptor> {
    if !path.exists() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_descriptor_toml(&content)
}

/// Parse a descriptor from a TOML string.
pub fn parse_descriptor_toml(toml_str: &str) -> Result<TargetDescriptor> {
    let descriptor: TargetDescriptor = toml::from_str(toml_str)?;
    Ok(descriptor)
}

/// Serialize a descriptor to pretty TOML.
pub fn descriptor_to_toml(descriptor: &TargetDescriptor) -> Result<String> {
    let toml_str = toml::to_string_pretty(descriptor)?;
    Ok(toml_str)
}

/// Validate a descriptor for configurations that resolve to nothing.
///
/// Returns `Ok(())` if clean, or `Err(issues)` with a list of problems.
/// Warnings flag inputs that are accepted but produce an empty library
/// contribution; the resolver itself never rejects them.
pub fn validate_descriptor(
    descriptor: &TargetDescriptor,
) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if descriptor.toolchain.major() < 4 {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!(
                "toolchain {} predates the supported configuration API (oldest known tier is 4.x)",
                descriptor.toolchain
            ),
        });
    }

    if descriptor.platform == Platform::Other {
        issues.push(ValidationIssue {
            severity: "warning",
            message: "platform 'other' has no library mapping; the link contribution will be empty"
                .into(),
        });
    }

    if descriptor.platform == Platform::Win32 && descriptor.toolchain < ToolchainVersion::v5_0() {
        issues.push(ValidationIssue {
            severity: "warning",
            message: format!(
                "win32 is not expressible before toolchain 5.0 (got {}); the link contribution will be empty",
                descriptor.toolchain
            ),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Generate a template `.target.toml` for a new target.
///
/// Seeds a Win64 game target on the newest known toolchain tier.
pub fn generate_template() -> Result<String> {
    let descriptor = TargetDescriptor::new(
        Platform::Win64,
        ToolchainVersion::v5_5(),
        BuildType::Game,
    );
    descriptor_to_toml(&descriptor)
}

/// Discover all `.target.toml` files in a project's `targets/` directory.
///
/// Returns a list of (target_name, file_path) pairs sorted by name.
pub fn discover_targets(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let targets_dir = project_dir.join("targets");
    if !targets_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut targets = Vec::new();
    let entries = std::fs::read_dir(&targets_dir)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.ends_with(".target.toml") {
                let name = file_name.strip_suffix(".target.toml").unwrap().to_string();
                targets.push((name, path));
            }
        }
    }
    targets.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_descriptor() -> TargetDescriptor {
        TargetDescriptor::new(
            Platform::Linux,
            ToolchainVersion::new(5, 3),
            BuildType::Editor,
        )
    }

    #[test]
    fn round_trip_descriptor() {
        let original = editor_descriptor();
        let toml_str = descriptor_to_toml(&original).unwrap();
        let parsed = parse_descriptor_toml(&toml_str).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
platform = "android"
toolchain = "4.22"
build-type = "game"
"#;
        let descriptor = parse_descriptor_toml(toml_str).unwrap();
        assert_eq!(descriptor.platform, Platform::Android);
        assert_eq!(descriptor.toolchain, ToolchainVersion::new(4, 22));
        assert_eq!(descriptor.build_type, BuildType::Game);
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(parse_descriptor_toml("this is not valid toml [[[").is_err());
    }

    #[test]
    fn parse_bad_version_returns_error() {
        let toml_str = r#"
platform = "linux"
toolchain = "five-point-two"
build-type = "game"
"#;
        assert!(parse_descriptor_toml(toml_str).is_err());
    }

    #[test]
    fn parse_missing_field_returns_error() {
        assert!(parse_descriptor_toml("platform = \"linux\"").is_err());
    }

    #[test]
    fn validate_clean_descriptor() {
        assert!(validate_descriptor(&editor_descriptor()).is_ok());
    }

    #[test]
    fn validate_other_platform_warns() {
        let mut d = editor_descriptor();
        d.platform = Platform::Other;
        let issues = validate_descriptor(&d).unwrap_err();
        assert!(issues.iter().any(|i| i.severity == "warning"));
        assert!(issues.iter().any(|i| i.message.contains("no library mapping")));
    }

    #[test]
    fn validate_win32_on_old_toolchain_warns() {
        let d = TargetDescriptor::new(
            Platform::Win32,
            ToolchainVersion::new(4, 27),
            BuildType::Game,
        );
        let issues = validate_descriptor(&d).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("win32")));
    }

    #[test]
    fn validate_ancient_toolchain_errors() {
        let mut d = editor_descriptor();
        d.toolchain = ToolchainVersion::new(3, 9);
        let issues = validate_descriptor(&d).unwrap_err();
        assert!(issues.iter().any(|i| i.severity == "error"));
    }

    #[test]
    fn generate_template_is_valid() {
        let toml_str = generate_template().unwrap();
        let descriptor = parse_descriptor_toml(&toml_str).unwrap();
        assert!(validate_descriptor(&descriptor).is_ok());
    }

    #[test]
    fn discover_targets_finds_files() {
        let dir = tempfile::tempdir().unwrap();
        let targets_dir = dir.path().join("targets");
        std::fs::create_dir_all(&targets_dir).unwrap();

        let template = generate_template().unwrap();
        std::fs::write(targets_dir.join("win64-game.target.toml"), &template).unwrap();
        std::fs::write(targets_dir.join("android-game.target.toml"), &template).unwrap();
        // Non-.target.toml file should be ignored
        std::fs::write(targets_dir.join("notes.txt"), "ignore me").unwrap();

        let targets = discover_targets(dir.path()).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].0, "android-game");
        assert_eq!(targets[1].0, "win64-game");
    }

    #[test]
    fn discover_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let targets = discover_targets(dir.path()).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn load_not_found() {
        let result = load_descriptor_toml(Path::new("/nonexistent/path.target.toml"));
        assert!(matches!(result.unwrap_err(), TargetError::NotFound { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.target.toml");
        std::fs::write(&path, generate_template().unwrap()).unwrap();

        let descriptor = load_descriptor_toml(&path).unwrap();
        assert_eq!(descriptor.platform, Platform::Win64);
    }
}
