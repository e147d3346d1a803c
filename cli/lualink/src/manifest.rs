//! `lualink.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The top-level manifest structure for a lualink project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LualinkManifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Plugin filesystem layout.
    #[serde(default)]
    pub plugin: Option<PluginConfig>,
    /// Resolution defaults applied when flags are omitted.
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required).
    pub name: String,
    /// Project version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Plugin layout section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Plugin directory holding `External/` and `Library/`, relative to
    /// the project directory.
    #[serde(default)]
    pub dir: Option<String>,
}

/// Defaults section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DefaultsConfig {
    /// Default toolchain version token.
    #[serde(default)]
    pub toolchain: Option<String>,
    /// Default build type.
    #[serde(default)]
    pub build_type: Option<String>,
}

impl LualinkManifest {
    /// Search upward from `start_dir` for a `lualink.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("lualink.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: LualinkManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing lualink.toml")
    }

    /// The plugin directory, resolved against the project directory.
    pub fn plugin_dir(&self, project_dir: &Path) -> PathBuf {
        match self.plugin.as_ref().and_then(|p| p.dir.as_deref()) {
            Some(dir) => project_dir.join(dir),
            None => project_dir.to_path_buf(),
        }
    }

    /// Default toolchain token from the manifest.
    pub fn default_toolchain(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.toolchain.as_deref())
    }

    /// Default build-type name from the manifest.
    pub fn default_build_type(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.build_type.as_deref())
    }

    /// Generate the default template for `lualink init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"
version = "0.1.0"

[plugin]
dir = "Plugins/slua"

[defaults]
toolchain = "5.5"
build-type = "game"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[project]
name = "my-game"
version = "1.0.0"
description = "Scripting for my game"

[plugin]
dir = "Plugins/slua"

[defaults]
toolchain = "5.2"
build-type = "editor"
"#;
        let manifest = LualinkManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.project.name, "my-game");
        assert_eq!(manifest.default_toolchain(), Some("5.2"));
        assert_eq!(manifest.default_build_type(), Some("editor"));
        assert_eq!(
            manifest.plugin_dir(Path::new("/proj")),
            PathBuf::from("/proj/Plugins/slua")
        );
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = LualinkManifest::from_str("[project]\nname = \"bare\"\n").unwrap();
        assert_eq!(manifest.project.version, "0.1.0");
        assert_eq!(manifest.default_toolchain(), None);
        assert_eq!(manifest.plugin_dir(Path::new("/proj")), PathBuf::from("/proj"));
    }

    #[test]
    fn template_parses_back() {
        let manifest = LualinkManifest::from_str(&LualinkManifest::template("demo")).unwrap();
        assert_eq!(manifest.project.name, "demo");
        assert_eq!(manifest.default_toolchain(), Some("5.5"));
    }

    #[test]
    fn find_and_load_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("lualink.toml"),
            LualinkManifest::template("walker"),
        )
        .unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_in) = LualinkManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.project.name, "walker");
        assert_eq!(found_in, dir.path());
    }

    #[test]
    fn find_and_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LualinkManifest::find_and_load(dir.path()).unwrap().is_none());
    }
}
