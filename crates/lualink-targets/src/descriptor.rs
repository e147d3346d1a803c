//! Target descriptor: the immutable input triple for one resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::toolchain::ToolchainVersion;

/// What kind of output the host build is compiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildType {
    /// The host editor, with editor-only modules available.
    Editor,
    Game,
    Client,
    Server,
}

impl BuildType {
    /// Parse a build-type name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "editor" => Some(BuildType::Editor),
            "game" => Some(BuildType::Game),
            "client" => Some(BuildType::Client),
            "server" => Some(BuildType::Server),
            _ => None,
        }
    }

    /// Lowercase name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            BuildType::Editor => "editor",
            BuildType::Game => "game",
            BuildType::Client => "client",
            BuildType::Server => "server",
        }
    }
}

/// The immutable input triple for one configuration-build invocation.
///
/// Constructed once per compiled target by the orchestrator; every resolver
/// component reads only its slice of this value and no other state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetDescriptor {
    /// Platform the module is being linked for.
    pub platform: Platform,
    /// Host toolchain revision in effect.
    pub toolchain: ToolchainVersion,
    /// Kind of output being compiled.
    pub build_type: BuildType,
}

impl TargetDescriptor {
    /// Construct a descriptor.
    pub fn new(platform: Platform, toolchain: ToolchainVersion, build_type: BuildType) -> Self {
        Self {
            platform,
            toolchain,
            build_type,
        }
    }
}

/// The two filesystem roots the resolver derives paths from.
///
/// Both roots are caller-supplied; the resolver only joins platform-
/// specific suffixes onto them and never touches the filesystem itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginLayout {
    /// Root of the bundled external sources (Lua headers live here).
    pub external_source: PathBuf,
    /// Root of the prebuilt static libraries, one subdirectory per platform.
    pub external_library: PathBuf,
}

impl PluginLayout {
    /// Conventional layout under a plugin directory: `External/` for
    /// sources, `Library/` for prebuilt archives.
    pub fn from_plugin_dir(plugin_dir: &Path) -> Self {
        Self {
            external_source: plugin_dir.join("External"),
            external_library: plugin_dir.join("Library"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_type_parse() {
        assert_eq!(BuildType::parse("Editor"), Some(BuildType::Editor));
        assert_eq!(BuildType::parse("server"), Some(BuildType::Server));
        assert_eq!(BuildType::parse("tool"), None);
    }

    #[test]
    fn layout_from_plugin_dir() {
        let layout = PluginLayout::from_plugin_dir(Path::new("/proj/Plugins/lua"));
        assert_eq!(
            layout.external_source,
            PathBuf::from("/proj/Plugins/lua/External")
        );
        assert_eq!(
            layout.external_library,
            PathBuf::from("/proj/Plugins/lua/Library")
        );
    }

    #[test]
    fn descriptor_is_value_comparable() {
        let a = TargetDescriptor::new(
            Platform::Linux,
            ToolchainVersion::new(5, 3),
            BuildType::Game,
        );
        let b = a.clone();
        assert_eq!(a, b);
    }
}
