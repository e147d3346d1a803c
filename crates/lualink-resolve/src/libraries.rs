//! Platform static-library resolution.
//!
//! Maps a platform (refined by toolchain version for Android and Win32) to
//! the ordered set of static archives and library search paths needed to
//! link the bundled Lua runtime. Paths are derived purely by joining
//! platform suffixes onto the caller-supplied library root; nothing here
//! touches the filesystem.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use lualink_targets::descriptor::PluginLayout;
use lualink_targets::platform::Platform;
use lualink_targets::toolchain::ToolchainVersion;

/// One static-library link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LibrarySpec {
    /// Full path to the archive, or a bare library name when the target
    /// is resolved through search paths (pre-4.24 Android).
    pub path: PathBuf,
    /// The platform this entry was produced for.
    pub scope: Platform,
}

/// The ordered library contribution for one target.
///
/// Both lists are append-only during resolution and finalized before
/// return. Either may be empty; an unmapped platform yields both empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinkContribution {
    /// Static archives (or bare names) to link, in order.
    pub libraries: Vec<LibrarySpec>,
    /// Directories to search for bare library names, in order.
    pub search_paths: Vec<PathBuf>,
}

impl LinkContribution {
    /// True when the platform contributed nothing at all.
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty() && self.search_paths.is_empty()
    }

    fn archive(&mut self, platform: Platform, layout: &PluginLayout, suffix: &str) {
        self.libraries.push(LibrarySpec {
            path: layout.external_library.join(suffix),
            scope: platform,
        });
    }

    fn named(&mut self, platform: Platform, name: &str) {
        self.libraries.push(LibrarySpec {
            path: PathBuf::from(name),
            scope: platform,
        });
    }

    fn search_path(&mut self, layout: &PluginLayout, suffix: &str) {
        self.search_paths.push(layout.external_library.join(suffix));
    }
}

/// Resolve the library contribution for one platform.
///
/// The version refines only two rows:
/// - Android switched from search-path linking to per-ABI archives in
///   4.24; both strategies are kept as mutually exclusive branches.
/// - Win32 only exists as a target from 5.0 on; below that the row
///   contributes nothing.
///
/// [`Platform::Other`] contributes an empty list by design, not an error;
/// see [`crate::pipeline::resolve_strict`] for the hardened variant.
pub fn resolve_libraries(
    platform: Platform,
    toolchain: &ToolchainVersion,
    layout: &PluginLayout,
) -> LinkContribution {
    let mut out = LinkContribution::default();
    match platform {
        Platform::Ios => {
            out.archive(platform, layout, "iOS/liblua.a");
        }
        Platform::Android => {
            if *toolchain >= ToolchainVersion::v4_24() {
                out.archive(platform, layout, "Android/armeabi-v7a/liblua.a");
                out.archive(platform, layout, "Android/armeabi-arm64/liblua.a");
                out.archive(platform, layout, "Android/x86/liblua.a");
            } else {
                out.search_path(layout, "Android/armeabi-arm64");
                out.search_path(layout, "Android/armeabi-v7a");
                out.search_path(layout, "Android/x86");
                out.named(platform, "lua");
            }
        }
        Platform::Win32 => {
            // Not expressible before 5.0; older toolchains get no row.
            if *toolchain >= ToolchainVersion::v5_0() {
                out.archive(platform, layout, "Win32/lua.lib");
            }
        }
        Platform::Win64 => {
            out.archive(platform, layout, "Win64/lua.lib");
        }
        Platform::Mac => {
            out.archive(platform, layout, "Mac/liblua.a");
        }
        Platform::Linux => {
            out.archive(platform, layout, "Linux/liblua.a");
        }
        Platform::Other => {}
    }
    out
}
