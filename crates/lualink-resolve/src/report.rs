//! Human-readable rendering of a resolved configuration.

use std::fmt;

use crate::features::{UndefinedIdentifierPolicy, UnusedIncludePolicy};
use crate::pipeline::BuildConfig;

/// Display adapter over a resolved [`BuildConfig`].
#[derive(Debug)]
pub struct ConfigReport<'a> {
    config: &'a BuildConfig,
}

impl BuildConfig {
    /// Borrow this configuration as a printable report.
    pub fn report(&self) -> ConfigReport<'_> {
        ConfigReport { config: self }
    }
}

impl fmt::Display for ConfigReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;

        writeln!(f, "=== Build Configuration ===")?;
        writeln!(
            f,
            "Target: {} / toolchain {} / {}",
            c.descriptor.platform,
            c.descriptor.toolchain,
            c.descriptor.build_type.name(),
        )?;
        writeln!(f)?;

        writeln!(f, "--- Include paths ---")?;
        for path in &c.include_paths {
            writeln!(f, "  {}", path.display())?;
        }

        writeln!(f)?;
        writeln!(f, "--- Link ---")?;
        if c.link.is_empty() {
            writeln!(f, "  (no library mapping for this platform/version)")?;
        }
        for lib in &c.link.libraries {
            writeln!(f, "  lib:  {}", lib.path.display())?;
        }
        for path in &c.link.search_paths {
            writeln!(f, "  path: {}", path.display())?;
        }

        writeln!(f)?;
        writeln!(f, "--- Dependencies ---")?;
        writeln!(f, "  Public:  {}", join_or_none(&c.dependencies.public))?;
        writeln!(f, "  Private: {}", join_or_none(&c.dependencies.private))?;

        writeln!(f)?;
        writeln!(f, "--- Compiler features ---")?;
        writeln!(f, "  PCH mode:    {:?}", c.features.pch_mode)?;
        writeln!(f, "  Exceptions:  {}", c.features.exceptions_enabled)?;
        match c.features.unused_includes {
            UnusedIncludePolicy::Support(mode) => {
                writeln!(f, "  Unused includes: support = {mode:?}")?
            }
            UnusedIncludePolicy::Enforce(on) => {
                writeln!(f, "  Unused includes: enforce = {on}")?
            }
        }
        match c.features.undefined_identifiers {
            UndefinedIdentifierPolicy::Level(level) => {
                writeln!(f, "  Undefined identifiers: level = {level:?}")?
            }
            UndefinedIdentifierPolicy::Enable(on) => {
                writeln!(f, "  Undefined identifiers: warn = {on}")?
            }
        }
        match c.features.include_order {
            Some(settings) => writeln!(
                f,
                "  Include order: {:?} (strict conformance: {})",
                settings.order, settings.strict_conformance,
            )?,
            None => writeln!(f, "  Include order: toolchain default")?,
        }
        match c.features.cpp_standard {
            Some(std) => writeln!(f, "  C++ standard: {std:?}")?,
            None => writeln!(f, "  C++ standard: toolchain default")?,
        }

        writeln!(f)?;
        writeln!(f, "--- Definitions ({:?} API) ---", c.definitions.api)?;
        for def in &c.definitions.definitions {
            writeln!(f, "  {def}")?;
        }

        Ok(())
    }
}

fn join_or_none(modules: &[String]) -> String {
    if modules.is_empty() {
        "(none)".to_string()
    } else {
        modules.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use lualink_targets::descriptor::{BuildType, PluginLayout, TargetDescriptor};
    use lualink_targets::platform::Platform;
    use lualink_targets::toolchain::ToolchainVersion;

    use crate::pipeline::resolve;

    fn config_for(platform: Platform, minor: u64) -> BuildConfig {
        let descriptor = TargetDescriptor::new(
            platform,
            ToolchainVersion::new(5, minor),
            BuildType::Editor,
        );
        let layout = PluginLayout::from_plugin_dir(Path::new("/proj/Plugins/lua"));
        resolve(&descriptor, &layout)
    }

    #[test]
    fn report_names_target_and_sections() {
        let text = config_for(Platform::Linux, 2).report().to_string();
        assert!(text.contains("Target: linux / toolchain 5.2 / editor"));
        assert!(text.contains("--- Link ---"));
        assert!(text.contains("Linux/liblua.a"));
        assert!(text.contains("Private: UnrealEd, Core"));
        assert!(text.contains("NS_SLUA=slua"));
    }

    #[test]
    fn report_marks_empty_link_contribution() {
        let text = config_for(Platform::Other, 5).report().to_string();
        assert!(text.contains("no library mapping"));
        assert!(text.contains("Public:  (none)"));
    }
}
