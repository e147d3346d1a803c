//! Toolchain-version compiler feature gates.
//!
//! Each gate is an ordered table of (minimum-version, value) tiers,
//! resolved by descending threshold lookup: the first tier whose minimum
//! is at or below the toolchain wins, else the pre-threshold default
//! applies. Gates are independent of each other; adding a toolchain tier
//! is a one-line table entry.
//!
//! Two gates changed representation across toolchain revisions (a boolean
//! flag replaced by an enum). Those are modeled as two-variant enums so
//! exactly one representation is ever populated for a given version.

use serde::{Deserialize, Serialize};

use lualink_targets::toolchain::ToolchainVersion;

/// Precompiled-header usage mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PchMode {
    /// Use an explicit PCH if the module declares one, else the shared one.
    ExplicitOrShared,
}

/// Enum-valued unused-include support level (toolchain 5.2 and later).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IwyuSupport {
    /// Enforcement disabled for this module.
    None,
    /// Full include-what-you-use enforcement.
    Full,
}

/// Unused-include enforcement, in whichever representation the toolchain
/// understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnusedIncludePolicy {
    /// 5.2+: enum-valued support level.
    Support(IwyuSupport),
    /// Pre-5.2: boolean enforcement flag.
    Enforce(bool),
}

/// Leveled warning setting (toolchain 5.5 and later).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningLevel {
    Error,
    Warning,
    Off,
}

/// Undefined-preprocessor-identifier warning policy, in whichever
/// representation the toolchain understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UndefinedIdentifierPolicy {
    /// 5.5+: leveled warning setting.
    Level(WarningLevel),
    /// Pre-5.5: boolean enable flag.
    Enable(bool),
}

/// Header include-order policy (selectable from toolchain 5.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncludeOrder {
    /// Track the newest engine include-order revision.
    Latest,
}

/// Include-order settings that only exist from 5.4 on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IncludeOrderSettings {
    /// Which include-order revision to compile against.
    pub order: IncludeOrder,
    /// Strict MSVC conformance mode on Windows targets.
    pub strict_conformance: bool,
}

/// C++ language standard (forced from toolchain 5.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CppStandard {
    Cpp20,
}

/// The resolved compiler behavior flags for one toolchain version.
///
/// One field per independent gate. `None` means the toolchain default is
/// left in place rather than a value being set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeatureFlagSet {
    /// Precompiled-header mode; constant across all versions.
    pub pch_mode: PchMode,
    /// C++ exceptions; force-enabled for the Lua runtime's error paths.
    pub exceptions_enabled: bool,
    /// Unused-include enforcement (disabled either way; representation
    /// depends on the version).
    pub unused_includes: UnusedIncludePolicy,
    /// Undefined-identifier warnings (disabled either way; representation
    /// depends on the version).
    pub undefined_identifiers: UndefinedIdentifierPolicy,
    /// Include-order policy, set from 5.4 on.
    pub include_order: Option<IncludeOrderSettings>,
    /// Language standard, forced from 5.5 on.
    pub cpp_standard: Option<CppStandard>,
}

/// Pick a gate value by descending threshold lookup.
///
/// `tiers` must be ordered newest-first; the first tier whose minimum
/// version is satisfied wins, otherwise `default` applies.
fn pick<T: Clone>(version: &ToolchainVersion, tiers: &[(ToolchainVersion, T)], default: T) -> T {
    tiers
        .iter()
        .find(|(min, _)| version >= min)
        .map(|(_, value)| value.clone())
        .unwrap_or(default)
}

/// Resolve all feature gates for one toolchain version.
pub fn resolve_features(toolchain: &ToolchainVersion) -> FeatureFlagSet {
    FeatureFlagSet {
        pch_mode: PchMode::ExplicitOrShared,
        exceptions_enabled: true,
        unused_includes: pick(
            toolchain,
            &[(
                ToolchainVersion::v5_2(),
                UnusedIncludePolicy::Support(IwyuSupport::None),
            )],
            UnusedIncludePolicy::Enforce(false),
        ),
        undefined_identifiers: pick(
            toolchain,
            &[(
                ToolchainVersion::v5_5(),
                UndefinedIdentifierPolicy::Level(WarningLevel::Off),
            )],
            UndefinedIdentifierPolicy::Enable(false),
        ),
        include_order: pick(
            toolchain,
            &[(
                ToolchainVersion::v5_4(),
                Some(IncludeOrderSettings {
                    order: IncludeOrder::Latest,
                    strict_conformance: true,
                }),
            )],
            None,
        ),
        cpp_standard: pick(
            toolchain,
            &[(ToolchainVersion::v5_5(), Some(CppStandard::Cpp20))],
            None,
        ),
    }
}
