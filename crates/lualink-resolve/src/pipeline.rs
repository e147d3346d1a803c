//! Resolution pipeline: runs all four components over one descriptor and
//! merges their outputs into a single configuration record.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use lualink_targets::descriptor::{PluginLayout, TargetDescriptor};

use crate::definitions::{emit_definitions, DefinitionSet};
use crate::dependencies::{assemble_dependencies, DependencyList};
use crate::error::ResolveError;
use crate::features::{resolve_features, FeatureFlagSet};
use crate::libraries::{resolve_libraries, LinkContribution};

/// The merged build configuration for one compiled target.
///
/// This is the record handed back to the build orchestrator; it owns all
/// component outputs and nothing else refers to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildConfig {
    /// The input triple this configuration was resolved for.
    pub descriptor: TargetDescriptor,
    /// Include search paths, orchestrator order.
    pub include_paths: Vec<PathBuf>,
    /// Static libraries and search paths.
    pub link: LinkContribution,
    /// Public/private dependency module names.
    pub dependencies: DependencyList,
    /// Compiler behavior flags.
    pub features: FeatureFlagSet,
    /// Preprocessor definitions.
    pub definitions: DefinitionSet,
}

/// The include paths every target exposes: the external-source root and
/// the Lua headers beneath it.
fn include_paths(layout: &PluginLayout) -> Vec<PathBuf> {
    vec![
        layout.external_source.clone(),
        layout.external_source.join("lua"),
    ]
}

/// Resolve the full build configuration for one target.
///
/// Each component derives its contribution independently from the shared
/// descriptor; no component sees another's output. The function is pure:
/// identical inputs always produce an identical record, and nothing
/// persists between invocations.
///
/// An unmapped platform resolves to an empty link contribution rather
/// than an error, matching the orchestrator's historical contract. Use
/// [`resolve_strict`] to reject that case instead.
pub fn resolve(descriptor: &TargetDescriptor, layout: &PluginLayout) -> BuildConfig {
    BuildConfig {
        descriptor: descriptor.clone(),
        include_paths: include_paths(layout),
        link: resolve_libraries(descriptor.platform, &descriptor.toolchain, layout),
        dependencies: assemble_dependencies(descriptor.build_type),
        features: resolve_features(&descriptor.toolchain),
        definitions: emit_definitions(&descriptor.toolchain),
    }
}

/// Resolve, but fail on a platform with no library mapping.
///
/// Hardened variant of [`resolve`]: the silent empty contribution is a
/// latent misconfiguration risk, so callers that know they need libraries
/// can opt into an explicit error. Win32 below toolchain 5.0 also lands
/// here, since the row contributes nothing there.
pub fn resolve_strict(
    descriptor: &TargetDescriptor,
    layout: &PluginLayout,
) -> Result<BuildConfig, ResolveError> {
    let config = resolve(descriptor, layout);
    if config.link.is_empty() {
        return Err(ResolveError::UnsupportedPlatform {
            platform: descriptor.platform,
        });
    }
    Ok(config)
}
