//! Dependency module assembly.
//!
//! Maps the build-target type to the host-engine modules the Lua module
//! depends on. The private list always carries the six base engine
//! modules; editor builds additionally pull in the editor module. The
//! public list is reserved and stays empty; callers must treat that as
//! normal, not as a missing contribution.

use serde::{Deserialize, Serialize};

use lualink_targets::descriptor::BuildType;

/// The six engine modules every build type links privately.
pub const BASE_ENGINE_MODULES: [&str; 6] =
    ["Core", "CoreUObject", "Engine", "Slate", "SlateCore", "UMG"];

/// Editor-only module, added for [`BuildType::Editor`].
pub const EDITOR_MODULE: &str = "UnrealEd";

/// Public and private dependency module names, in link order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DependencyList {
    /// Modules whose interface is re-exported. Reserved; always empty.
    pub public: Vec<String>,
    /// Modules linked privately.
    pub private: Vec<String>,
}

/// Assemble the dependency lists for one build type.
///
/// The editor module precedes the base modules, matching the order the
/// host registers them in.
pub fn assemble_dependencies(build_type: BuildType) -> DependencyList {
    let mut list = DependencyList::default();
    if build_type == BuildType::Editor {
        list.private.push(EDITOR_MODULE.to_string());
    }
    list.private
        .extend(BASE_ENGINE_MODULES.iter().map(|m| m.to_string()));
    list
}
