//! Preprocessor definition emission.
//!
//! The module always exports the same two definitions: the profiler
//! enable marker and the namespace alias. Toolchains from 4.21 on accept
//! them through the modern public-definitions API; older ones only have
//! the legacy list. Which API is used is recorded alongside the entries,
//! but the entries themselves never differ between the two.

use std::fmt;

use serde::{Deserialize, Serialize};

use lualink_targets::toolchain::ToolchainVersion;

/// Which toolchain API the definitions are registered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefinitionApi {
    /// `PublicDefinitions`, available from 4.21.
    Modern,
    /// The pre-4.21 `Definitions` list.
    Legacy,
}

/// One preprocessor definition, with or without a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Definition {
    pub name: String,
    pub value: Option<String>,
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// The emitted definitions plus the API they are routed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DefinitionSet {
    /// API selector; a compatibility shim, never a content difference.
    pub api: DefinitionApi,
    /// The definitions, order-irrelevant.
    pub definitions: Vec<Definition>,
}

/// Emit the module's preprocessor definitions for one toolchain version.
pub fn emit_definitions(toolchain: &ToolchainVersion) -> DefinitionSet {
    let api = if *toolchain >= ToolchainVersion::v4_21() {
        DefinitionApi::Modern
    } else {
        DefinitionApi::Legacy
    };
    DefinitionSet {
        api,
        definitions: vec![
            Definition {
                name: "ENABLE_PROFILER".to_string(),
                value: None,
            },
            Definition {
                name: "NS_SLUA".to_string(),
                value: Some("slua".to_string()),
            },
        ],
    }
}
