//! Toolchain version tokens.
//!
//! Wraps the `semver` crate and adds the two-component token form used by
//! host toolchain releases ("4.24", "5.2"). Tokens are ordered, so gate
//! thresholds are plain comparisons against named constructors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// An ordered host-toolchain version token.
///
/// Two-component tokens are normalized to a full semantic version on parse
/// (`"5.2"` becomes `5.2.0`), so comparisons against thresholds behave the
/// same whether or not a patch component was given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolchainVersion(semver::Version);

impl ToolchainVersion {
    /// Construct from major/minor components (patch 0).
    pub fn new(major: u64, minor: u64) -> Self {
        ToolchainVersion(semver::Version::new(major, minor, 0))
    }

    /// Oldest toolchain with the modern definitions API.
    pub fn v4_21() -> Self {
        Self::new(4, 21)
    }

    /// First toolchain linking Android ABIs as explicit archives.
    pub fn v4_24() -> Self {
        Self::new(4, 24)
    }

    /// First toolchain able to express a Win32 target.
    pub fn v5_0() -> Self {
        Self::new(5, 0)
    }

    /// First toolchain with enum-valued unused-include support.
    pub fn v5_2() -> Self {
        Self::new(5, 2)
    }

    /// First toolchain with a selectable include-order policy.
    pub fn v5_4() -> Self {
        Self::new(5, 4)
    }

    /// First toolchain with leveled undefined-identifier warnings and a
    /// forced C++20 standard.
    pub fn v5_5() -> Self {
        Self::new(5, 5)
    }

    /// Major component.
    pub fn major(&self) -> u64 {
        self.0.major
    }

    /// Minor component.
    pub fn minor(&self) -> u64 {
        self.0.minor
    }
}

impl fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.patch == 0 {
            write!(f, "{}.{}", self.0.major, self.0.minor)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for ToolchainVersion {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        // Pad "5" or "5.2" out to a full triple before handing to semver.
        let normalized = match token.chars().filter(|c| *c == '.').count() {
            0 => format!("{token}.0.0"),
            1 => format!("{token}.0"),
            _ => token.to_string(),
        };
        let version = semver::Version::parse(&normalized).map_err(|e| TargetError::Version {
            token: token.to_string(),
            detail: e.to_string(),
        })?;
        Ok(ToolchainVersion(version))
    }
}

impl TryFrom<String> for ToolchainVersion {
    type Error = TargetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ToolchainVersion> for String {
    fn from(v: ToolchainVersion) -> String {
        v.to_string()
    }
}
