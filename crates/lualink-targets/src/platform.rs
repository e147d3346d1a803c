//! Target platform enumeration.
//!
//! The platform is modeled as a closed enum with one resolver branch per
//! variant plus an explicit [`Platform::Other`] catch-all, so that
//! exhaustiveness is checked at build time rather than left to an
//! open-ended chain of string comparisons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A target platform the Lua module can be linked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Ios,
    Android,
    Win32,
    Win64,
    Mac,
    Linux,
    /// Any platform without a static-library mapping. Resolution yields an
    /// empty contribution for this variant rather than an error.
    Other,
}

impl Platform {
    /// All platforms with a non-empty library mapping, in resolver order.
    pub const SUPPORTED: [Platform; 6] = [
        Platform::Ios,
        Platform::Android,
        Platform::Win32,
        Platform::Win64,
        Platform::Mac,
        Platform::Linux,
    ];

    /// Whether the library row for this platform depends on the toolchain
    /// version (Android switched linking strategy, Win32 appeared in 5.0).
    pub fn version_refined(&self) -> bool {
        matches!(self, Platform::Android | Platform::Win32)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Win32 => "win32",
            Platform::Win64 => "win64",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
            Platform::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = String;

    /// Parse a platform name. Unrecognized names map to [`Platform::Other`]
    /// only via the explicit token `"other"`; anything else is an error so
    /// that typos do not silently produce an empty configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "win32" => Ok(Platform::Win32),
            "win64" => Ok(Platform::Win64),
            "mac" | "macos" => Ok(Platform::Mac),
            "linux" => Ok(Platform::Linux),
            "other" => Ok(Platform::Other),
            _ => Err(format!(
                "unknown platform '{s}' (expected one of: ios, android, win32, win64, mac, linux, other)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_platforms() {
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("Win64".parse::<Platform>().unwrap(), Platform::Win64);
        assert_eq!("macos".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!("other".parse::<Platform>().unwrap(), Platform::Other);
    }

    #[test]
    fn parse_unknown_platform_is_error() {
        assert!("playstation".parse::<Platform>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for p in Platform::SUPPORTED {
            assert_eq!(p.to_string().parse::<Platform>().unwrap(), p);
        }
    }

    #[test]
    fn only_android_and_win32_are_version_refined() {
        assert!(Platform::Android.version_refined());
        assert!(Platform::Win32.version_refined());
        assert!(!Platform::Linux.version_refined());
        assert!(!Platform::Other.version_refined());
    }
}
