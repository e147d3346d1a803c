//! Error types for strict-mode resolution.

use lualink_targets::platform::Platform;

/// Errors surfaced only by the strict resolution variant.
///
/// Default resolution is total: unmapped platforms contribute an empty
/// library list and no error. [`crate::pipeline::resolve_strict`] turns
/// that silence into this error instead.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The platform has no static-library mapping for the Lua module.
    #[error("platform '{platform}' has no library mapping for the Lua module")]
    UnsupportedPlatform {
        /// The platform that resolved to an empty contribution.
        platform: Platform,
    },
}
