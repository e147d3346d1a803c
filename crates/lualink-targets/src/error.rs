//! Error types for target descriptor operations.

use std::path::PathBuf;

/// Errors that can occur while loading or validating target descriptors.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing descriptor files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Descriptor file not found.
    #[error("target descriptor not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Unparseable toolchain version token.
    #[error("invalid toolchain version '{token}': {detail}")]
    Version {
        /// The token as given.
        token: String,
        /// Description of the parse failure.
        detail: String,
    },

    /// Validation error in a descriptor.
    #[error("validation error: {detail}")]
    Validation {
        /// Description of the validation failure.
        detail: String,
    },
}

/// Result type for target descriptor operations.
pub type Result<T> = std::result::Result<T, TargetError>;
