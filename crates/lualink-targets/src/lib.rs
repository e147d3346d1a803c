//! Target descriptor model and parsing for the lualink build-configuration
//! resolver.
//!
//! A build target is described by three inputs fixed at configuration time:
//! - **Platform:** which OS/architecture family the module links for
//! - **Toolchain version:** the host build-system revision in effect
//! - **Build type:** what kind of output is being compiled (Editor/Game/...)
//!
//! Descriptors can be constructed directly or loaded from `.target.toml`
//! files in a project's `targets/` directory.

pub mod descriptor;
pub mod error;
pub mod parse;
pub mod platform;
pub mod toolchain;
