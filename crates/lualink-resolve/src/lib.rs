//! Build-configuration resolution for the Lua scripting module.
//!
//! Maps one immutable [`TargetDescriptor`] to the concrete settings the
//! host build orchestrator needs to compile and link the module: static
//! libraries, include paths, compiler behavior flags, dependency module
//! names, and preprocessor definitions.
//!
//! [`TargetDescriptor`]: lualink_targets::descriptor::TargetDescriptor
//!
//! Four components contribute, each a pure table lookup over the shared
//! descriptor, with no dependence on each other's output:
//! - [`libraries`] — platform (refined by version for Android/Win32) to
//!   link targets and search paths
//! - [`features`] — toolchain version to compiler behavior flags
//! - [`dependencies`] — build type to dependency module lists
//! - [`definitions`] — toolchain version to preprocessor definitions
//!
//! [`pipeline::resolve`] runs all four and merges their outputs into one
//! [`pipeline::BuildConfig`]. Resolution is deterministic and idempotent:
//! the same descriptor always yields the same configuration.

pub mod definitions;
pub mod dependencies;
pub mod error;
pub mod features;
pub mod libraries;
pub mod pipeline;
pub mod report;
