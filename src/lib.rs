//! sdkbump - A CLI tool that bumps IDE platform SDK versions across Bazel build files.
//!
//! # Overview
//!
//! sdkbump introduces a new platform version's configuration alongside the
//! existing ones: it drives the external `buildozer` editor to create the new
//! versioned config settings and extend the per-ecosystem select mappings,
//! then duplicates the versioned SDK-compatibility directories and build
//! definition files under the new API level.

pub mod buildozer;
pub mod bump;
pub mod edit;
pub mod error;
pub mod plan;

// Re-export commonly used types
pub use buildozer::BuildEditor;
pub use bump::{BumpConfig, RunReport, StepOutcome};
pub use error::{BuildozerError, BumpError, VersionError};
pub use plan::{ProductVersion, VersionBumpPlan};
