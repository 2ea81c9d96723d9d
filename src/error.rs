//! Error types for sdkbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from buildozer invocations.
#[derive(Error, Debug)]
pub enum BuildozerError {
    #[error(
        "buildozer not found. Install with: go install github.com/bazelbuild/buildtools/buildozer@latest"
    )]
    NotInstalled,

    #[error("Failed to spawn buildozer: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("buildozer exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}

/// Errors from the bump pipeline.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error(transparent)]
    Editor(#[from] BuildozerError),

    #[error("Edit of {target} failed: {source}")]
    EditFailed {
        target: String,
        #[source]
        source: BuildozerError,
    },

    #[error("Failed to copy {src} to {dst}: {reason}")]
    CopyFailed {
        src: String,
        dst: String,
        reason: String,
    },

    #[error("Failed to write overrides file {}: {reason}", .path.display())]
    OverridesWriteFailed { path: PathBuf, reason: String },

    #[error(
        "Config setting '{0}' already exists. The workspace looks already migrated; re-running the bump is not supported."
    )]
    TargetAlreadyExists(String),

    #[error("Versioned source path missing: {}. Is {} the workspace root?", .0.display(), .1.display())]
    MissingSourcePath(PathBuf, PathBuf),

    #[error("Aborted by user")]
    Cancelled,
}

/// Errors from platform version parsing.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to parse platform version '{0}': expected YEAR.MINOR, like 2025.2")]
    ParseFailed(String),
}
