//! buildozer integration: the external build-file editor.

pub mod overrides;
pub mod subprocess;

pub use overrides::{OVERRIDES_FILE_NAME, Overrides, ensure_overrides_file};
pub use subprocess::{SystemBuildozer, check_buildozer_installed};

use crate::error::BuildozerError;

/// Trait for issuing buildozer commands.
///
/// This abstraction allows driving the edit sequence against a fake editor
/// in tests without spawning any external process.
#[cfg_attr(test, mockall::automock)]
pub trait BuildEditor {
    /// Run one editor command against a target, returning stdout split into
    /// lines. A non-zero exit or a failure to launch is an error; the caller
    /// treats it as fatal to the whole run.
    fn run(&self, command: &str, target: &str) -> Result<Vec<String>, BuildozerError>;
}
