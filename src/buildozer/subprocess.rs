//! buildozer spawning.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::BuildozerError;

use super::BuildEditor;

/// Environment variable to override the buildozer binary.
const BINARY_ENV_VAR: &str = "SDKBUMP_BUILDOZER";

/// Name (or path) of the buildozer binary to invoke.
///
/// Reads from SDKBUMP_BUILDOZER if set, otherwise `buildozer` resolved
/// through PATH.
fn buildozer_binary() -> String {
    match env::var(BINARY_ENV_VAR) {
        Ok(v) if !v.is_empty() => v,
        _ => "buildozer".to_string(),
    }
}

/// Check that buildozer is installed and accessible.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_buildozer_installed() -> Result<(), BuildozerError> {
    if which::which(buildozer_binary()).is_err() {
        return Err(BuildozerError::NotInstalled);
    }
    Ok(())
}

/// The real editor: spawns `buildozer -tables <overrides> <command> <target>`
/// with the workspace root as working directory, so package labels like
/// `//sdkcompat` resolve against the corpus being migrated.
pub struct SystemBuildozer {
    workspace: PathBuf,
    overrides: PathBuf,
}

impl SystemBuildozer {
    pub fn new(workspace: impl Into<PathBuf>, overrides: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            overrides: overrides.into(),
        }
    }
}

impl BuildEditor for SystemBuildozer {
    fn run(&self, command: &str, target: &str) -> Result<Vec<String>, BuildozerError> {
        debug!("buildozer {} {}", command, target);

        let output = Command::new(buildozer_binary())
            .arg("-tables")
            .arg(&self.overrides)
            .arg(command)
            .arg(target)
            .current_dir(&self.workspace)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BuildozerError::NotInstalled
                } else {
                    BuildozerError::SpawnFailed(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            let code = output.status.code().unwrap_or(-1);
            return Err(BuildozerError::NonZeroExit { code, stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        Ok(stdout.split('\n').map(String::from).collect())
    }
}
