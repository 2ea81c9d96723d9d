//! Recursive duplication of versioned directories and files.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::BumpError;

/// One recursive copy, source to API-level-substituted destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOperation {
    pub src: String,
    pub dst: String,
}

/// Compute the copy destination by substituting the new API level for the
/// old one in the source path. A trailing slash marks a directory source and
/// is trimmed from the result: `sdkcompat/v251/` becomes `sdkcompat/v252`.
pub fn derive_destination(src: &str, old_api: &str, new_api: &str) -> String {
    src.replace(old_api, new_api)
        .trim_end_matches('/')
        .to_string()
}

/// Duplicate `src` to `dst` with the system `cp -R`, byte-level, no format
/// interpretation. Paths are relative to the workspace root.
pub fn copy_path(workspace: &Path, src: &str, dst: &str) -> Result<(), BumpError> {
    debug!("cp -R {} {}", src, dst);

    let output = Command::new("cp")
        .arg("-R")
        .arg(src)
        .arg(dst)
        .current_dir(workspace)
        .output()
        .map_err(|e| BumpError::CopyFailed {
            src: src.to_string(),
            dst: dst.to_string(),
            reason: format!("Failed to run cp: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BumpError::CopyFailed {
            src: src.to_string(),
            dst: dst.to_string(),
            reason: stderr.trim().to_string(),
        });
    }

    Ok(())
}
