//! Preflight checks before the corpus is mutated.
//!
//! The migration is one-shot and not idempotent, so everything that can be
//! verified without touching the corpus is verified up front.

use std::path::Path;

use crate::buildozer::{BuildEditor, check_buildozer_installed};
use crate::edit::config_setting::PLATFORM_PACKAGE;
use crate::error::{BuildozerError, BumpError};
use crate::plan::VersionBumpPlan;

use super::sequence;

/// Run all preflight checks.
///
/// Checks (in order):
/// 1. buildozer is installed
/// 2. every versioned source path the copies read from exists
/// 3. the new base config setting does not already exist
pub fn run_checks(
    workspace: &Path,
    plan: &VersionBumpPlan,
    editor: &dyn BuildEditor,
) -> Result<(), BumpError> {
    check_buildozer_installed()?;

    for op in sequence::copy_operations(plan) {
        let src = workspace.join(op.src.trim_end_matches('/'));
        if !src.exists() {
            return Err(BumpError::MissingSourcePath(src, workspace.to_path_buf()));
        }
    }

    // `print name` on a missing rule exits non-zero, so success here means
    // the new setting is already in place and the corpus is already migrated.
    let new_setting = format!("intellij-{}", plan.new_version);
    let probe_target = format!("{}:{}", PLATFORM_PACKAGE, new_setting);
    match editor.run("print name", &probe_target) {
        Ok(_) => Err(BumpError::TargetAlreadyExists(new_setting)),
        Err(BuildozerError::NonZeroExit { .. }) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
