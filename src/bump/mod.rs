//! The bump pipeline: preflight, config settings, selection inserts, copies,
//! and the compatibility-layer rename.

pub mod preflight;
pub mod report;
pub mod sequence;

pub use report::{RunReport, StepOutcome, StepRecord};

use std::path::PathBuf;

use crate::buildozer::{BuildEditor, OVERRIDES_FILE_NAME, ensure_overrides_file};
use crate::edit::config_setting::PLATFORM_PACKAGE;
use crate::edit::{add_config_setting, copy_path, insert_into_select, rename_target};
use crate::error::BumpError;
use crate::plan::VersionBumpPlan;

/// Corpus surfaces the run does not cover; printed after a successful run so
/// the operator finishes the migration by hand.
pub const REMAINING_MANUAL_STEPS: &[&str] = &[
    "DIRECT_IJ_PRODUCTS in build_defs/build_defs.bzl",
    "//intellij_platform_sdk:jsr305",
    "//testing:lib",
    "toml integration shims",
    "WORKSPACE.bzlmod repository pins",
];

/// Configuration for one bump run, derived from CLI flags.
pub struct BumpConfig {
    pub workspace: PathBuf,
    pub dry_run: bool,
    pub force: bool,
}

/// Run the full migration sequence.
///
/// Returns `Err` only when the run aborts before mutating anything
/// (preflight). Once edits begin, a failure is recorded in the report, stops
/// the run, and leaves the corpus partially migrated; nothing is rolled back
/// and no later step is attempted.
pub fn run_bump(
    config: &BumpConfig,
    plan: &VersionBumpPlan,
    editor: &dyn BuildEditor,
) -> Result<RunReport, BumpError> {
    if !config.force && !config.dry_run {
        preflight::run_checks(&config.workspace, plan, editor)?;
    }

    let mut report = RunReport::default();

    let overrides_path = config.workspace.join(OVERRIDES_FILE_NAME);
    if !apply_step(
        &mut report,
        format!("ensure {}", OVERRIDES_FILE_NAME),
        config.dry_run,
        || ensure_overrides_file(&overrides_path).map(|_| ()),
    ) {
        return Ok(report);
    }

    for edit in sequence::config_setting_edits(plan) {
        let description = format!("new config_setting {} after {}", edit.name, edit.anchor);
        let ok = apply_step(&mut report, description, config.dry_run, || {
            add_config_setting(editor, &edit).map_err(|e| BumpError::EditFailed {
                target: format!("{}:{}", PLATFORM_PACKAGE, edit.name),
                source: e,
            })
        });
        if !ok {
            return Ok(report);
        }
    }

    for insert in sequence::selection_inserts(plan) {
        let description = format!(
            "insert into {} of {}: {}",
            insert.attribute, insert.target, insert.entry
        );
        let ok = apply_step(&mut report, description, config.dry_run, || {
            insert_into_select(editor, &insert).map_err(|e| BumpError::EditFailed {
                target: insert.target.to_string(),
                source: e,
            })
        });
        if !ok {
            return Ok(report);
        }
    }

    for op in sequence::copy_operations(plan) {
        let description = format!("cp -R {} {}", op.src, op.dst);
        let ok = apply_step(&mut report, description, config.dry_run, || {
            copy_path(&config.workspace, &op.src, &op.dst)
        });
        if !ok {
            return Ok(report);
        }
    }

    let rename = sequence::rename_operation(plan);
    let description = format!(
        "set name {} on {}:{}",
        rename.new_name, rename.package, rename.old_name
    );
    apply_step(&mut report, description, config.dry_run, || {
        rename_target(editor, &rename).map_err(|e| BumpError::EditFailed {
            target: format!("{}:{}", rename.package, rename.old_name),
            source: e,
        })
    });

    Ok(report)
}

/// Run one step, record its outcome, and print a progress line.
///
/// Returns false when the step failed and the run must stop.
fn apply_step(
    report: &mut RunReport,
    description: String,
    dry_run: bool,
    f: impl FnOnce() -> Result<(), BumpError>,
) -> bool {
    if dry_run {
        println!("  [dry] {}", description);
        report.record(description, StepOutcome::DryRun);
        return true;
    }

    match f() {
        Ok(()) => {
            println!("  [ok] {}", description);
            report.record(description, StepOutcome::Applied);
            true
        }
        Err(e) => {
            println!("  [FAIL] {}", description);
            report.record(description, StepOutcome::Failed(e));
            false
        }
    }
}
