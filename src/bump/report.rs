//! Per-step run reporting.

use crate::error::BumpError;

/// What happened to one pipeline step.
#[derive(Debug)]
pub enum StepOutcome {
    Applied,
    /// Printed but not executed (`--dry-run`).
    DryRun,
    Failed(BumpError),
}

/// One step of the run, in execution order.
#[derive(Debug)]
pub struct StepRecord {
    pub description: String,
    pub outcome: StepOutcome,
}

/// Ordered record of everything a run did before finishing or aborting.
///
/// On failure the report carries every step applied before the abort, so the
/// operator can see how far the migration got. The corpus is not rolled back.
#[derive(Debug, Default)]
pub struct RunReport {
    pub steps: Vec<StepRecord>,
}

impl RunReport {
    pub fn record(&mut self, description: impl Into<String>, outcome: StepOutcome) {
        self.steps.push(StepRecord {
            description: description.into(),
            outcome,
        });
    }

    /// Number of steps actually applied to the corpus.
    pub fn applied_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Applied))
            .count()
    }

    /// The failing step, if the run aborted.
    pub fn failure(&self) -> Option<&StepRecord> {
        self.steps
            .iter()
            .find(|s| matches!(s.outcome, StepOutcome::Failed(_)))
    }
}
