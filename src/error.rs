//! Error taxonomy for the engine: input errors and infeasibility abort with a
//! clear message; solver anomalies carry the underlying status. Iteration and
//! time caps are *not* represented here — they are non-fatal quality
//! degradations recorded on [`crate::model::SolutionPlan`] instead.

use std::path::PathBuf;

/// Everything that can go wrong between reading input files and producing a
/// [`crate::model::SolutionPlan`].
#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    /// A required input file is absent or unreadable.
    #[error("could not read {path}: {source}")]
    InputMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table is empty, missing a required column, or contains a
    /// non-numeric value where a number was required.
    #[error("malformed input in {file}: {reason}")]
    InputMalformed { file: PathBuf, reason: String },

    /// Some required cut is longer than every stock option, so no purchasing
    /// plan can ever satisfy it.
    #[error(
        "required cut #{index} ({description:?}, {length} in) exceeds every available stock length"
    )]
    Infeasible {
        index: usize,
        description: String,
        length: f64,
    },

    /// The underlying LP/MILP solver reported infeasible, unbounded, or
    /// errored on a problem the engine believes is feasible, or it could not
    /// find any feasible integer solution within its time budget.
    #[error("solver failure during {stage}: {detail}")]
    SolverFailure { stage: &'static str, detail: String },
}

impl OptimizerError {
    pub(crate) fn malformed(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        OptimizerError::InputMalformed {
            file: file.into(),
            reason: reason.into(),
        }
    }
}
