//! Sequential left-to-right fusion with a per-step trace.

use shafer_core::errors::FusionError;
use shafer_core::MassFunction;

use crate::combination::combine;

/// Result of fusing an ordered list of sources.
///
/// `intermediates[k]` is the belief after fusing the first `k + 1` sources and
/// `conflicts[k - 1]` is the K of the step that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FusionTrace {
    /// Final combined function; `None` when there were no sources.
    pub combined: Option<MassFunction>,
    /// One conflict scalar per pairwise step (sources − 1 of them).
    pub conflicts: Vec<f64>,
    /// Running combination after each step, starting with the first source.
    pub intermediates: Vec<MassFunction>,
}

impl FusionTrace {
    /// Number of pairwise combinations performed.
    pub fn steps(&self) -> usize {
        self.conflicts.len()
    }

    /// Largest conflict seen at any step.
    pub fn max_conflict(&self) -> Option<f64> {
        self.conflicts.iter().copied().reduce(f64::max)
    }

    /// Conflict of the last step.
    pub fn final_conflict(&self) -> Option<f64> {
        self.conflicts.last().copied()
    }
}

/// Fuse `sources` pairwise from left to right.
///
/// - no sources: empty trace, `combined` is `None`;
/// - one source: that source, unchanged, with no conflicts;
/// - otherwise each step folds the next source into the running result.
///
/// Stops at the first total conflict and reports the step (the index of the
/// source being folded in). Later sources are not looked at.
pub fn fuse(sources: &[MassFunction]) -> Result<FusionTrace, FusionError> {
    let Some((first, rest)) = sources.split_first() else {
        return Ok(FusionTrace::default());
    };

    let mut conflicts = Vec::with_capacity(rest.len());
    let mut intermediates = Vec::with_capacity(sources.len());
    intermediates.push(first.clone());

    let mut current = first.clone();
    for (i, source) in rest.iter().enumerate() {
        let step = i + 1;
        let result = combine(&current, source).map_err(|e| match e {
            FusionError::TotalConflict { conflict } => {
                FusionError::TotalConflictAtStep { step, conflict }
            }
            other => other,
        })?;
        conflicts.push(result.conflict);
        intermediates.push(result.combined.clone());
        current = result.combined;
    }

    Ok(FusionTrace {
        combined: Some(current),
        conflicts,
        intermediates,
    })
}
