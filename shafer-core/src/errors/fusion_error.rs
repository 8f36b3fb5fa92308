/// Combination and fusion errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FusionError {
    /// Every pair of focal elements is disjoint; Dempster's rule is undefined.
    #[error("total conflict between sources (K = {conflict})")]
    TotalConflict { conflict: f64 },

    /// The pipeline stopped at `step`, folding in the source with that index.
    #[error("total conflict at fusion step {step} (K = {conflict})")]
    TotalConflictAtStep { step: usize, conflict: f64 },

    #[error("mass functions belong to different frames ({left:?} vs {right:?})")]
    FrameMismatch {
        left: Vec<String>,
        right: Vec<String>,
    },

    #[error("expected {expected} reliabilities, got {found}")]
    ReliabilityCountMismatch { expected: usize, found: usize },
}

impl FusionError {
    pub fn is_total_conflict(&self) -> bool {
        matches!(
            self,
            Self::TotalConflict { .. } | Self::TotalConflictAtStep { .. }
        )
    }

    /// The conflict scalar that caused the failure, if any.
    pub fn conflict(&self) -> Option<f64> {
        match self {
            Self::TotalConflict { conflict } | Self::TotalConflictAtStep { conflict, .. } => {
                Some(*conflict)
            }
            _ => None,
        }
    }
}
