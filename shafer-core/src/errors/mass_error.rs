/// Raw mass assignments that cannot become a valid mass function.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MassError {
    #[error("negative mass {mass} on {key}")]
    NegativeMass { key: String, mass: f64 },

    #[error("non-finite mass on {key}")]
    NonFiniteMass { key: String },

    #[error("mass {mass} assigned to the empty set")]
    EmptySubsetMass { mass: f64 },

    #[error("subset outside the frame (bits {bits:#b})")]
    SubsetOutsideFrame { bits: u32 },

    #[error("masses sum to {total}, expected 1 within {tolerance}")]
    InvalidTotal { total: f64, tolerance: f64 },

    #[error(transparent)]
    Frame(#[from] super::FrameError),
}
