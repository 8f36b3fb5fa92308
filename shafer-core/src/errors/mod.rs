//! Error handling for Shafer.
//! One error enum per subsystem, `thiserror` only, aggregated by [`ShaferError`].

pub mod config_error;
pub mod frame_error;
pub mod fusion_error;
pub mod mass_error;

pub use config_error::ConfigError;
pub use frame_error::FrameError;
pub use fusion_error::FusionError;
pub use mass_error::MassError;

/// Top-level error for every Shafer operation.
#[derive(Debug, thiserror::Error)]
pub enum ShaferError {
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("invalid mass: {0}")]
    Mass(#[from] MassError),

    #[error("fusion error: {0}")]
    Fusion(#[from] FusionError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ShaferError {
    /// True when the failure is an irreconcilable conflict between sources,
    /// as opposed to malformed input.
    pub fn is_total_conflict(&self) -> bool {
        matches!(self, Self::Fusion(e) if e.is_total_conflict())
    }
}

/// Convenience alias used throughout the workspace.
pub type ShaferResult<T> = Result<T, ShaferError>;
