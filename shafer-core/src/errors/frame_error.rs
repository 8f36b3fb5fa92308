/// Frame of discernment errors. Raised at construction time or when a label
/// set is resolved against a frame.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    #[error("frame must contain at least one hypothesis")]
    EmptyFrame,

    #[error("duplicate hypothesis label: {label}")]
    DuplicateLabel { label: String },

    #[error("invalid hypothesis label {label:?}: {reason}")]
    InvalidLabel { label: String, reason: String },

    #[error("frame too large: {size} hypotheses, max {max}")]
    TooLarge { size: usize, max: usize },

    #[error("unknown hypothesis label: {label}")]
    UnknownLabel { label: String },
}
