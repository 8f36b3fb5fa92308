//! Configuration errors.

/// Errors raised while loading or validating a [`crate::ShaferConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not readable: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("bad value {value:?} in environment variable {var}")]
    BadEnvOverride { var: String, value: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
