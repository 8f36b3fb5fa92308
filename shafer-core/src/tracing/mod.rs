//! Observability for Shafer.
//! `tracing` with an `EnvFilter`, per-crate log levels.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_config, LOG_ENV_VAR};
