//! Configuration system for Shafer.
//! TOML-based, layered resolution: env > file > compiled defaults.

pub mod defaults;
pub mod fusion_config;
pub mod mass_config;
pub mod observability_config;
pub mod shafer_config;

pub use fusion_config::{ConflictThresholds, FusionConfig};
pub use mass_config::{MassConfig, NormalizationPolicy};
pub use observability_config::ObservabilityConfig;
pub use shafer_config::ShaferConfig;
