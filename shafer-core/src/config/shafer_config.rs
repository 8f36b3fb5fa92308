//! Top-level Shafer configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FusionConfig, MassConfig, NormalizationPolicy, ObservabilityConfig};
use crate::errors::ConfigError;

/// Environment variables read by [`ShaferConfig::apply_env_overrides`].
pub const ENV_MASS_TOLERANCE: &str = "SHAFER_MASS_TOLERANCE";
pub const ENV_MASS_NORMALIZATION: &str = "SHAFER_MASS_NORMALIZATION";
pub const ENV_LOG_LEVEL: &str = "SHAFER_LOG_LEVEL";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SHAFER_*`)
/// 2. TOML config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShaferConfig {
    pub mass: MassConfig,
    pub fusion: FusionConfig,
    pub observability: ObservabilityConfig,
}

impl ShaferConfig {
    /// Load configuration: defaults, then `path` if given, then the process
    /// environment. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML string. Missing sections and keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `SHAFER_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply `SHAFER_*` overrides from an arbitrary lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MASS_TOLERANCE) {
            self.mass.tolerance = value.trim().parse().map_err(|_| ConfigError::BadEnvOverride {
                var: ENV_MASS_TOLERANCE.to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_MASS_NORMALIZATION) {
            self.mass.normalization =
                NormalizationPolicy::parse(&value).ok_or_else(|| ConfigError::BadEnvOverride {
                    var: ENV_MASS_NORMALIZATION.to_string(),
                    value: value.clone(),
                })?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = value.trim().to_ascii_lowercase();
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.mass.tolerance;
        if !(tolerance.is_finite() && tolerance > 0.0 && tolerance < 1.0) {
            return Err(invalid("mass.tolerance", "must be in (0.0, 1.0)"));
        }
        let deviation = self.mass.renormalize_max_deviation;
        if !(deviation.is_finite() && deviation >= tolerance && deviation < 1.0) {
            return Err(invalid(
                "mass.renormalize_max_deviation",
                "must be in [mass.tolerance, 1.0)",
            ));
        }

        let r = self.fusion.default_reliability;
        if !(0.0..=1.0).contains(&r) {
            return Err(invalid("fusion.default_reliability", "must be between 0.0 and 1.0"));
        }

        let t = &self.fusion.conflict_thresholds;
        if !(0.0 < t.low && t.low <= t.moderate && t.moderate <= t.high && t.high <= 1.0) {
            return Err(invalid(
                "fusion.conflict_thresholds",
                "must satisfy 0 < low <= moderate <= high <= 1",
            ));
        }

        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(invalid(
                "observability.log_level",
                "must be one of trace, debug, info, warn, error",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
