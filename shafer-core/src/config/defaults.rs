// Single source of truth for all default values.

// --- Mass validation ---
pub const DEFAULT_MASS_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_RENORMALIZE_MAX_DEVIATION: f64 = 0.05;

// --- Fusion ---
pub const DEFAULT_CONFLICT_LOW: f64 = 0.3;
pub const DEFAULT_CONFLICT_MODERATE: f64 = 0.6;
pub const DEFAULT_CONFLICT_HIGH: f64 = 0.8;
pub const DEFAULT_RELIABILITY: f64 = 1.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
