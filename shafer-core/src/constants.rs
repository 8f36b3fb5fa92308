/// Shafer system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest frame accepted. The power set has `2^n - 1` members, so this also
/// bounds the widest pairwise combination.
pub const MAX_FRAME_SIZE: usize = 16;

/// Separator between labels in a canonical subset key (`"A,B"`).
pub const KEY_SEPARATOR: char = ',';

/// Display symbol for the empty subset.
pub const EMPTY_SET_SYMBOL: &str = "∅";

/// Combination treats `1 - K` at or below this as a zero divisor.
pub const TOTAL_CONFLICT_EPSILON: f64 = 1e-12;

/// Reliabilities below this are reported as discounting the source.
pub const FULL_TRUST_THRESHOLD: f64 = 0.999;
