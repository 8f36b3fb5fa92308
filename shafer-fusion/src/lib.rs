//! # shafer-fusion
//!
//! Dempster-Shafer evidence fusion over the types of `shafer-core`:
//! pairwise combination, reliability discounting, sequential fusion with a
//! conflict trace, belief/plausibility intervals, and the [`FusionEngine`]
//! that runs a whole scenario end to end.

pub mod belief;
pub mod combination;
pub mod conflict;
pub mod discount;
pub mod engine;
pub mod pipeline;
pub mod report;
pub mod scenario;

pub use belief::{belief, belief_plausibility, plausibility, BeliefInterval};
pub use combination::{combine, Combination};
pub use conflict::ConflictLevel;
pub use discount::discount;
pub use engine::FusionEngine;
pub use pipeline::{fuse, FusionTrace};
pub use report::{FusionReport, FusionSummary, SourceReport, SourceSummary};
pub use scenario::{EvidenceSource, Scenario};
