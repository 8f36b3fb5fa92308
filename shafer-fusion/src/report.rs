//! Fusion reports and their serializable summary.

use serde::{Deserialize, Serialize};

use shafer_core::{Frame, MassFunction, RawMass, Reliability};

use crate::belief::BeliefInterval;
use crate::conflict::ConflictLevel;
use crate::pipeline::FusionTrace;

/// Per-source outcome of validation and discounting.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReport {
    pub name: String,
    pub reliability: Reliability,
    /// True when `reliability` attenuated the source.
    pub discounted: bool,
    /// The validated input, before discounting.
    pub original: MassFunction,
    /// What entered the fusion pipeline.
    pub effective: MassFunction,
}

/// Everything one scenario evaluation produces.
#[derive(Debug, Clone, PartialEq)]
pub struct FusionReport {
    pub scenario_id: String,
    pub frame: Frame,
    pub sources: Vec<SourceReport>,
    pub trace: FusionTrace,
    /// Bel/Pl per hypothesis of the final combined function; empty without sources.
    pub intervals: Vec<BeliefInterval>,
    /// One band per entry of `trace.conflicts`.
    pub conflict_levels: Vec<ConflictLevel>,
}

impl FusionReport {
    pub fn combined(&self) -> Option<&MassFunction> {
        self.trace.combined.as_ref()
    }

    /// Highest band reached at any step.
    pub fn worst_conflict_level(&self) -> Option<ConflictLevel> {
        self.conflict_levels.iter().copied().max()
    }

    /// Label-keyed view suitable for serialization.
    pub fn summary(&self) -> FusionSummary {
        FusionSummary {
            scenario_id: self.scenario_id.clone(),
            frame: self.frame.labels().to_vec(),
            sources: self
                .sources
                .iter()
                .map(|s| SourceSummary {
                    name: s.name.clone(),
                    reliability: s.reliability.value(),
                    discounted: s.discounted,
                    mass: s.effective.to_raw(),
                })
                .collect(),
            combined: self.combined().map(MassFunction::to_raw),
            conflicts: self.trace.conflicts.clone(),
            conflict_levels: self.conflict_levels.clone(),
            intermediates: self
                .trace
                .intermediates
                .iter()
                .map(MassFunction::to_raw)
                .collect(),
            intervals: self.intervals.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub name: String,
    pub reliability: f64,
    pub discounted: bool,
    pub mass: RawMass,
}

/// Serializable form of a [`FusionReport`], subsets rendered as canonical keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionSummary {
    pub scenario_id: String,
    pub frame: Vec<String>,
    pub sources: Vec<SourceSummary>,
    pub combined: Option<RawMass>,
    pub conflicts: Vec<f64>,
    pub conflict_levels: Vec<ConflictLevel>,
    pub intermediates: Vec<RawMass>,
    pub intervals: Vec<BeliefInterval>,
}
