use tracing::{debug, info, instrument, warn};

use shafer_core::config::{FusionConfig, MassConfig};
use shafer_core::errors::{FusionError, ShaferError, ShaferResult};
use shafer_core::{MassFunction, Reliability, ShaferConfig};

use crate::belief::belief_plausibility;
use crate::conflict::ConflictLevel;
use crate::discount::discount;
use crate::pipeline;
use crate::report::{FusionReport, SourceReport};
use crate::scenario::Scenario;

/// Runs a scenario end to end: validate each source, discount it by its
/// reliability, fuse left to right, and evaluate Bel/Pl on the result.
///
/// Holds configuration only. Every evaluation is a complete, independent
/// run, so re-evaluating after a reliability change is just another call.
#[derive(Debug, Clone, Default)]
pub struct FusionEngine {
    mass: MassConfig,
    fusion: FusionConfig,
}

impl FusionEngine {
    pub fn new(config: &ShaferConfig) -> Self {
        Self {
            mass: config.mass.clone(),
            fusion: config.fusion.clone(),
        }
    }

    pub fn mass_config(&self) -> &MassConfig {
        &self.mass
    }

    pub fn fusion_config(&self) -> &FusionConfig {
        &self.fusion
    }

    /// Validate every source of `scenario` against its frame, in order.
    /// The first invalid source aborts the run.
    pub fn validate_sources(&self, scenario: &Scenario) -> ShaferResult<Vec<MassFunction>> {
        scenario
            .sources
            .iter()
            .map(|source| {
                MassFunction::from_raw(&scenario.frame, &source.mass, &self.mass).map_err(|e| {
                    warn!(source = %source.name, error = %e, "rejecting source");
                    ShaferError::from(e)
                })
            })
            .collect()
    }

    /// Each source's stated reliability, or the configured default.
    pub fn reliabilities(&self, scenario: &Scenario) -> Vec<Reliability> {
        scenario
            .sources
            .iter()
            .map(|s| s.reliability_or(self.fusion.default_reliability))
            .collect()
    }

    /// Evaluate with the reliabilities stated by the scenario.
    pub fn evaluate(&self, scenario: &Scenario) -> ShaferResult<FusionReport> {
        let reliabilities = self.reliabilities(scenario);
        self.run(scenario, &reliabilities)
    }

    /// Evaluate with caller-supplied reliabilities, one per source.
    pub fn evaluate_with_reliabilities(
        &self,
        scenario: &Scenario,
        reliabilities: &[f64],
    ) -> ShaferResult<FusionReport> {
        if reliabilities.len() != scenario.sources.len() {
            return Err(FusionError::ReliabilityCountMismatch {
                expected: scenario.sources.len(),
                found: reliabilities.len(),
            }
            .into());
        }
        let reliabilities: Vec<Reliability> =
            reliabilities.iter().copied().map(Reliability::new).collect();
        self.run(scenario, &reliabilities)
    }

    /// Band for a single conflict scalar under this engine's thresholds.
    pub fn classify(&self, conflict: f64) -> ConflictLevel {
        ConflictLevel::classify(conflict, &self.fusion.conflict_thresholds)
    }

    #[instrument(skip_all, fields(scenario = %scenario.id, sources = scenario.sources.len()))]
    fn run(&self, scenario: &Scenario, reliabilities: &[Reliability]) -> ShaferResult<FusionReport> {
        let originals = self.validate_sources(scenario)?;

        let sources: Vec<SourceReport> = scenario
            .sources
            .iter()
            .zip(originals)
            .zip(reliabilities.iter().copied())
            .map(|((source, original), reliability)| {
                let effective = discount(&original, reliability);
                SourceReport {
                    name: source.name.clone(),
                    reliability,
                    discounted: reliability.is_discounting(),
                    original,
                    effective,
                }
            })
            .collect();

        let effective: Vec<MassFunction> = sources.iter().map(|s| s.effective.clone()).collect();
        let trace = pipeline::fuse(&effective).map_err(|e| {
            warn!(error = %e, "fusion aborted");
            e
        })?;

        let conflict_levels: Vec<ConflictLevel> =
            trace.conflicts.iter().map(|&k| self.classify(k)).collect();
        for (i, (&k, level)) in trace.conflicts.iter().zip(&conflict_levels).enumerate() {
            debug!(step = i + 1, conflict = k, level = %level, "combined source");
            if *level >= ConflictLevel::High {
                warn!(step = i + 1, conflict = k, "high conflict between sources");
            }
        }

        let intervals = trace
            .combined
            .as_ref()
            .map(|m| belief_plausibility(m, &scenario.frame))
            .unwrap_or_default();

        info!(
            steps = trace.steps(),
            max_conflict = trace.max_conflict().unwrap_or(0.0),
            "fusion complete"
        );

        Ok(FusionReport {
            scenario_id: scenario.id.clone(),
            frame: scenario.frame.clone(),
            sources,
            trace,
            intervals,
            conflict_levels,
        })
    }
}
