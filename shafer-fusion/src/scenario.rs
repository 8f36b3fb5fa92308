//! Scenario input model: a frame plus an ordered list of evidence sources.
//!
//! Scenarios are plain serde data so the host layer can hand them over as
//! JSON; nothing here is validated until [`crate::FusionEngine`] runs them.

use serde::{Deserialize, Serialize};

use shafer_core::{Frame, RawMass, Reliability};

/// One evidence source: a raw mass assignment and how far to trust it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSource {
    pub name: String,
    pub mass: RawMass,
    /// Falls back to the engine's default reliability when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<f64>,
}

impl EvidenceSource {
    pub fn new(name: impl Into<String>, mass: RawMass) -> Self {
        Self {
            name: name.into(),
            mass,
            reliability: None,
        }
    }

    pub fn with_reliability(mut self, reliability: f64) -> Self {
        self.reliability = Some(reliability);
        self
    }

    /// The stated reliability, or `default` when the source gives none.
    pub fn reliability_or(&self, default: f64) -> Reliability {
        Reliability::new(self.reliability.unwrap_or(default))
    }
}

/// A named fusion problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub frame: Frame,
    pub sources: Vec<EvidenceSource>,
    #[serde(default)]
    pub explanation: String,
}

impl Scenario {
    pub fn new(id: impl Into<String>, frame: Frame, sources: Vec<EvidenceSource>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            frame,
            sources,
            explanation: String::new(),
        }
    }
}
