pub use super::value_objects::EvolutionaryState;
use serde::{Deserialize, Serialize};

/// Domain entity - raw light curve returned by the simulation service.
/// Time and luminosity are parallel arrays, kept exactly as received; a
/// well-formed curve is non-empty with equal lengths, anything else is
/// neutralized downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightCurve {
    pub time: Vec<f64>,
    pub luminosity: Vec<f64>,
}

impl LightCurve {
    pub fn new(time: Vec<f64>, luminosity: Vec<f64>) -> Self {
        Self { time, luminosity }
    }

    pub fn empty() -> Self {
        Self { time: Vec::new(), luminosity: Vec::new() }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.time.is_empty() && self.time.len() == self.luminosity.len()
    }

    pub fn sample_count(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty() && self.luminosity.is_empty()
    }
}

/// Domain entity - one parsed simulation response
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub state: EvolutionaryState,
    pub light_curve: LightCurve,
}

impl SimulationResult {
    pub fn new(state: EvolutionaryState, light_curve: LightCurve) -> Self {
        Self { state, light_curve }
    }
}
