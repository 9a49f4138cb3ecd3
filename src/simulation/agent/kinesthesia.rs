//! Kinesthesia sense - how fast the agent can move.

use ndarray::{Array1, array};

use super::super::params::Params;
use super::super::population::{AgentId, Population};
use super::super::species::Species;
use super::Agent;
use super::sense::Sense;

/// Reports the agent's speed relative to the fastest species' base speed.
pub struct Kinesthesia;

impl Kinesthesia {
    /// Creates a new kinesthesia sense.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Kinesthesia {
    fn default() -> Self {
        Self::new()
    }
}

impl Sense for Kinesthesia {
    fn sense(
        &self,
        _id: AgentId,
        agent: &Agent,
        _population: &Population,
        _params: &Params,
    ) -> Array1<f32> {
        array![agent.speed / Species::max_base_speed()]
    }

    fn input_size(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "Kinesthesia"
    }
}
