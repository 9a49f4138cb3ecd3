//! Proprioception sense - agent's awareness of its own state and placement.

use ndarray::{Array1, array};

use super::super::geometric_utils;
use super::super::params::Params;
use super::super::population::{AgentId, Population};
use super::Agent;
use super::sense::Sense;

/// Distance to an edge at which the boundary input saturates.
const BOUNDARY_RANGE: f32 = 100.0;

/// Proprioception sense for internal state awareness.
///
/// Outputs:
/// - Position (x and y normalized by the arena size)
/// - Energy level (normalized by the energy cap)
/// - Closeness to the nearest arena edge (saturating at 1)
pub struct Proprioception;

impl Proprioception {
    /// Creates a new proprioception sense.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Proprioception {
    fn default() -> Self {
        Self::new()
    }
}

impl Sense for Proprioception {
    fn sense(
        &self,
        _id: AgentId,
        agent: &Agent,
        _population: &Population,
        params: &Params,
    ) -> Array1<f32> {
        let boundary = geometric_utils::boundary_distance(&agent.pos, params);

        array![
            agent.pos.x() / params.arena_width,
            agent.pos.y() / params.arena_height,
            agent.energy / params.max_energy,
            (boundary / BOUNDARY_RANGE).min(1.0),
        ]
    }

    fn input_size(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "Proprioception"
    }
}
