//! Surroundings sense - nearest food, predator and mate.
//!
//! A single scan over the population tracks the closest agent in each of
//! three categories. The first agent found at the minimal distance wins.

use geo::Point;
use ndarray::Array1;

use super::super::geometric_utils;
use super::super::params::Params;
use super::super::population::{AgentId, Population};
use super::Agent;
use super::sense::Sense;

/// Amplification of the food and threat proximity signals and of the food direction.
const SIGNAL_GAIN: f32 = 25.0;
/// Energy below which the hunger signal ramps up.
const HUNGER_THRESHOLD: f32 = 150.0;
/// Energy below which the weakness flag is raised.
const WEAKNESS_THRESHOLD: f32 = 30.0;
/// Value of the weakness flag.
const WEAKNESS_SIGNAL: f32 = 5.0;
/// Value of the ready-to-mate flag.
const MATE_READY_SIGNAL: f32 = 10.0;

/// Closest agent found so far in one category.
#[derive(Debug, Clone, Copy)]
struct Nearest {
    distance: f32,
    offset: Point<f32>,
}

impl Nearest {
    fn consider(slot: &mut Option<Nearest>, distance: f32, offset: Point<f32>) {
        if slot.is_none_or(|nearest| distance < nearest.distance) {
            *slot = Some(Nearest { distance, offset });
        }
    }

    /// Unit vector towards the target, zero when the target sits on top of the agent.
    fn direction(&self) -> (f32, f32) {
        if self.distance > 0.0 {
            (
                self.offset.x() / self.distance,
                self.offset.y() / self.distance,
            )
        } else {
            (0.0, 0.0)
        }
    }
}

/// Senses the nearest food, predator and mate within the detection radius.
///
/// Outputs (12 values):
/// - Food: proximity (capped at 1), amplified direction x/y, hunger
/// - Predator: proximity, direction x/y, weakness flag
/// - Mate: proximity, direction x/y, ready-to-mate flag
pub struct Surroundings;

impl Surroundings {
    /// Creates a new surroundings sense.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Surroundings {
    fn default() -> Self {
        Self::new()
    }
}

impl Sense for Surroundings {
    fn sense(
        &self,
        id: AgentId,
        agent: &Agent,
        population: &Population,
        params: &Params,
    ) -> Array1<f32> {
        let mut food: Option<Nearest> = None;
        let mut predator: Option<Nearest> = None;
        let mut mate: Option<Nearest> = None;

        for (other_id, other) in population.iter() {
            if other_id == id || !other.is_alive() {
                continue;
            }

            let distance = geometric_utils::distance(&agent.pos, &other.pos);
            if distance > params.detection_radius {
                continue;
            }
            let offset = other.pos - agent.pos;

            if agent.species.eats(other.species) {
                Nearest::consider(&mut food, distance, offset);
            }
            if agent.species.is_prey_of(other.species) {
                Nearest::consider(&mut predator, distance, offset);
            }
            if other.species == agent.species && other.can_reproduce() {
                Nearest::consider(&mut mate, distance, offset);
            }
        }

        let radius = params.detection_radius;
        let mut outputs = Array1::zeros(self.input_size());

        // food
        if let Some(nearest) = food {
            let (dir_x, dir_y) = nearest.direction();
            outputs[0] = ((1.0 - nearest.distance / radius) * SIGNAL_GAIN).min(1.0);
            outputs[1] = dir_x * SIGNAL_GAIN;
            outputs[2] = dir_y * SIGNAL_GAIN;
        }
        if agent.energy < HUNGER_THRESHOLD {
            outputs[3] = 1.0 - agent.energy / HUNGER_THRESHOLD;
        }

        // predator
        if let Some(nearest) = predator {
            let (dir_x, dir_y) = nearest.direction();
            outputs[4] = SIGNAL_GAIN - nearest.distance / radius;
            outputs[5] = dir_x;
            outputs[6] = dir_y;
        }
        if agent.energy < WEAKNESS_THRESHOLD {
            outputs[7] = WEAKNESS_SIGNAL;
        }

        // mate
        if let Some(nearest) = mate {
            let (dir_x, dir_y) = nearest.direction();
            outputs[8] = SIGNAL_GAIN - nearest.distance / radius;
            outputs[9] = dir_x;
            outputs[10] = dir_y;
        }
        if agent.can_reproduce() {
            outputs[11] = MATE_READY_SIGNAL;
        }

        outputs
    }

    fn input_size(&self) -> usize {
        12
    }

    fn name(&self) -> &'static str {
        "Surroundings"
    }
}
