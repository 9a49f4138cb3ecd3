//! Agent state, movement and energy bookkeeping.

use geo::Point;
use rand::Rng;

use super::super::brain::Brain;
use super::super::geometric_utils;
use super::super::params::Params;
use super::super::species::Species;

/// Energy assigned to an agent that must be removed.
pub const DEAD_ENERGY: f32 = -1.0;

/// One simulated creature or grass patch.
///
/// Agents:
/// - Move according to their brain's decision (grass never moves)
/// - Pay energy for moving and for existing
/// - Eat agents of the species in their diet
/// - Mate with eligible agents of their own species
/// - Are removed once their energy reaches zero
#[derive(Debug, Clone)]
pub struct Agent {
    /// Ecological role.
    pub species: Species,
    /// Position in the arena.
    pub pos: Point<f32>,
    /// Movement speed.
    pub speed: f32,
    /// Current energy (removed when <= 0).
    pub energy: f32,
    /// Ticks alive.
    pub age: u32,
    /// Ticks since this agent last mated.
    pub mating_timer: u32,
    /// Neural network that controls movement.
    pub brain: Brain,
    /// RGBA display color.
    pub color: [u8; 4],
}

impl Agent {
    /// Creates an agent of `species` at `pos` with its species' start energy,
    /// a jittered speed and a freshly initialized brain.
    pub fn new_random<R: Rng + ?Sized>(
        species: Species,
        pos: Point<f32>,
        params: &Params,
        rng: &mut R,
    ) -> Self {
        if species.is_stationary() {
            return Self::sprout(pos);
        }

        let traits = species.traits();
        Self {
            species,
            pos,
            speed: traits.base_speed + rng.random::<f32>() * params.speed_jitter,
            energy: traits.start_energy,
            age: 0,
            mating_timer: 0,
            brain: Brain::new_random(rng),
            color: traits.color,
        }
    }

    /// Creates a grass agent at `pos`.
    pub fn sprout(pos: Point<f32>) -> Self {
        let traits = Species::Grass.traits();
        Self {
            species: Species::Grass,
            pos,
            speed: 0.0,
            energy: traits.start_energy,
            age: 0,
            mating_timer: 0,
            brain: Brain::zeros(),
            color: traits.color,
        }
    }

    /// Copies this agent to `pos`: same species, speed, energy, color and an
    /// independent copy of the brain. Age and mating timer start over.
    pub fn clone_at(&self, pos: Point<f32>) -> Self {
        Self {
            pos,
            age: 0,
            mating_timer: 0,
            ..self.clone()
        }
    }

    /// Checks if the agent is alive.
    ///
    /// # Returns
    ///
    /// `true` if energy > 0, `false` otherwise.
    pub fn is_alive(&self) -> bool {
        self.energy > 0.0
    }

    /// Returns `true` if both position and energy are finite.
    pub fn is_finite(&self) -> bool {
        geometric_utils::is_finite(&self.pos) && self.energy.is_finite()
    }

    /// Returns `true` if the agent has the energy, age and rest needed to mate.
    pub fn can_reproduce(&self) -> bool {
        if self.species.is_stationary() {
            return false;
        }
        let traits = self.species.traits();
        self.energy > traits.start_energy * 0.5
            && self.age > traits.reproduction_age
            && self.mating_timer > traits.reproduction_age
    }

    /// Moves the agent according to its brain outputs and pays the movement cost.
    ///
    /// `dx` and `dy` are brain outputs in `[0, 1]`; 0.5 means no movement on
    /// that axis. The position is clamped to the arena interior and the cost
    /// is charged on the intended displacement.
    pub fn steer(&mut self, dx: f32, dy: f32, params: &Params) {
        let step_x = (dx - 0.5) * self.speed;
        let step_y = (dy - 0.5) * self.speed;

        let target = Point::new(self.pos.x() + step_x, self.pos.y() + step_y);
        self.pos = geometric_utils::clamp_to_arena(target, params);

        let cost = (step_x.abs() + step_y.abs()) * self.species.traits().energy_efficiency;
        self.consume_energy(cost);
        self.settle_energy(params.max_energy);
    }

    /// Advances age and mating timer by one tick.
    pub fn grow_older(&mut self) {
        self.age = self.age.saturating_add(1);
        self.mating_timer = self.mating_timer.saturating_add(1);
    }

    /// Reduces the agent's energy.
    pub fn consume_energy(&mut self, amount: f32) {
        self.energy -= amount;
    }

    /// Increases the agent's energy up to a maximum.
    pub fn gain_energy(&mut self, amount: f32, max_energy: f32) {
        self.energy += amount;
        self.settle_energy(max_energy);
    }

    /// Marks a non-finite energy as dead and caps the energy at `max_energy`.
    pub fn settle_energy(&mut self, max_energy: f32) {
        if !self.energy.is_finite() {
            self.energy = DEAD_ENERGY;
        }
        self.energy = self.energy.min(max_energy);
    }

    /// Kills the agent by setting its energy to the dead sentinel.
    pub fn kill(&mut self) {
        self.energy = DEAD_ENERGY;
    }
}
