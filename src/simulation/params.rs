use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::species::Species;

/// Errors raised while loading or validating [`Params`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// Reading or writing the configuration file failed.
    #[error("failed to access parameter file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for [`Params`].
    #[error("failed to parse parameters: {0}")]
    Json(#[from] serde_json::Error),
    /// A parameter value is out of range.
    #[error("invalid parameters: {0}")]
    Invalid(&'static str),
}

/// Simulation parameters that control ecosystem behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Simulation area width.
    pub arena_width: f32,
    /// Simulation area height.
    pub arena_height: f32,
    /// Distance agents keep from every arena edge while moving.
    pub arena_margin: f32,
    /// Distance from every edge inside which random spawns are placed.
    pub spawn_margin: f32,
    /// Maximum energy an agent can have.
    pub max_energy: f32,
    /// Maximum distance at which food, predators and mates are sensed.
    pub detection_radius: f32,
    /// Maximum distance at which eating or mating happens.
    pub contact_radius: f32,
    /// Energy consumed per tick by every non-grass agent.
    pub existence_cost: f32,
    /// Probability that an inherited weight is perturbed.
    pub mutation_rate: f32,
    /// Probability that an encounter between two eligible mates produces offspring.
    pub reproduction_chance: f32,
    /// Maximum offset of an offspring from its parent on each axis.
    pub offspring_jitter: f32,
    /// Probability per tick of a new grass agent appearing.
    pub grass_spawn_chance: f32,
    /// Upper bound of the random bonus added to a species' base speed.
    pub speed_jitter: f32,
    /// Give hand-placed animals their species' fixed placement speed instead of a jittered one.
    #[serde(default)]
    pub fixed_placement_speed: bool,
    /// Agents created when the ecosystem starts.
    pub initial_population: Vec<(Species, usize)>,
    /// Maximum number of reproduction markers visible at once.
    pub max_markers: usize,
    /// Ticks a reproduction marker stays visible.
    pub marker_lifetime: u32,
    /// Seed for the simulation's random stream; drawn from entropy when absent.
    pub rng_seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            arena_width: 1920.0,
            arena_height: 1000.0,
            arena_margin: 32.0,
            spawn_margin: 50.0,
            max_energy: 1000.0,
            detection_radius: 1000.0,
            contact_radius: 24.0,
            existence_cost: 0.005,
            mutation_rate: 0.07,
            reproduction_chance: 0.7,
            offspring_jitter: 20.0,
            grass_spawn_chance: 0.06,
            speed_jitter: 0.5,
            fixed_placement_speed: false,
            initial_population: vec![(Species::Rabbit, 5)],
            max_markers: 100,
            marker_lifetime: 500,
            rng_seed: None,
        }
    }
}

impl Params {
    /// Checks that every parameter is usable by the simulation.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ParamsError::Invalid("arena dimensions must be positive"));
        }
        let shortest_side = self.arena_width.min(self.arena_height);
        if !(self.arena_margin >= 0.0 && self.arena_margin * 2.0 < shortest_side) {
            return Err(ParamsError::Invalid(
                "arena_margin must leave a non-empty interior",
            ));
        }
        if !(self.spawn_margin >= 0.0 && self.spawn_margin * 2.0 < shortest_side) {
            return Err(ParamsError::Invalid(
                "spawn_margin must leave a non-empty interior",
            ));
        }
        if !(self.max_energy > 0.0) {
            return Err(ParamsError::Invalid("max_energy must be positive"));
        }
        if !(self.detection_radius > 0.0 && self.contact_radius > 0.0) {
            return Err(ParamsError::Invalid("radii must be positive"));
        }
        if !(self.existence_cost >= 0.0 && self.offspring_jitter >= 0.0 && self.speed_jitter >= 0.0)
        {
            return Err(ParamsError::Invalid(
                "costs and jitter amounts must be non-negative",
            ));
        }
        let probabilities = [
            self.mutation_rate,
            self.reproduction_chance,
            self.grass_spawn_chance,
        ];
        if probabilities.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(ParamsError::Invalid(
                "mutation_rate, reproduction_chance and grass_spawn_chance must be in [0, 1]",
            ));
        }
        if self.max_markers == 0 {
            return Err(ParamsError::Invalid("max_markers must be non-zero"));
        }
        Ok(())
    }

    /// Loads parameters from a JSON file and validates them.
    pub fn load_from_file(path: &str) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
