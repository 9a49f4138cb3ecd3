//! Species constants and ecological relations.
//!
//! Every behavioural difference between species lives in a single table of
//! [`SpeciesTraits`], consulted by the senses, the interaction resolver and the
//! life-cycle engine alike.

use serde::{Deserialize, Serialize};

/// Ecological role of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    /// Fast herbivore.
    Rabbit,
    /// Herbivore.
    Duck,
    /// Predator of rabbits and ducks.
    Fox,
    /// Apex predator.
    Wolf,
    /// Stationary energy source.
    Grass,
}

/// Fixed constants describing one species.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesTraits {
    /// Display name.
    pub name: &'static str,
    /// Energy of a freshly placed agent.
    pub start_energy: f32,
    /// Minimum age and mating-timer value (in ticks) before mating.
    pub reproduction_age: u32,
    /// Movement speed before per-agent jitter.
    pub base_speed: f32,
    /// Fixed speed of agents placed by hand when jitter is disabled for placement.
    pub placement_speed: f32,
    /// Energy spent per unit of displacement.
    pub energy_efficiency: f32,
    /// Species this one eats.
    pub diet: &'static [Species],
    /// Species that eat this one.
    pub predators: &'static [Species],
    /// RGBA display color.
    pub color: [u8; 4],
}

const RABBIT: SpeciesTraits = SpeciesTraits {
    name: "Rabbit",
    start_energy: 50.0,
    reproduction_age: 4500,
    base_speed: 15.5,
    placement_speed: 2.5,
    energy_efficiency: 0.02,
    diet: &[Species::Grass],
    predators: &[Species::Fox, Species::Wolf],
    color: [0, 228, 48, 255],
};

const DUCK: SpeciesTraits = SpeciesTraits {
    name: "Duck",
    start_energy: 80.0,
    reproduction_age: 5500,
    base_speed: 10.5,
    placement_speed: 1.5,
    energy_efficiency: 0.03,
    diet: &[Species::Grass],
    predators: &[Species::Fox, Species::Wolf],
    color: [0, 121, 241, 255],
};

const FOX: SpeciesTraits = SpeciesTraits {
    name: "Fox",
    start_energy: 120.0,
    reproduction_age: 10_000,
    base_speed: 10.2,
    placement_speed: 1.2,
    energy_efficiency: 0.06,
    diet: &[Species::Rabbit, Species::Duck],
    predators: &[Species::Wolf],
    color: [255, 161, 0, 255],
};

const WOLF: SpeciesTraits = SpeciesTraits {
    name: "Wolf",
    start_energy: 150.0,
    reproduction_age: 15_000,
    base_speed: 10.0,
    placement_speed: 1.0,
    energy_efficiency: 0.09,
    diet: &[Species::Rabbit, Species::Duck, Species::Fox],
    predators: &[],
    color: [230, 41, 55, 255],
};

const GRASS: SpeciesTraits = SpeciesTraits {
    name: "Grass",
    start_energy: 30.0,
    reproduction_age: 0,
    base_speed: 0.0,
    placement_speed: 0.0,
    energy_efficiency: 0.0,
    diet: &[],
    predators: &[Species::Rabbit, Species::Duck],
    color: [0, 117, 44, 255],
};

impl Species {
    /// All species, in display order.
    pub const ALL: [Species; 5] = [
        Species::Rabbit,
        Species::Duck,
        Species::Fox,
        Species::Wolf,
        Species::Grass,
    ];

    /// Returns the constants for this species.
    pub fn traits(self) -> &'static SpeciesTraits {
        match self {
            Species::Rabbit => &RABBIT,
            Species::Duck => &DUCK,
            Species::Fox => &FOX,
            Species::Wolf => &WOLF,
            Species::Grass => &GRASS,
        }
    }

    /// Position of this species in [`Species::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        self.traits().name
    }

    /// Returns `true` if this species eats `other`.
    pub fn eats(self, other: Species) -> bool {
        self.traits().diet.contains(&other)
    }

    /// Returns `true` if `other` hunts this species.
    pub fn is_prey_of(self, other: Species) -> bool {
        self.traits().predators.contains(&other)
    }

    /// Grass never moves, senses or mates.
    pub fn is_stationary(self) -> bool {
        self == Species::Grass
    }

    /// Base speed of the fastest species, used to normalize speed inputs.
    pub fn max_base_speed() -> f32 {
        Species::ALL
            .iter()
            .map(|s| s.traits().base_speed)
            .fold(0.0, f32::max)
    }
}
