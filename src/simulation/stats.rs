use serde::{Deserialize, Serialize};

use super::events::{DeathCause, TickReport};
use super::population::Population;
use super::species::Species;

/// Number of live agents per species at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    /// Counts indexed by [`Species::index`].
    pub counts: [usize; Species::ALL.len()],
}

impl Census {
    /// Counts the live agents of every species.
    pub fn take(population: &Population) -> Self {
        let mut counts = [0; Species::ALL.len()];
        for (_, agent) in population.iter().filter(|(_, a)| a.is_alive()) {
            counts[agent.species.index()] += 1;
        }
        Self { counts }
    }

    /// Number of live agents of `species`.
    pub fn count(&self, species: Species) -> usize {
        self.counts[species.index()]
    }

    /// Number of live agents that are not grass.
    pub fn animals(&self) -> usize {
        Species::ALL
            .iter()
            .filter(|s| !s.is_stationary())
            .map(|&s| self.count(s))
            .sum()
    }

    /// Number of live agents of all species.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Running totals since the ecosystem was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeTotals {
    /// Offspring born
    pub births: u64,
    /// Agents removed after running out of energy
    pub starved: u64,
    /// Agents eaten
    pub consumed: u64,
    /// Agents removed because their state became non-finite
    pub invalid: u64,
    /// Grass agents that grew spontaneously
    pub sprouted: u64,
}

impl LifetimeTotals {
    /// Adds the outcome of one tick.
    pub fn record(&mut self, report: &TickReport) {
        self.births += report.births() as u64;
        self.starved += report.deaths(DeathCause::Starved) as u64;
        self.consumed += report.deaths(DeathCause::Consumed) as u64;
        self.invalid += report.deaths(DeathCause::InvalidState) as u64;
        self.sprouted += report.sprouts() as u64;
    }
}
