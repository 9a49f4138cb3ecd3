//! Events describing what happened during a tick.
//!
//! The interaction resolver and the life-cycle engine record events as they
//! change the population; the finished list is handed to callers in a
//! [`TickReport`] so front-ends can show markers, logs and statistics without
//! inspecting the simulation internals.

use geo::Point;

use super::population::AgentId;
use super::species::Species;

/// Why an agent was removed from the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Energy ran out.
    Starved,
    /// Eaten by a predator or grazer.
    Consumed,
    /// Position or energy became non-finite.
    InvalidState,
}

/// Events that change simulation state.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// An agent ate another agent.
    Consumed {
        /// The agent that ate.
        eater: AgentId,
        /// Species of the eater.
        eater_species: Species,
        /// The agent that was eaten.
        eaten: AgentId,
        /// Species of the eaten agent.
        eaten_species: Species,
        /// Energy transferred to the eater.
        energy: f32,
        /// Where the meal happened.
        pos: Point<f32>,
    },
    /// Two agents produced an offspring.
    Reproduced {
        /// The parent whose scan found the partner.
        parent: AgentId,
        /// The other parent.
        partner: AgentId,
        /// Species of the family.
        species: Species,
        /// Where the offspring was placed.
        pos: Point<f32>,
    },
    /// An agent was removed from the population.
    Died {
        /// Handle the agent had while alive.
        id: AgentId,
        /// Species of the removed agent.
        species: Species,
        /// Why it was removed.
        cause: DeathCause,
    },
    /// A grass agent appeared spontaneously.
    Sprouted {
        /// Handle of the new grass.
        id: AgentId,
        /// Where it grew.
        pos: Point<f32>,
    },
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Index of the tick that produced this report.
    pub tick: u64,
    /// Events in the order they happened.
    pub events: Vec<SimulationEvent>,
}

impl TickReport {
    /// Creates an empty report for `tick`.
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            events: Vec::new(),
        }
    }

    /// Adds an event to the report.
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// Number of offspring born this tick.
    pub fn births(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimulationEvent::Reproduced { .. }))
            .count()
    }

    /// Number of agents removed this tick for the given cause.
    pub fn deaths(&self, cause: DeathCause) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimulationEvent::Died { cause: c, .. } if *c == cause))
            .count()
    }

    /// Number of grass agents that appeared this tick.
    pub fn sprouts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimulationEvent::Sprouted { .. }))
            .count()
    }
}
