//! Main ecosystem simulation driving one tick at a time.
//!
//! The ecosystem owns every agent and runs the life cycle. Each tick:
//! - Every agent present at the start of the tick acts once, in store order
//! - Animals sense, think and move, paying for movement and for existing
//! - Animals resolve contacts: eating and mating
//! - Dead or corrupted agents are removed
//! - Offspring born during the tick are inserted once the pass is over
//! - Grass may sprout at a random position

use std::collections::HashSet;

use geo::Point;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::agent::{Agent, Perception};
use super::event_log::EventLog;
use super::events::{DeathCause, SimulationEvent, TickReport};
use super::geometric_utils;
use super::interaction;
use super::markers::MarkerPool;
use super::params::{Params, ParamsError};
use super::population::{AgentId, Population};
use super::species::Species;
use super::stats::{Census, LifetimeTotals};

/// The main ecosystem containing all simulation state.
#[derive(Debug)]
pub struct Ecosystem {
    params: Params,
    population: Population,
    perception: Perception,
    markers: MarkerPool,
    rng: SmallRng,
    tick: u64,
    event_log: EventLog,
    totals: LifetimeTotals,
}

impl Ecosystem {
    /// Creates a new ecosystem populated according to `params.initial_population`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Invalid`] if the parameters fail validation.
    pub fn new(params: Params) -> Result<Self, ParamsError> {
        params.validate()?;

        let mut rng = match params.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let capacity = params.initial_population.iter().map(|(_, n)| n).sum();
        let mut population = Population::with_capacity(capacity);
        for &(species, count) in &params.initial_population {
            for _ in 0..count {
                let pos = geometric_utils::random_point(&mut rng, &params);
                population.insert(Agent::new_random(species, pos, &params, &mut rng));
            }
        }

        log::info!(
            "created ecosystem: {}x{} arena, {} agents, seed {:?}",
            params.arena_width,
            params.arena_height,
            population.len(),
            params.rng_seed
        );

        Ok(Self {
            markers: MarkerPool::new(params.max_markers, params.marker_lifetime),
            params,
            population,
            perception: Perception::default(),
            rng,
            tick: 0,
            event_log: EventLog::default(),
            totals: LifetimeTotals::default(),
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// Agents inserted by the previous tick or by callers since then take part;
    /// offspring born now join from the next tick on.
    pub fn step(&mut self) -> TickReport {
        let mut report = TickReport::new(self.tick);
        let mut offspring = Vec::new();
        let mut eaten = HashSet::new();

        for id in self.population.ids() {
            let Some(agent) = self.population.get(id) else {
                continue;
            };
            if !agent.is_finite() {
                log::warn!("removing {} {id:?} with invalid state", agent.species.name());
                self.remove(id, DeathCause::InvalidState, &mut report);
                continue;
            }
            if !agent.is_alive() {
                let cause = death_cause(&eaten, id);
                self.remove(id, cause, &mut report);
                continue;
            }

            let stationary = agent.species.is_stationary();
            if !stationary {
                let inputs = self
                    .perception
                    .perceive(id, agent, &self.population, &self.params);
                let (dx, dy) = agent.brain.think(&inputs);
                if let Some(agent) = self.population.get_mut(id) {
                    agent.steer(dx, dy, &self.params);
                }
            }

            let Some(agent) = self.population.get_mut(id) else {
                continue;
            };
            agent.grow_older();
            if !stationary {
                agent.consume_energy(self.params.existence_cost);
            }
            if !agent.is_finite() {
                log::warn!("removing {} {id:?} with invalid state", agent.species.name());
                self.remove(id, DeathCause::InvalidState, &mut report);
                continue;
            }

            // Grass neither eats nor mates.
            if !stationary {
                let events = interaction::resolve(
                    &mut self.population,
                    id,
                    &self.params,
                    &mut self.rng,
                    &mut offspring,
                );
                for event in events {
                    if let SimulationEvent::Consumed { eaten: meal, .. } = event {
                        eaten.insert(meal);
                    }
                    report.push(event);
                }
            }

            if self.population.get(id).is_some_and(|a| !a.is_alive()) {
                self.remove(id, DeathCause::Starved, &mut report);
            }
        }

        // Agents eaten after their own turn.
        for (id, agent) in self.population.drain_where(|a| !a.is_alive()) {
            report.push(SimulationEvent::Died {
                id,
                species: agent.species,
                cause: death_cause(&eaten, id),
            });
        }

        for child in offspring {
            self.population.insert(child);
        }

        if self.rng.random::<f32>() < self.params.grass_spawn_chance {
            let pos = geometric_utils::random_point(&mut self.rng, &self.params);
            let id = self.population.insert(Agent::sprout(pos));
            report.push(SimulationEvent::Sprouted { id, pos });
        }

        self.markers.advance();
        for event in &report.events {
            if let SimulationEvent::Reproduced { pos, .. } = event {
                self.markers.spawn(*pos);
            }
            self.event_log.record(self.tick, event);
        }
        self.totals.record(&report);

        log::debug!(
            "tick {}: {} agents, {} births, {} deaths, {} sprouts",
            self.tick,
            self.population.len(),
            report.births(),
            report.deaths(DeathCause::Starved)
                + report.deaths(DeathCause::Consumed)
                + report.deaths(DeathCause::InvalidState),
            report.sprouts()
        );

        self.tick += 1;
        report
    }

    fn remove(&mut self, id: AgentId, cause: DeathCause, report: &mut TickReport) {
        if let Some(agent) = self.population.remove(id) {
            report.push(SimulationEvent::Died {
                id,
                species: agent.species,
                cause,
            });
        }
    }

    /// Inserts a fully formed agent. It takes part from the next tick on.
    pub fn insert(&mut self, agent: Agent) -> AgentId {
        self.population.insert(agent)
    }

    /// Places a new agent of `species` at `pos` (clamped to the arena) with a fresh brain.
    ///
    /// With `fixed_placement_speed` set, animals get their species' placement speed.
    pub fn spawn(&mut self, species: Species, pos: Point<f32>) -> AgentId {
        let pos = geometric_utils::clamp_to_arena(pos, &self.params);
        let mut agent = Agent::new_random(species, pos, &self.params, &mut self.rng);
        if self.params.fixed_placement_speed && !species.is_stationary() {
            agent.speed = species.traits().placement_speed;
        }
        self.population.insert(agent)
    }

    /// Copies agent `id` to a random position.
    ///
    /// The copy shares species, speed, energy, color and brain weights with the
    /// original; age and mating timer start at zero. Returns `None` if `id` is stale.
    pub fn clone_agent(&mut self, id: AgentId) -> Option<AgentId> {
        let pos = geometric_utils::random_point(&mut self.rng, &self.params);
        let copy = self.population.get(id)?.clone_at(pos);
        Some(self.population.insert(copy))
    }

    /// Moves agent `id` to `pos` (clamped to the arena). Returns `false` if `id` is stale.
    pub fn relocate(&mut self, id: AgentId, pos: Point<f32>) -> bool {
        let pos = geometric_utils::clamp_to_arena(pos, &self.params);
        match self.population.get_mut(id) {
            Some(agent) => {
                agent.pos = pos;
                true
            }
            None => false,
        }
    }

    /// The agent nearest to `pos` within `radius`.
    pub fn agent_at(&self, pos: Point<f32>, radius: f32) -> Option<AgentId> {
        self.population.nearest(&pos, radius)
    }

    /// Live agents per species.
    pub fn census(&self) -> Census {
        Census::take(&self.population)
    }

    /// All agents.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Current parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Active reproduction markers.
    pub fn markers(&self) -> &MarkerPool {
        &self.markers
    }

    /// Recent events, newest first.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Totals since creation.
    pub fn totals(&self) -> &LifetimeTotals {
        &self.totals
    }

    /// Number of ticks run so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

fn death_cause(eaten: &HashSet<AgentId>, id: AgentId) -> DeathCause {
    if eaten.contains(&id) {
        DeathCause::Consumed
    } else {
        DeathCause::Starved
    }
}
