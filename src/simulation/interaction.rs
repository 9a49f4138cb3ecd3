//! Proximity interactions between agents: eating and mating.
//!
//! For one acting agent the resolver walks the rest of the population once.
//! Any other live agent closer than the contact radius is either eaten (if the
//! actor's diet allows it) or, failing that, considered as a mate. Offspring
//! are not inserted into the population here; they are handed back to the
//! caller so that agents born during a tick only join the next one.

use geo::Point;
use rand::Rng;

use super::agent::Agent;
use super::brain::Brain;
use super::events::SimulationEvent;
use super::geometric_utils;
use super::params::Params;
use super::population::{AgentId, Population};

/// Resolves all interactions of `actor` with the rest of the population.
///
/// # Arguments
///
/// * `population` - All agents; eaten agents are marked dead but stay stored
/// * `actor` - The agent whose surroundings are resolved
/// * `params` - Simulation parameters
/// * `rng` - Random stream for the mating gate and offspring genetics
/// * `offspring` - Receives newborn agents
///
/// # Returns
///
/// The events produced, in order.
pub fn resolve<R: Rng + ?Sized>(
    population: &mut Population,
    actor: AgentId,
    params: &Params,
    rng: &mut R,
    offspring: &mut Vec<Agent>,
) -> Vec<SimulationEvent> {
    let mut events = Vec::new();

    for other in population.ids() {
        if other == actor {
            continue;
        }
        let (Some(me), Some(target)) = (population.get(actor), population.get(other)) else {
            continue;
        };
        if !target.is_alive() {
            continue;
        }
        if geometric_utils::distance(&me.pos, &target.pos) >= params.contact_radius {
            continue;
        }

        if me.species.eats(target.species) {
            let event = SimulationEvent::Consumed {
                eater: actor,
                eater_species: me.species,
                eaten: other,
                eaten_species: target.species,
                energy: target.energy,
                pos: target.pos,
            };
            consume(population, actor, other, params);
            log::trace!("{event:?}");
            events.push(event);
        } else if me.species == target.species
            && me.can_reproduce()
            && target.can_reproduce()
            && rng.random::<f32>() < params.reproduction_chance
        {
            let child = breed(me, target, params, rng);
            let event = SimulationEvent::Reproduced {
                parent: actor,
                partner: other,
                species: child.species,
                pos: child.pos,
            };
            for parent in [actor, other] {
                if let Some(parent) = population.get_mut(parent) {
                    parent.energy *= 2.0 / 3.0;
                    parent.mating_timer = 0;
                }
            }
            offspring.push(child);
            log::trace!("{event:?}");
            events.push(event);
        }
    }

    events
}

/// Transfers all of `eaten`'s energy to `eater` and marks `eaten` dead.
fn consume(population: &mut Population, eater: AgentId, eaten: AgentId, params: &Params) {
    let Some(meal) = population.get_mut(eaten) else {
        return;
    };
    let energy = meal.energy;
    meal.kill();

    if let Some(eater) = population.get_mut(eater) {
        eater.gain_energy(energy, params.max_energy);
    }
}

/// A third of a parent's energy, as handed to its offspring.
fn energy_share(energy: f32) -> f32 {
    let share = energy / 3.0;
    if share.is_finite() {
        share
    } else {
        share.max(0.0)
    }
}

/// Builds the offspring of `parent` and `partner`.
///
/// The child takes species, speed and color from `parent`, a crossed-over and
/// mutated brain from both, and a third of each parent's current energy. It
/// is placed next to `parent` with a small random offset.
pub fn breed<R: Rng + ?Sized>(
    parent: &Agent,
    partner: &Agent,
    params: &Params,
    rng: &mut R,
) -> Agent {
    let jitter = params.offspring_jitter;
    let offset = Point::new(
        rng.random_range(-jitter..=jitter),
        rng.random_range(-jitter..=jitter),
    );

    let mut child = Agent {
        species: parent.species,
        pos: geometric_utils::clamp_to_arena(parent.pos + offset, params),
        speed: parent.speed,
        energy: energy_share(parent.energy) + energy_share(partner.energy),
        age: 0,
        mating_timer: 0,
        brain: Brain::crossover(&parent.brain, &partner.brain, params.mutation_rate, rng),
        color: parent.color,
    };
    child.settle_energy(params.max_energy);
    child
}
