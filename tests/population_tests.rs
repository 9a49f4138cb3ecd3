#![allow(missing_docs)]

use ecosim::simulation::agent::{Agent, DEAD_ENERGY};
use ecosim::simulation::event_log::{EventColor, EventLog};
use ecosim::simulation::events::{DeathCause, SimulationEvent, TickReport};
use ecosim::simulation::markers::MarkerPool;
use ecosim::simulation::population::Population;
use ecosim::simulation::species::Species;
use ecosim::simulation::stats::{Census, LifetimeTotals};
use geo::Point;

fn grass_at(x: f32) -> Agent {
    Agent::sprout(Point::new(x, 100.0))
}

#[test]
fn test_removal_during_snapshot_walk() {
    let mut population = Population::new();
    let ids: Vec<_> = (0..6).map(|i| population.insert(grass_at(i as f32 * 10.0))).collect();

    let mut visited = Vec::new();
    for id in population.ids() {
        if population.get(id).is_none() {
            continue;
        }
        visited.push(id);
        // Remove the agent right after this one
        if let Some(&next) = ids.iter().skip_while(|&&other| other != id).nth(1) {
            population.remove(next);
        }
    }

    // Every other agent was removed before its turn; none visited twice
    assert_eq!(visited, vec![ids[0], ids[2], ids[4]]);
    assert_eq!(population.len(), 3);
    assert!(population.get(ids[1]).is_none());
}

#[test]
fn test_insert_during_walk_is_not_visited() {
    let mut population = Population::new();
    population.insert(grass_at(0.0));
    population.insert(grass_at(10.0));

    let mut visited = 0;
    for id in population.ids() {
        if population.contains(id) {
            visited += 1;
            population.insert(grass_at(20.0));
        }
    }
    assert_eq!(visited, 2);
    assert_eq!(population.len(), 4);
}

#[test]
fn test_stale_handle_after_slot_reuse() {
    let mut population = Population::new();
    let old = population.insert(grass_at(0.0));
    population.remove(old);
    let new = population.insert(grass_at(5.0));

    assert_ne!(old, new);
    assert!(population.get(old).is_none());
    assert!(population.get(new).is_some());
}

#[test]
fn test_drain_where_and_nearest() {
    let mut population = Population::new();
    let alive = population.insert(grass_at(0.0));
    let mut dead = grass_at(50.0);
    dead.energy = DEAD_ENERGY;
    let dead = population.insert(dead);

    let drained = population.drain_where(|a| !a.is_alive());
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].0, dead);
    assert_eq!(population.len(), 1);

    assert_eq!(population.nearest(&Point::new(3.0, 100.0), 10.0), Some(alive));
    assert_eq!(population.nearest(&Point::new(30.0, 100.0), 10.0), None);

    population.clear();
    assert!(population.is_empty());
}

#[test]
fn test_census_counts_live_agents() {
    let mut population = Population::new();
    population.insert(grass_at(0.0));
    population.insert(grass_at(1.0));
    let mut dead = grass_at(2.0);
    dead.kill();
    population.insert(dead);

    let census = Census::take(&population);
    assert_eq!(census.count(Species::Grass), 2);
    assert_eq!(census.count(Species::Fox), 0);
    assert_eq!(census.animals(), 0);
    assert_eq!(census.total(), 2);
}

#[test]
fn test_lifetime_totals_and_event_log() {
    let mut population = Population::new();
    let a = population.insert(grass_at(0.0));
    let b = population.insert(grass_at(1.0));

    let mut report = TickReport::new(3);
    report.push(SimulationEvent::Consumed {
        eater: a,
        eater_species: Species::Rabbit,
        eaten: b,
        eaten_species: Species::Grass,
        energy: 30.0,
        pos: Point::new(1.0, 100.0),
    });
    report.push(SimulationEvent::Died {
        id: b,
        species: Species::Grass,
        cause: DeathCause::Consumed,
    });
    report.push(SimulationEvent::Died {
        id: a,
        species: Species::Fox,
        cause: DeathCause::Starved,
    });
    report.push(SimulationEvent::Sprouted {
        id: a,
        pos: Point::new(0.0, 0.0),
    });

    let mut totals = LifetimeTotals::default();
    totals.record(&report);
    totals.record(&report);
    assert_eq!(totals.consumed, 2);
    assert_eq!(totals.starved, 2);
    assert_eq!(totals.sprouted, 2);
    assert_eq!(totals.births, 0);

    let mut log = EventLog::new(2);
    for event in &report.events {
        log.record(report.tick, event);
    }
    let events = log.events();
    assert_eq!(events.len(), 2);
    // Newest first
    assert_eq!(events[0].color, EventColor::Death);
    assert_eq!(events[0].description, "Fox starved");
    assert_eq!(events[1].color, EventColor::Grazing);
    assert_eq!(events[1].tick, 3);

    log.clear();
    assert!(log.events().is_empty());
}

#[test]
fn test_marker_pool_recycles_oldest() {
    let mut pool = MarkerPool::new(3, 5);
    for i in 0..4 {
        pool.spawn(Point::new(i as f32, 0.0));
    }
    assert_eq!(pool.len(), 3);
    let first = pool.iter().next().map(|m| m.pos);
    assert_eq!(first, Some(Point::new(1.0, 0.0)));

    for _ in 0..4 {
        pool.advance();
    }
    assert!(pool.iter().all(|m| m.remaining == 1));
    pool.advance();
    assert!(pool.is_empty());
}
