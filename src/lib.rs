//! # Ecosim - Predator/Prey Ecosystem Simulation
//!
//! A simulation of grass, herbivores and predators whose movement is decided by
//! small feed-forward neural networks. Agents sense their surroundings, spend
//! energy moving, graze or hunt, and reproduce with mutated offspring.
//!
//! ## Features
//!
//! - Per-agent neural network brains (17 inputs, 10 hidden units, 2 outputs)
//! - Genetic crossover and mutation on reproduction
//! - Species table driving diet, predators, speed and energy costs
//! - Generational population store that tolerates removal mid-tick
//! - Spontaneous grass growth
//! - Reproduction markers and event log for front-ends
//!
//! ## Core Modules
//!
//! - [`simulation::brain`] - Neural network decision model
//! - [`simulation::agent`] - Agent state and the sensory encoder
//! - [`simulation::population`] - Population store
//! - [`simulation::interaction`] - Predation, grazing and reproduction
//! - [`simulation::ecosystem`] - Per-tick life-cycle engine

/// Core simulation logic and data structures.
pub mod simulation {
    /// Agent state, movement and the senses feeding the brain.
    pub mod agent;
    /// Neural network decision model.
    pub mod brain;
    /// Life-cycle engine driving one tick at a time.
    pub mod ecosystem;
    /// Rolling log of recent events for display.
    pub mod event_log;
    /// Events produced while resolving a tick.
    pub mod events;
    /// Geometric helpers for distances and arena bounds.
    pub mod geometric_utils;
    /// Proximity interactions: eating and mating.
    pub mod interaction;
    /// Transient reproduction markers.
    pub mod markers;
    /// Simulation parameters.
    pub mod params;
    /// Storage for all live agents.
    pub mod population;
    /// Species constants and relations.
    pub mod species;
    /// Census and lifetime statistics.
    pub mod stats;
}
