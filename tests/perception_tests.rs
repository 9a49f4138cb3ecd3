#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ecosim::simulation::agent::{Agent, Kinesthesia, Perception, Proprioception, Sense, Surroundings};
use ecosim::simulation::brain::INPUT_SIZE;
use ecosim::simulation::params::Params;
use ecosim::simulation::population::{AgentId, Population};
use ecosim::simulation::species::Species;
use geo::Point;
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn create_test_params() -> Params {
    Params {
        initial_population: Vec::new(),
        rng_seed: Some(3),
        ..Params::default()
    }
}

fn place(
    population: &mut Population,
    species: Species,
    x: f32,
    y: f32,
    params: &Params,
    rng: &mut SmallRng,
) -> AgentId {
    population.insert(Agent::new_random(species, Point::new(x, y), params, rng))
}

fn perceive(population: &Population, id: AgentId, params: &Params) -> Array1<f32> {
    let agent = population.get(id).expect("agent should exist");
    Perception::default().perceive(id, agent, population, params)
}

#[test]
fn test_perception_input_sizes() {
    let perception = Perception::default();
    assert_eq!(perception.total_input_size(), INPUT_SIZE);
    assert_eq!(Proprioception::new().input_size(), 4);
    assert_eq!(Surroundings::new().input_size(), 12);
    assert_eq!(Kinesthesia::new().input_size(), 1);

    let names: Vec<&str> = perception.senses().iter().map(|s| s.name()).collect();
    assert_eq!(names, ["Proprioception", "Surroundings", "Kinesthesia"]);
}

#[test]
fn test_lone_agent() {
    let params = create_test_params();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut population = Population::new();
    let id = place(&mut population, Species::Rabbit, 960.0, 500.0, &params, &mut rng);

    let inputs = perceive(&population, id, &params);
    assert_eq!(inputs.len(), INPUT_SIZE);

    // Proprioception
    assert!((inputs[0] - 0.5).abs() < 1e-6);
    assert!((inputs[1] - 0.5).abs() < 1e-6);
    assert!((inputs[2] - 50.0 / 1000.0).abs() < 1e-6);
    assert_eq!(inputs[3], 1.0);

    // No food, predator or mate in sight
    for i in [4, 5, 6, 8, 9, 10, 12, 13, 14] {
        assert_eq!(inputs[i], 0.0, "input {i}");
    }
    // Hungry, not weak, not ready to mate
    assert!((inputs[7] - (1.0 - 50.0 / 150.0)).abs() < 1e-6);
    assert_eq!(inputs[11], 0.0);
    assert_eq!(inputs[15], 0.0);

    // Kinesthesia
    let speed = population.get(id).map(|a| a.speed).unwrap_or_default();
    assert!((inputs[16] - speed / Species::max_base_speed()).abs() < 1e-6);
}

#[test]
fn test_nearest_food_direction() {
    let params = create_test_params();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut population = Population::new();
    let rabbit = place(&mut population, Species::Rabbit, 500.0, 500.0, &params, &mut rng);
    place(&mut population, Species::Grass, 600.0, 500.0, &params, &mut rng);
    place(&mut population, Species::Grass, 500.0, 300.0, &params, &mut rng);

    let inputs = perceive(&population, rabbit, &params);
    // (1 - 100/1000) * 25 capped at 1
    assert_eq!(inputs[4], 1.0);
    assert!((inputs[5] - 25.0).abs() < 1e-4);
    assert!(inputs[6].abs() < 1e-4);
}

#[test]
fn test_predator_and_mate_signals() {
    let params = create_test_params();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut population = Population::new();
    let rabbit = place(&mut population, Species::Rabbit, 500.0, 500.0, &params, &mut rng);
    place(&mut population, Species::Fox, 500.0, 560.0, &params, &mut rng);
    let mate = place(&mut population, Species::Rabbit, 400.0, 500.0, &params, &mut rng);

    // Only eligible mates are sensed
    let inputs = perceive(&population, rabbit, &params);
    assert_eq!(inputs[12], 0.0);

    if let Some(agent) = population.get_mut(mate) {
        agent.age = 5000;
        agent.mating_timer = 5000;
    }
    let inputs = perceive(&population, rabbit, &params);

    assert!((inputs[8] - (25.0 - 60.0 / 1000.0)).abs() < 1e-4);
    assert!(inputs[9].abs() < 1e-6);
    assert!((inputs[10] - 1.0).abs() < 1e-6);

    assert!((inputs[12] - (25.0 - 100.0 / 1000.0)).abs() < 1e-4);
    assert!((inputs[13] + 1.0).abs() < 1e-6);
    assert!(inputs[14].abs() < 1e-6);
}

#[test]
fn test_target_on_top_of_agent_gives_zero_direction() {
    let params = create_test_params();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut population = Population::new();
    let rabbit = place(&mut population, Species::Rabbit, 500.0, 500.0, &params, &mut rng);
    place(&mut population, Species::Grass, 500.0, 500.0, &params, &mut rng);

    let inputs = perceive(&population, rabbit, &params);
    assert!(inputs.iter().all(|v| v.is_finite()));
    assert_eq!(inputs[4], 1.0);
    assert_eq!(inputs[5], 0.0);
    assert_eq!(inputs[6], 0.0);
}

#[test]
fn test_dead_and_distant_agents_are_ignored() {
    let mut params = create_test_params();
    params.detection_radius = 50.0;
    let mut rng = SmallRng::seed_from_u64(1);
    let mut population = Population::new();
    let rabbit = place(&mut population, Species::Rabbit, 500.0, 500.0, &params, &mut rng);
    let dead = place(&mut population, Species::Grass, 510.0, 500.0, &params, &mut rng);
    place(&mut population, Species::Grass, 600.0, 500.0, &params, &mut rng);
    if let Some(grass) = population.get_mut(dead) {
        grass.kill();
    }

    let inputs = perceive(&population, rabbit, &params);
    assert_eq!(inputs[4], 0.0);
    assert_eq!(inputs[5], 0.0);
    assert_eq!(inputs[6], 0.0);
}

#[test]
fn test_weak_agent_raises_flag() {
    let params = create_test_params();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut population = Population::new();
    let fox = place(&mut population, Species::Fox, 40.0, 500.0, &params, &mut rng);
    if let Some(agent) = population.get_mut(fox) {
        agent.energy = 10.0;
    }

    let inputs = perceive(&population, fox, &params);
    assert_eq!(inputs[11], 5.0);
    // 40 units from the left edge
    assert!((inputs[3] - 0.4).abs() < 1e-6);
}

#[test]
fn test_equidistant_targets_first_found_wins() {
    let params = create_test_params();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut population = Population::new();
    let rabbit = place(&mut population, Species::Rabbit, 500.0, 500.0, &params, &mut rng);
    place(&mut population, Species::Grass, 600.0, 500.0, &params, &mut rng);
    place(&mut population, Species::Grass, 400.0, 500.0, &params, &mut rng);

    let inputs = perceive(&population, rabbit, &params);
    // Direction towards the grass inserted first
    assert!((inputs[5] - 25.0).abs() < 1e-4);
    assert!(inputs[6].abs() < 1e-4);
}
