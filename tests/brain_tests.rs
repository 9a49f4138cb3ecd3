#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ecosim::simulation::brain::{Brain, INPUT_SIZE, Mlp, activate};
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn create_test_rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

#[test]
fn test_activation_is_bounded() {
    assert_eq!(activate(0.0), 0.5);
    for x in [-1e9, -10.0, -1.0, 1.0, 10.0, 1e9, f32::INFINITY, f32::NEG_INFINITY] {
        let y = activate(x);
        assert!((0.0..=1.0).contains(&y), "activate({x}) = {y}");
    }
    assert!(activate(3.0) > activate(2.0));
}

#[test]
fn test_outputs_in_unit_range() {
    let mut rng = create_test_rng();

    for trial in 0..100 {
        let brain = Brain::new_random(&mut rng);
        let inputs = Array1::from_shape_fn(INPUT_SIZE, |i| (i as f32 - 8.0) * trial as f32);
        let (dx, dy) = brain.think(&inputs);
        assert!(dx.is_finite() && dy.is_finite());
        assert!((0.0..=1.0).contains(&dx));
        assert!((0.0..=1.0).contains(&dy));
    }
}

#[test]
fn test_non_finite_inputs_give_finite_outputs() {
    let mut rng = create_test_rng();
    let brain = Brain::new_random(&mut rng);

    for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let inputs = Array1::from_elem(INPUT_SIZE, value);
        let (dx, dy) = brain.think(&inputs);
        assert!((0.0..=1.0).contains(&dx), "dx = {dx} for input {value}");
        assert!((0.0..=1.0).contains(&dy), "dy = {dy} for input {value}");
    }

    // NaN anywhere propagates through the dot product, so the output is neutral
    let inputs = Array1::from_elem(INPUT_SIZE, f32::NAN);
    assert_eq!(brain.think(&inputs), (0.5, 0.5));
}

#[test]
fn test_random_parameters_within_unit_interval() {
    let mut rng = create_test_rng();
    let brain = Brain::new_random(&mut rng);

    let params = brain.to_flat_vector();
    assert_eq!(params.len(), brain.parameter_count());
    assert_eq!(brain.parameter_count(), 17 * 10 + 10 + 10 * 2 + 2);
    assert!(params.iter().all(|p| (-1.0..=1.0).contains(p)));
    // Not all identical
    assert!(params.iter().any(|&p| p != params[0]));
}

#[test]
fn test_zero_brain_stays_put() {
    let brain = Brain::zeros();
    let inputs = Array1::from_elem(INPUT_SIZE, 3.0);
    assert_eq!(brain.think(&inputs), (0.5, 0.5));
}

#[test]
fn test_crossover_without_mutation_picks_parent_values() {
    let mut rng = create_test_rng();
    let parent_a = Brain::new_random(&mut rng);
    let parent_b = Brain::new_random(&mut rng);
    let flat_a = parent_a.to_flat_vector();
    let flat_b = parent_b.to_flat_vector();

    let mut from_a = 0usize;
    let mut total = 0usize;
    for _ in 0..200 {
        let child = Brain::crossover(&parent_a, &parent_b, 0.0, &mut rng);
        for ((c, a), b) in child.to_flat_vector().iter().zip(&flat_a).zip(&flat_b) {
            assert!(c == a || c == b, "{c} is neither {a} nor {b}");
            if a != b {
                total += 1;
                if c == a {
                    from_a += 1;
                }
            }
        }
    }

    let ratio = from_a as f64 / total as f64;
    assert!((0.45..0.55).contains(&ratio), "ratio from parent A: {ratio}");
}

#[test]
fn test_mutation_stays_within_relative_spread() {
    let mut rng = create_test_rng();
    let parent = Brain::new_random(&mut rng);
    let child = Brain::crossover(&parent, &parent, 1.0, &mut rng);

    let mut changed = 0;
    for (c, p) in child.to_flat_vector().iter().zip(parent.to_flat_vector()) {
        assert!((c - p).abs() <= 0.35 * p.abs() + 1e-6, "{c} too far from {p}");
        if *c != p {
            changed += 1;
        }
    }
    assert!(changed > 0);
}

#[test]
fn test_crossover_zeroes_non_finite_parameters() {
    let mut rng = create_test_rng();
    let mut parent_a = Brain::new_random(&mut rng);
    let mut parent_b = Brain::new_random(&mut rng);
    parent_a.hidden.weights[[0, 0]] = f32::NAN;
    parent_b.hidden.weights[[0, 0]] = f32::NAN;
    parent_a.output.biases[1] = f32::INFINITY;
    parent_b.output.biases[1] = f32::NEG_INFINITY;

    let child = Brain::crossover(&parent_a, &parent_b, 0.5, &mut rng);
    assert_eq!(child.hidden.weights[[0, 0]], 0.0);
    assert_eq!(child.output.biases[1], 0.0);
    assert!(child.to_flat_vector().iter().all(|p| p.is_finite()));
}

#[test]
fn test_clone_is_deep() {
    let mut rng = create_test_rng();
    let original = Brain::new_random(&mut rng);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    let before = original.hidden.weights[[1, 1]];
    copy.hidden.weights[[1, 1]] = before + 5.0;
    assert_eq!(original.hidden.weights[[1, 1]], before);
    assert_ne!(copy, original);
}

#[test]
fn test_layer_shapes() {
    let mut rng = create_test_rng();
    let layer = Mlp::new_random(4, 3, 1.0, &mut rng);
    assert_eq!(layer.weights.dim(), (3, 4));
    assert_eq!(layer.biases.len(), 3);
    assert_eq!(layer.parameter_count(), 15);

    let out = layer.forward(&Array1::zeros(4));
    assert_eq!(out.len(), 3);
    // With zero inputs the output is the activated bias
    for (o, b) in out.iter().zip(layer.biases.iter()) {
        assert!((o - activate(*b)).abs() < 1e-6);
    }
}
