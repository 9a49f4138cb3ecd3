//! Single dense layer of the decision model.

use ndarray::{Array1, Array2, Zip};
use rand::Rng;

/// Largest magnitude fed into the activation function.
const ACTIVATION_LIMIT: f32 = 10.0;

/// Largest relative change a single mutation applies to a parameter.
const MUTATION_SPREAD: f32 = 0.35;

/// Bounded sigmoid-like activation mapping any input into (0, 1).
///
/// Uses the fast approximation `x / (1 + |x|)` on an input clamped to
/// `[-10, 10]`. A NaN input stays NaN.
#[inline]
pub fn activate(x: f32) -> f32 {
    let x = x.clamp(-ACTIVATION_LIMIT, ACTIVATION_LIMIT);
    0.5 * (x / (1.0 + x.abs()) + 1.0)
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// A single layer of a multi-layer perceptron.
#[derive(Debug, Clone, PartialEq)]
pub struct Mlp {
    /// Weight matrix (`output_size` × `input_size`).
    pub weights: Array2<f32>,
    /// Bias vector (`output_size`).
    pub biases: Array1<f32>,
}

impl Mlp {
    /// Creates a new layer with weights and biases drawn uniformly from `[-scale, scale]`.
    pub fn new_random<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        scale: f32,
        rng: &mut R,
    ) -> Self {
        let mut layer = Self {
            weights: Array2::from_shape_fn((output_size, input_size), |_| {
                rng.random_range(-scale..=scale)
            }),
            biases: Array1::from_shape_fn(output_size, |_| rng.random_range(-scale..=scale)),
        };
        layer.sanitize();
        layer
    }

    /// Creates a layer with every parameter set to zero.
    pub fn zeros(input_size: usize, output_size: usize) -> Self {
        Self {
            weights: Array2::zeros((output_size, input_size)),
            biases: Array1::zeros(output_size),
        }
    }

    /// Performs forward pass with the bounded activation.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut output = self.weights.dot(inputs);
        output += &self.biases;
        output.mapv_inplace(activate);
        output
    }

    /// Creates a new layer by picking every parameter from one of the parents
    /// at random, then mutating it with probability `mutation_rate`.
    pub fn crossover<R: Rng + ?Sized>(
        parent1: &Mlp,
        parent2: &Mlp,
        mutation_rate: f32,
        rng: &mut R,
    ) -> Self {
        let weights = Zip::from(&parent1.weights)
            .and(&parent2.weights)
            .map_collect(|&a, &b| inherit(a, b, mutation_rate, rng));
        let biases = Zip::from(&parent1.biases)
            .and(&parent2.biases)
            .map_collect(|&a, &b| inherit(a, b, mutation_rate, rng));

        let mut layer = Self { weights, biases };
        layer.sanitize();
        layer
    }

    /// Replaces every non-finite parameter with zero.
    pub fn sanitize(&mut self) {
        self.weights.mapv_inplace(finite_or_zero);
        self.biases.mapv_inplace(finite_or_zero);
    }

    /// Number of weights and biases in this layer.
    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }
}

fn inherit<R: Rng + ?Sized>(a: f32, b: f32, mutation_rate: f32, rng: &mut R) -> f32 {
    let value = if rng.random_bool(0.5) { a } else { b };
    if rng.random::<f32>() < mutation_rate {
        let fraction = rng.random_range(-MUTATION_SPREAD..=MUTATION_SPREAD);
        value + fraction * value.abs()
    } else {
        value
    }
}
