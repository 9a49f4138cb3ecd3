//! Neural network decision model for agent brains.
//!
//! A fixed two-layer perceptron maps the 17 sensory inputs to two movement
//! outputs, and supports the genetic operations used on reproduction.

use ndarray::Array1;
use rand::Rng;

pub mod mlp;

pub use mlp::{Mlp, activate};

/// Number of sensory inputs.
pub const INPUT_SIZE: usize = 17;
/// Number of hidden units.
pub const HIDDEN_SIZE: usize = 10;
/// Number of outputs (x and y movement).
pub const OUTPUT_SIZE: usize = 2;

/// Output meaning "stay put" on an axis.
pub const NEUTRAL_OUTPUT: f32 = 0.5;

/// Range of freshly initialized weights and biases.
const INIT_SCALE: f32 = 1.0;

/// Neural network brain controlling an agent's movement.
///
/// Every brain is exclusively owned by one agent; `Clone` is a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Brain {
    /// Input to hidden layer.
    pub hidden: Mlp,
    /// Hidden to output layer.
    pub output: Mlp,
}

impl Brain {
    /// Creates a new brain with weights and biases drawn uniformly from `[-1, 1]`.
    pub fn new_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hidden = Mlp::new_random(INPUT_SIZE, HIDDEN_SIZE, INIT_SCALE, rng);
        let output = Mlp::new_random(HIDDEN_SIZE, OUTPUT_SIZE, INIT_SCALE, rng);
        Self { hidden, output }
    }

    /// Creates a brain whose parameters are all zero. Used for grass, which never thinks.
    pub fn zeros() -> Self {
        Self {
            hidden: Mlp::zeros(INPUT_SIZE, HIDDEN_SIZE),
            output: Mlp::zeros(HIDDEN_SIZE, OUTPUT_SIZE),
        }
    }

    /// Runs a forward pass and returns the `(dx, dy)` movement decision.
    ///
    /// Both values are finite and within `[0, 1]`; a non-finite result on
    /// either axis yields the neutral `(0.5, 0.5)`.
    #[inline]
    pub fn think(&self, inputs: &Array1<f32>) -> (f32, f32) {
        debug_assert_eq!(inputs.len(), INPUT_SIZE);
        let hidden = self.hidden.forward(inputs);
        let output = self.output.forward(&hidden);

        let (dx, dy) = (output[0], output[1]);
        if dx.is_finite() && dy.is_finite() {
            (dx, dy)
        } else {
            (NEUTRAL_OUTPUT, NEUTRAL_OUTPUT)
        }
    }

    /// Creates an offspring brain: every parameter comes from either parent
    /// with equal probability and is then mutated with probability `mutation_rate`.
    ///
    /// The result shares no storage with either parent.
    pub fn crossover<R: Rng + ?Sized>(
        parent1: &Brain,
        parent2: &Brain,
        mutation_rate: f32,
        rng: &mut R,
    ) -> Self {
        Self {
            hidden: Mlp::crossover(&parent1.hidden, &parent2.hidden, mutation_rate, rng),
            output: Mlp::crossover(&parent1.output, &parent2.output, mutation_rate, rng),
        }
    }

    /// Flattens all weights and biases into a single vector.
    pub fn to_flat_vector(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(self.parameter_count());
        for layer in [&self.hidden, &self.output] {
            flat.extend(layer.weights.iter().copied());
            flat.extend(layer.biases.iter().copied());
        }
        flat
    }

    /// Total number of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.hidden.parameter_count() + self.output.parameter_count()
    }
}
