//! Perception system that combines multiple senses into brain inputs.
//!
//! The perception system manages different sensory modalities and combines
//! their outputs into a single input vector for the agent's brain.

use std::fmt;

use ndarray::{Array1, s};

use super::super::brain::INPUT_SIZE;
use super::super::params::Params;
use super::super::population::{AgentId, Population};
use super::Agent;
use super::kinesthesia::Kinesthesia;
use super::proprioception::Proprioception;
use super::sense::Sense;
use super::surroundings::Surroundings;

/// Manages multiple senses and combines them into brain inputs.
///
/// The perception system:
/// 1. Queries each sense for its outputs
/// 2. Concatenates all sensory outputs in order
/// 3. Returns a single input vector for the brain
pub struct Perception {
    /// Ordered list of senses that contribute to perception
    senses: Vec<Box<dyn Sense>>,
}

impl Perception {
    /// Creates a new perception system with the given senses.
    ///
    /// # Arguments
    ///
    /// * `senses` - Vector of boxed sense implementations
    ///
    /// # Returns
    ///
    /// A new perception system that will query senses in the order given.
    pub fn new(senses: Vec<Box<dyn Sense>>) -> Self {
        Self { senses }
    }

    /// Process all senses and return combined brain inputs.
    ///
    /// # Arguments
    ///
    /// * `id` - Handle of the sensing agent
    /// * `agent` - The agent doing the sensing
    /// * `population` - All agents currently in the simulation
    /// * `params` - Simulation parameters
    ///
    /// # Returns
    ///
    /// A 1D array containing all sensory activations concatenated in order.
    pub fn perceive(
        &self,
        id: AgentId,
        agent: &Agent,
        population: &Population,
        params: &Params,
    ) -> Array1<f32> {
        let mut combined_inputs = Array1::zeros(self.total_input_size());

        let mut offset = 0;
        for sense in &self.senses {
            let sense_size = sense.input_size();
            let sense_outputs = sense.sense(id, agent, population, params);
            debug_assert_eq!(sense_outputs.len(), sense_size, "{}", sense.name());

            combined_inputs
                .slice_mut(s![offset..offset + sense_size])
                .assign(&sense_outputs);

            offset += sense_size;
        }

        combined_inputs
    }

    /// Returns the total number of brain inputs produced by all senses.
    pub fn total_input_size(&self) -> usize {
        self.senses.iter().map(|s| s.input_size()).sum()
    }

    /// Returns a reference to the senses in this perception system.
    pub fn senses(&self) -> &[Box<dyn Sense>] {
        &self.senses
    }
}

impl Default for Perception {
    /// Proprioception (inputs 0-3), surroundings (4-15) and kinesthesia (16).
    fn default() -> Self {
        let perception = Self::new(vec![
            Box::new(Proprioception::new()),
            Box::new(Surroundings::new()),
            Box::new(Kinesthesia::new()),
        ]);
        debug_assert_eq!(perception.total_input_size(), INPUT_SIZE);
        perception
    }
}

impl fmt::Debug for Perception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.senses.iter().map(|s| s.name()))
            .finish()
    }
}
