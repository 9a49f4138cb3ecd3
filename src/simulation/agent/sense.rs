//! Abstract sense trait for agent perception.
//!
//! Senses collect information from the environment and convert it into
//! neural network inputs for the agent's brain.

use ndarray::Array1;

use super::super::params::Params;
use super::super::population::{AgentId, Population};
use super::Agent;

/// Trait for the sensory modalities an agent uses to perceive its environment.
///
/// Each sense returns a vector of activations that become part of the brain
/// inputs. Senses are pure: they never modify the agent or the population.
pub trait Sense: Sync {
    /// Process sensory information and return neural network inputs.
    ///
    /// # Arguments
    ///
    /// * `id` - Handle of the sensing agent, used to exclude it from scans
    /// * `agent` - The agent doing the sensing
    /// * `population` - All agents currently in the simulation
    /// * `params` - Simulation parameters
    ///
    /// # Returns
    ///
    /// A 1D array of exactly `input_size()` finite activations.
    fn sense(
        &self,
        id: AgentId,
        agent: &Agent,
        population: &Population,
        params: &Params,
    ) -> Array1<f32>;

    /// Returns the number of neural network inputs this sense produces.
    fn input_size(&self) -> usize;

    /// Returns a human-readable name for this sense.
    fn name(&self) -> &'static str;
}
