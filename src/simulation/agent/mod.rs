//! Agent module containing agent state and the senses feeding its brain.

mod agent;
mod kinesthesia;
mod perception;
mod proprioception;
mod sense;
mod surroundings;

// Re-export everything from the agent module
pub use agent::*;

// Re-export perception system components
pub use kinesthesia::Kinesthesia;
pub use perception::Perception;
pub use proprioception::Proprioception;
pub use sense::Sense;
pub use surroundings::Surroundings;
