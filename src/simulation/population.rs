//! Storage for all live agents.
//!
//! Agents live in a generational slot map: a dense vector with a free list of
//! recycled slots. Handles stay valid until their own agent is removed, so an
//! agent can be removed while other handles taken earlier in the same tick are
//! still being walked; a stale handle simply resolves to `None`.

use geo::Point;
use slotmap::{SlotMap, new_key_type};

use super::agent::Agent;
use super::geometric_utils;

new_key_type! {
    /// Stable handle for an agent in the [`Population`].
    pub struct AgentId;
}

/// Unordered collection of live agents.
#[derive(Debug, Clone, Default)]
pub struct Population {
    agents: SlotMap<AgentId, Agent>,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty population with room for `capacity` agents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            agents: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Number of stored agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns `true` when no agents are stored.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Adds an agent and returns its handle.
    pub fn insert(&mut self, agent: Agent) -> AgentId {
        self.agents.insert(agent)
    }

    /// Removes an agent, returning it if it was present.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        self.agents.remove(id)
    }

    /// Returns `true` if `id` refers to a stored agent.
    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(id)
    }

    /// Borrows an agent.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Mutably borrows an agent.
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id)
    }

    /// Iterates over all stored agents.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent)> + '_ {
        self.agents.iter()
    }

    /// Snapshot of all current handles.
    ///
    /// Agents inserted afterwards are not part of the snapshot, and handles of
    /// agents removed afterwards resolve to `None`.
    pub fn ids(&self) -> Vec<AgentId> {
        self.agents.keys().collect()
    }

    /// Removes every agent for which `remove` returns `true`, returning the removed agents.
    pub fn drain_where(&mut self, mut remove: impl FnMut(&Agent) -> bool) -> Vec<(AgentId, Agent)> {
        let doomed: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|(_, agent)| remove(agent))
            .map(|(id, _)| id)
            .collect();
        doomed
            .into_iter()
            .filter_map(|id| self.agents.remove(id).map(|agent| (id, agent)))
            .collect()
    }

    /// Returns the agent closest to `pos` within `radius`, if any.
    pub fn nearest(&self, pos: &Point<f32>, radius: f32) -> Option<AgentId> {
        self.agents
            .iter()
            .map(|(id, agent)| (id, geometric_utils::distance(pos, &agent.pos)))
            .filter(|&(_, dist)| dist < radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Removes every agent.
    pub fn clear(&mut self) {
        self.agents.clear();
    }
}
