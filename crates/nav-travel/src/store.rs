//! Per-agent persistent store.

use rustc_hash::FxHashMap;

use nav_core::AgentId;

use crate::{NavigationState, StoredState};

/// Where navigation keeps each agent's [`NavigationState`] between ticks.
///
/// `get` may return either schema; navigation migrates on load and writes
/// back the current shape.  Only a path edit ([`Traveler::backstep`]) goes
/// through `insert` and keeps the stored shape.
///
/// [`Traveler::backstep`]: crate::Traveler::backstep
pub trait StateStore {
    fn get(&self, agent: AgentId) -> Option<StoredState>;

    /// Store a raw record of either shape.
    fn insert(&mut self, agent: AgentId, stored: StoredState);

    fn set(&mut self, agent: AgentId, state: NavigationState) {
        self.insert(agent, StoredState::Current(state));
    }
}

/// In-process store keyed by [`AgentId`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStateStore {
    states: FxHashMap<AgentId, StoredState>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&mut self, agent: AgentId) -> Option<StoredState> {
        self.states.remove(&agent)
    }

    /// The stored state if it is already in the current shape.
    pub fn current(&self, agent: AgentId) -> Option<&NavigationState> {
        match self.states.get(&agent)? {
            StoredState::Current(state) => Some(state),
            StoredState::Legacy(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, agent: AgentId) -> Option<StoredState> {
        self.states.get(&agent).cloned()
    }

    fn insert(&mut self, agent: AgentId, stored: StoredState) {
        self.states.insert(agent, stored);
    }
}
