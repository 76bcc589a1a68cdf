pub mod state;
pub mod builder;
pub mod thompson;
pub mod simulate;
pub mod enumerate;

use delegate::delegate;

use crate::regex::nfa::state::{NfaState, StateId};

/// A finished automaton: an arena of states with one start and one accept
/// state. It is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    pub(crate) fn from_parts(states: Vec<NfaState>, start: StateId, accept: StateId) -> Nfa {
        Nfa { states, start, accept }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id.0]
    }

    pub fn states(&self) -> impl Iterator<Item=(StateId, &NfaState)> {
        self.states.iter().enumerate().map(|(i, s)| (StateId(i), s))
    }

    pub fn edge_count(&self) -> usize {
        self.states.iter().map(NfaState::edge_count).sum()
    }

    delegate! {
        to self.states {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }
}
