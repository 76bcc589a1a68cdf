use metrics::counter;

use crate::regex::nfa::Nfa;
use crate::regex::nfa::state::{NfaState, StateId};

/// Sole owner of the state arena while an automaton is being put together.
/// States and edges can only be added; [`NfaBuilder::build`] hands the arena
/// over to an immutable [`Nfa`].
#[derive(Default, Debug)]
pub struct NfaBuilder {
    states: Vec<NfaState>,
}

impl NfaBuilder {
    pub fn new() -> NfaBuilder {
        NfaBuilder { states: vec![] }
    }

    pub fn add_state(&mut self) -> StateId {
        self.states.push(NfaState::default());
        StateId(self.states.len() - 1)
    }

    pub fn add_transition(&mut self, from: StateId, symbol: char, to: StateId) -> &mut NfaBuilder {
        self.states[from.0].add_transition(symbol, to);
        self
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId) -> &mut NfaBuilder {
        self.states[from.0].add_epsilon(to);
        self
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn build(self, start: StateId, accept: StateId) -> Nfa {
        counter!("nfa.states_created", self.states.len() as u64);
        Nfa::from_parts(self.states, start, accept)
    }
}
