use std::fmt::{Debug, Formatter};

/// Index of a state inside the arena of the [`Nfa`](crate::regex::nfa::Nfa)
/// that owns it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Debug for StateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// A node of the automaton. Outgoing edges keep their insertion order and
/// never repeat the same target under the same label.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct NfaState {
    transitions: Vec<(char, Vec<StateId>)>,
    epsilon: Vec<StateId>,
}

impl NfaState {
    pub(crate) fn add_transition(&mut self, symbol: char, target: StateId) {
        match self.transitions.iter_mut().find(|(c, _)| *c == symbol) {
            Some((_, targets)) => {
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
            None => self.transitions.push((symbol, vec![target]))
        }
    }

    pub(crate) fn add_epsilon(&mut self, target: StateId) {
        if !self.epsilon.contains(&target) {
            self.epsilon.push(target);
        }
    }

    /// Labeled edges, grouped by symbol in the order the symbols were first seen.
    pub fn transitions(&self) -> impl Iterator<Item=(char, &[StateId])> {
        self.transitions.iter().map(|(c, targets)| (*c, targets.as_slice()))
    }

    /// Targets reached by reading `symbol`; empty when there is no such edge.
    pub fn targets(&self, symbol: char) -> &[StateId] {
        self.transitions.iter()
            .find(|(c, _)| *c == symbol)
            .map(|(_, targets)| targets.as_slice())
            .unwrap_or(&[])
    }

    pub fn epsilon_targets(&self) -> &[StateId] {
        &self.epsilon
    }

    /// All successors in traversal order: labeled targets first, then epsilon targets.
    pub fn successors(&self) -> impl Iterator<Item=StateId> + '_ {
        self.transitions.iter()
            .flat_map(|(_, targets)| targets.iter().copied())
            .chain(self.epsilon.iter().copied())
    }

    pub fn edge_count(&self) -> usize {
        self.transitions.iter().map(|(_, t)| t.len()).sum::<usize>() + self.epsilon.len()
    }
}

impl Debug for NfaState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("transitions", &self.transitions)
            .field("epsilon", &self.epsilon)
            .finish()
    }
}
