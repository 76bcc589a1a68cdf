use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};

use derive_new::new;

use crate::alphabet::EPSILON;
use crate::regex::nfa::Nfa;
use crate::regex::nfa::state::StateId;

/// Display name of a state in a listing: `S0`, `S1`, ...
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sid(pub usize);

impl Display for Sid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Symbol(char),
    Epsilon,
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Symbol(c) => write!(f, "{}", c),
            Label::Epsilon => write!(f, "{}", EPSILON)
        }
    }
}

#[derive(new, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Sid,
    pub label: Label,
    pub to: Sid,
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} --> {}", self.from, self.label, self.to)
    }
}

/// The edge listing of an automaton. `Display` renders the text form, which
/// is also the persisted form read back by
/// [`parse_listing`](crate::regex::listing::parse_listing).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transitions {
    pub edges: Vec<Edge>,
    pub ids: HashMap<StateId, Sid>,
    pub start: Sid,
    pub accept: Sid,
}

impl Transitions {
    pub fn sid(&self, state: StateId) -> Option<Sid> {
        self.ids.get(&state).copied()
    }
}

impl Display for Transitions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        writeln!(f)?;
        writeln!(f, "Start: {}", self.start)?;
        write!(f, "Accept: {}", self.accept)
    }
}

impl Nfa {
    /// States reachable from the start, in depth-first pre-order. Labeled
    /// targets are explored before epsilon targets.
    pub fn preorder(&self) -> Vec<StateId> {
        let mut order = vec![];
        self.extend_preorder(self.start(), &mut order, &mut HashSet::new());
        order
    }

    fn extend_preorder(&self, root: StateId, order: &mut Vec<StateId>, visited: &mut HashSet<StateId>) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            order.push(id);
            let successors: Vec<StateId> = self.state(id).successors().collect();
            stack.extend(successors.into_iter().rev().filter(|s| !visited.contains(s)));
        }
    }

    /// Lists every edge reachable from the start. An accept state the start
    /// cannot reach, and everything reachable from it, is numbered after that.
    pub fn transitions(&self) -> Transitions {
        let mut order = vec![];
        let mut visited = HashSet::new();
        self.extend_preorder(self.start(), &mut order, &mut visited);
        self.extend_preorder(self.accept(), &mut order, &mut visited);
        let ids: HashMap<StateId, Sid> = order.iter()
            .enumerate()
            .map(|(n, &id)| (id, Sid(n)))
            .collect();

        let mut edges = vec![];
        for &id in &order {
            let from = ids[&id];
            let state = self.state(id);
            for (symbol, targets) in state.transitions() {
                targets.iter().for_each(|t| edges.push(Edge::new(from, Label::Symbol(symbol), ids[t])));
            }
            state.epsilon_targets().iter()
                .for_each(|t| edges.push(Edge::new(from, Label::Epsilon, ids[t])));
        }

        Transitions { edges, start: ids[&self.start()], accept: ids[&self.accept()], ids }
    }
}
