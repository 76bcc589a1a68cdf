use std::collections::HashSet;

use log::debug;
use maplit::hashset;
use metrics::{histogram, increment_counter};

use crate::regex::nfa::Nfa;
use crate::regex::nfa::state::StateId;

impl Nfa {
    /// Every state reachable from `states` through epsilon edges alone,
    /// `states` included.
    pub fn epsilon_closure(&self, states: &HashSet<StateId>) -> HashSet<StateId> {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().copied().collect();

        while let Some(id) = stack.pop() {
            for &next in self.state(id).epsilon_targets() {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }
        closure
    }

    /// Union of the targets of every `symbol` edge leaving `states`.
    pub fn step(&self, states: &HashSet<StateId>, symbol: char) -> HashSet<StateId> {
        states.iter()
            .flat_map(|&id| self.state(id).targets(symbol).iter().copied())
            .collect()
    }

    pub fn simulate(&self) -> Simulation<'_> {
        Simulation::new(self)
    }

    /// Whether the automaton accepts the whole of `input`.
    pub fn accepts(&self, input: &str) -> bool {
        let mut run = self.simulate();
        run.feed(input);
        let verdict = run.is_accepting();
        increment_counter!("nfa.simulations");
        debug!("{:?} {}", input, if verdict { "accepted" } else { "rejected" });
        verdict
    }
}

/// One run of an automaton over an input, advanced a symbol at a time.
/// The automaton is only read, so any number of runs may share it.
#[derive(Debug, Clone)]
pub struct Simulation<'a> {
    nfa: &'a Nfa,
    current: HashSet<StateId>,
}

impl<'a> Simulation<'a> {
    pub fn new(nfa: &'a Nfa) -> Simulation<'a> {
        let current = nfa.epsilon_closure(&hashset! {nfa.start()});
        Simulation { nfa, current }
    }

    pub fn step(&mut self, symbol: char) -> &mut Simulation<'a> {
        if !self.current.is_empty() {
            let next = self.nfa.step(&self.current, symbol);
            self.current = self.nfa.epsilon_closure(&next);
            histogram!("nfa.active_states", self.current.len() as f64);
        }
        self
    }

    pub fn feed(&mut self, input: &str) -> &mut Simulation<'a> {
        for symbol in input.chars() {
            if self.is_dead() {
                break;
            }
            self.step(symbol);
        }
        self
    }

    pub fn is_accepting(&self) -> bool {
        self.current.contains(&self.nfa.accept())
    }

    /// No state is active; nothing fed from here on can be accepted.
    pub fn is_dead(&self) -> bool {
        self.current.is_empty()
    }

    pub fn current(&self) -> &HashSet<StateId> {
        &self.current
    }
}


#[cfg(test)]
mod tests {
    use maplit::hashset;

    use crate::regex::compile;
    use crate::regex::nfa::thompson::build;

    fn check(pattern: &str, accepted: &[&str], rejected: &[&str]) {
        let nfa = compile(pattern).unwrap().nfa;
        for input in accepted {
            assert!(nfa.accepts(input), "{} should accept {:?}", pattern, input);
        }
        for input in rejected {
            assert!(!nfa.accepts(input), "{} should reject {:?}", pattern, input);
        }
    }

    #[test]
    fn concatenation() {
        check("ab", &["ab"], &["a", "b", "", "ba", "abb"]);
    }

    #[test]
    fn star() {
        check("a*", &["", "a", "aaa"], &["b", "ab"]);
    }

    #[test]
    fn plus() {
        check("a+", &["a", "aaaa"], &[""]);
    }

    #[test]
    fn optional() {
        check("a?", &["", "a"], &["aa"]);
    }

    #[test]
    fn alternation() {
        check("a|b", &["a", "b"], &["ab", ""]);
    }

    #[test]
    fn grouped_repetition() {
        check("(ab)+", &["ab", "abab"], &["a", "aba", ""]);
        check("(ab)*c", &["c", "abc", "ababc"], &["ab", "abac"]);
    }

    #[test]
    fn repetition_followed_by_more_pattern() {
        check("a*b", &["b", "ab", "aaab"], &["", "a", "ba"]);
        check("ab+c", &["abc", "abbbc"], &["ac", "abcc"]);
    }

    #[test]
    fn textbook_example() {
        check("(a|b)*abb", &["abb", "aabb", "babb", "ababb"], &["ab", "abba", ""]);
    }

    #[test]
    fn nested_repetition() {
        check("((a)*)+", &["", "a", "aaaa"], &["b"]);
        check("(a|b?)+c", &["c", "ac", "bbac"], &["ab"]);
        check("a**", &["", "aa"], &["b"]);
    }

    #[test]
    fn digits_and_case() {
        check("A1|b2", &["A1", "b2"], &["a1", "B2", "A2"]);
    }

    #[test]
    fn unknown_symbols_reject_without_error() {
        check("ab", &[], &["a$", "é", "a b"]);
    }

    #[test]
    fn epsilon_closure_of_star_start() {
        let nfa = build("a*").unwrap();
        let closure = nfa.epsilon_closure(&hashset! {nfa.start()});
        assert!(closure.contains(&nfa.accept()));
        assert_eq!(closure.len(), 3);
    }

    #[test]
    fn simulation_stops_when_dead() {
        let nfa = build("ab.").unwrap();
        let mut run = nfa.simulate();
        run.step('x');
        assert!(run.is_dead());
        run.feed("ab");
        assert!(!run.is_accepting());

        let mut run = nfa.simulate();
        run.step('a').step('b');
        assert!(run.is_accepting());
    }
}
