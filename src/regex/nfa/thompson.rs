use derive_new::new;
use log::trace;
use thiserror::Error;

use crate::alphabet::is_symbol;
use crate::regex::nfa::Nfa;
use crate::regex::nfa::builder::NfaBuilder;
use crate::regex::nfa::state::StateId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("operator {operator:?} at {position} is missing an operand")]
    MissingOperand { operator: char, position: usize },
    #[error("unexpected token {token:?} at {position}")]
    UnexpectedToken { token: char, position: usize },
    #[error("empty expression")]
    Empty,
    #[error("{fragments} fragments left without an operator to join them")]
    Dangling { fragments: usize },
}

/// A partially built automaton: one entry and one exit state.
#[derive(new, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub accept: StateId,
}

/// Thompson's construction over a postfix token sequence.
pub fn build(postfix: &str) -> Result<Nfa, ConstructionError> {
    let mut builder = NfaBuilder::new();
    let mut stack: Vec<Fragment> = vec![];

    for (position, token) in postfix.chars().enumerate() {
        let mut pop = || stack.pop()
            .ok_or(ConstructionError::MissingOperand { operator: token, position });
        let fragment = match token {
            '*' => star(&mut builder, pop()?),
            '+' => plus(&mut builder, pop()?),
            '?' => optional(&mut builder, pop()?),
            '|' => {
                let second = pop()?;
                let first = pop()?;
                either(&mut builder, first, second)
            }
            '.' => {
                let second = pop()?;
                let first = pop()?;
                sequence(&mut builder, first, second)
            }
            c if is_symbol(c) => literal(&mut builder, c),
            _ => return Err(ConstructionError::UnexpectedToken { token, position })
        };
        trace!("{:?} -> {:?}", token, fragment);
        stack.push(fragment);
    }

    match stack.len() {
        0 => Err(ConstructionError::Empty),
        1 => {
            let Fragment { start, accept } = stack[0];
            Ok(builder.build(start, accept))
        }
        fragments => Err(ConstructionError::Dangling { fragments })
    }
}

fn fresh(builder: &mut NfaBuilder) -> Fragment {
    Fragment::new(builder.add_state(), builder.add_state())
}

fn literal(builder: &mut NfaBuilder, symbol: char) -> Fragment {
    let fragment = fresh(builder);
    builder.add_transition(fragment.start, symbol, fragment.accept);
    fragment
}

/// Zero or more: skip the body, or enter it and loop from its exit.
fn star(builder: &mut NfaBuilder, inner: Fragment) -> Fragment {
    let outer = fresh(builder);
    builder.add_epsilon(outer.start, inner.start)
        .add_epsilon(outer.start, outer.accept)
        .add_epsilon(inner.accept, inner.start)
        .add_epsilon(inner.accept, outer.accept);
    outer
}

/// One or more: the body must be entered at least once.
fn plus(builder: &mut NfaBuilder, inner: Fragment) -> Fragment {
    let outer = fresh(builder);
    builder.add_epsilon(outer.start, inner.start)
        .add_epsilon(inner.accept, inner.start)
        .add_epsilon(inner.accept, outer.accept);
    outer
}

fn optional(builder: &mut NfaBuilder, inner: Fragment) -> Fragment {
    let outer = fresh(builder);
    builder.add_epsilon(outer.start, inner.start)
        .add_epsilon(outer.start, outer.accept)
        .add_epsilon(inner.accept, outer.accept);
    outer
}

fn either(builder: &mut NfaBuilder, first: Fragment, second: Fragment) -> Fragment {
    let outer = fresh(builder);
    builder.add_epsilon(outer.start, first.start)
        .add_epsilon(outer.start, second.start)
        .add_epsilon(first.accept, outer.accept)
        .add_epsilon(second.accept, outer.accept);
    outer
}

/// Joins the two fragments with an epsilon edge; no state is merged.
fn sequence(builder: &mut NfaBuilder, first: Fragment, second: Fragment) -> Fragment {
    builder.add_epsilon(first.accept, second.start);
    Fragment::new(first.start, second.accept)
}


#[cfg(test)]
mod tests {
    use crate::regex::nfa::thompson::{build, ConstructionError};

    #[test]
    fn literal_has_two_states_and_one_edge() {
        let nfa = build("a").unwrap();
        assert_eq!(nfa.len(), 2);
        assert_eq!(nfa.state(nfa.start()).targets('a'), &[nfa.accept()]);
        assert!(nfa.state(nfa.accept()).epsilon_targets().is_empty());
    }

    #[test]
    fn concatenation_adds_no_states() {
        let nfa = build("ab.").unwrap();
        assert_eq!(nfa.len(), 4);
        assert_eq!(nfa.edge_count(), 3);
    }

    #[test]
    fn star_loops_back() {
        let nfa = build("a*").unwrap();
        assert_eq!(nfa.len(), 4);
        assert_eq!(nfa.edge_count(), 5);
        let start = nfa.state(nfa.start());
        assert_eq!(start.epsilon_targets().len(), 2);
        assert!(start.epsilon_targets().contains(&nfa.accept()));
    }

    #[test]
    fn plus_cannot_skip_the_body() {
        let nfa = build("a+").unwrap();
        assert_eq!(nfa.edge_count(), 4);
        assert!(!nfa.state(nfa.start()).epsilon_targets().contains(&nfa.accept()));
    }

    #[test]
    fn alternation_and_optional() {
        assert_eq!(build("ab|").unwrap().len(), 6);
        assert_eq!(build("a?").unwrap().edge_count(), 4);
    }

    #[test]
    fn operand_underflow() {
        assert_eq!(build("*").unwrap_err(),
                   ConstructionError::MissingOperand { operator: '*', position: 0 });
        assert_eq!(build("a|").unwrap_err(),
                   ConstructionError::MissingOperand { operator: '|', position: 1 });
    }

    #[test]
    fn leftover_fragments() {
        assert_eq!(build("").unwrap_err(), ConstructionError::Empty);
        assert_eq!(build("ab").unwrap_err(), ConstructionError::Dangling { fragments: 2 });
    }

    #[test]
    fn unexpected_token() {
        assert_eq!(build("a(").unwrap_err(),
                   ConstructionError::UnexpectedToken { token: '(', position: 1 });
    }
}
