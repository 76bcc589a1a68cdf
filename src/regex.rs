pub mod validate;
pub mod concat;
pub mod postfix;
pub mod nfa;
pub mod listing;

use log::debug;
use thiserror::Error;

use crate::regex::concat::insert_concat;
use crate::regex::nfa::Nfa;
use crate::regex::nfa::thompson::{build, ConstructionError};
use crate::regex::postfix::to_postfix;
use crate::regex::validate::{validate, ValidationError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid regex: {0}")]
    Construction(#[from] ConstructionError),
}

/// A pattern taken through the whole pipeline.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub pattern: String,
    pub postfix: String,
    pub nfa: Nfa,
}

/// Validates `pattern`, rewrites it to postfix and builds its automaton.
pub fn compile(pattern: &str) -> Result<Compiled, Error> {
    validate(pattern)?;
    let explicit = insert_concat(pattern);
    let postfix = to_postfix(&explicit);
    debug!("{:?} -> {:?} -> {:?}", pattern, explicit, postfix);

    let nfa = build(&postfix)?;
    debug!("{:?}: {} states, {} edges", pattern, nfa.len(), nfa.edge_count());
    Ok(Compiled { pattern: pattern.to_string(), postfix, nfa })
}
