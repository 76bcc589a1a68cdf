use std::fmt::{Display, Formatter};

use log::debug;
use rayon::prelude::*;
use typed_builder::TypedBuilder;

use crate::regex::nfa::Nfa;

#[derive(TypedBuilder, Debug, Clone)]
pub struct SuiteConfig {
    #[builder(default = true)]
    pub trim: bool,
    #[builder(default = true)]
    pub skip_blank: bool,
    #[builder(default = true)]
    pub parallel: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        SuiteConfig::builder().build()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

impl From<bool> for Outcome {
    fn from(accepted: bool) -> Self {
        if accepted { Outcome::Accepted } else { Outcome::Rejected }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Accepted => write!(f, "Accepted"),
            Outcome::Rejected => write!(f, "Rejected")
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub input: String,
    pub outcome: Outcome,
}

/// Runs every input against the same automaton. Verdicts come back in input
/// order whether or not the runs are parallel.
pub fn run_suite<'i, I>(nfa: &Nfa, inputs: I, config: &SuiteConfig) -> Vec<Verdict>
    where I: IntoIterator<Item=&'i str> {
    let inputs: Vec<&str> = inputs.into_iter()
        .map(|s| if config.trim { s.trim() } else { s })
        .filter(|s| !(config.skip_blank && s.is_empty()))
        .collect();
    debug!("running {} inputs (parallel: {})", inputs.len(), config.parallel);

    let verdict = |input: &&str| Verdict { input: input.to_string(), outcome: nfa.accepts(input).into() };
    if config.parallel {
        inputs.par_iter().map(verdict).collect()
    } else {
        inputs.iter().map(verdict).collect()
    }
}
