//! Regular expressions to Thompson NFAs.
//!
//! A pattern over ASCII letters and digits with `|`, `*`, `+`, `?`, grouping
//! and optional explicit `.` concatenation is validated, rewritten to postfix
//! and built into an automaton, which can then be simulated against input
//! strings, listed edge by edge, and saved to / reloaded from JSON.

pub mod alphabet;
pub mod regex;
pub mod persist;
pub mod suite;

pub use crate::regex::{compile, Compiled, Error};
pub use crate::regex::nfa::Nfa;
pub use crate::regex::nfa::enumerate::Transitions;
