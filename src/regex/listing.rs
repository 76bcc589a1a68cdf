use std::collections::HashMap;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, line_ending, multispace0, satisfy};
use nom::combinator::{all_consuming, map, map_res, value};
use nom::multi::many0;
use nom::sequence::{delimited, preceded, terminated, tuple};
use nom::IResult;
use thiserror::Error;

use crate::alphabet::{is_symbol, EPSILON};
use crate::regex::nfa::Nfa;
use crate::regex::nfa::builder::NfaBuilder;
use crate::regex::nfa::enumerate::{Edge, Label, Sid};
use crate::regex::nfa::state::StateId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("malformed transition listing at line {line}")]
    Syntax { line: usize },
    #[error("{0} does not appear in any transition")]
    UnknownState(Sid),
}

struct Listing {
    edges: Vec<Edge>,
    start: Sid,
    accept: Sid,
}

fn sid(input: &str) -> IResult<&str, Sid> {
    map(map_res(preceded(char('S'), digit1), str::parse::<usize>), Sid)(input)
}

fn label(input: &str) -> IResult<&str, Label> {
    alt((
        value(Label::Epsilon, char(EPSILON)),
        map(satisfy(is_symbol), Label::Symbol),
    ))(input)
}

fn edge(input: &str) -> IResult<&str, Edge> {
    map(
        tuple((sid, tag(" -- "), label, tag(" --> "), sid)),
        |(from, _, label, _, to)| Edge::new(from, label, to),
    )(input)
}

fn listing(input: &str) -> IResult<&str, Listing> {
    map(
        all_consuming(delimited(
            multispace0,
            tuple((
                many0(terminated(edge, line_ending)),
                preceded(multispace0, preceded(tag("Start: "), sid)),
                preceded(line_ending, preceded(tag("Accept: "), sid)),
            )),
            multispace0,
        )),
        |(edges, start, accept)| Listing { edges, start, accept },
    )(input)
}

/// An automaton rebuilt from a listing, with the start and accept ids as the
/// listing itself names them.
#[derive(Debug, Clone)]
pub struct ParsedListing {
    pub nfa: Nfa,
    pub start: Sid,
    pub accept: Sid,
}

/// Rebuilds an automaton from the text produced by
/// [`Nfa::transitions`](crate::regex::nfa::Nfa::transitions). States are
/// allocated in order of first appearance and edges are replayed in listing
/// order, so the rebuilt automaton lists back to the same text.
pub fn parse_listing(text: &str) -> Result<Nfa, ListingError> {
    read_listing(text).map(|parsed| parsed.nfa)
}

/// Like [`parse_listing`], keeping the ids of the `Start:` and `Accept:`
/// lines. Ids need not be dense or start at `S0`.
pub fn read_listing(text: &str) -> Result<ParsedListing, ListingError> {
    let (_, parsed) = listing(text).map_err(|e| {
        let rest = match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
            nom::Err::Incomplete(_) => "",
        };
        let offset = text.len() - rest.len();
        ListingError::Syntax { line: text[..offset].matches('\n').count() + 1 }
    })?;

    let mut builder = NfaBuilder::new();
    let mut states: HashMap<Sid, StateId> = HashMap::new();
    for edge in &parsed.edges {
        let from = *states.entry(edge.from).or_insert_with(|| builder.add_state());
        let to = *states.entry(edge.to).or_insert_with(|| builder.add_state());
        match edge.label {
            Label::Symbol(c) => builder.add_transition(from, c, to),
            Label::Epsilon => builder.add_epsilon(from, to),
        };
    }

    let lookup = |sid: Sid| states.get(&sid).copied().ok_or(ListingError::UnknownState(sid));
    let start = lookup(parsed.start)?;
    let accept = lookup(parsed.accept)?;
    Ok(ParsedListing { nfa: builder.build(start, accept), start: parsed.start, accept: parsed.accept })
}
