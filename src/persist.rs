use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::regex::Compiled;
use crate::regex::listing::{read_listing, ListingError};
use crate::regex::nfa::Nfa;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not access the save file")]
    Io(#[from] std::io::Error),
    #[error("save file is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Listing(#[from] ListingError),
    #[error("save file names {field} {saved} but the listing says {listed}")]
    Mismatch { field: &'static str, saved: String, listed: String },
}

/// The save document. `transitions` is the authoritative description of the
/// automaton; `postfix` is kept for display only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SavedNfa {
    pub postfix: String,
    pub transitions: String,
    pub start: String,
    pub accept: String,
}

impl SavedNfa {
    pub fn new(postfix: &str, nfa: &Nfa) -> SavedNfa {
        let transitions = nfa.transitions();
        SavedNfa {
            postfix: postfix.to_string(),
            transitions: transitions.to_string(),
            start: transitions.start.to_string(),
            accept: transitions.accept.to_string(),
        }
    }

    /// Rebuilds the automaton from the saved listing. The `start` and
    /// `accept` fields must name the same ids as the listing's summary lines.
    pub fn nfa(&self) -> Result<Nfa, PersistError> {
        let listed = read_listing(&self.transitions)?;
        check("start", &self.start, listed.start.to_string())?;
        check("accept", &self.accept, listed.accept.to_string())?;
        Ok(listed.nfa)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), PersistError> {
        Ok(serde_json::to_writer(writer, self)?)
    }

    pub fn from_json(json: &str) -> Result<SavedNfa, PersistError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        info!("saved automaton to {:?}", path.as_ref());
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<SavedNfa, PersistError> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let saved = serde_json::from_reader(reader)?;
        info!("loaded automaton from {:?}", path.as_ref());
        Ok(saved)
    }
}

impl From<&Compiled> for SavedNfa {
    fn from(compiled: &Compiled) -> Self {
        SavedNfa::new(&compiled.postfix, &compiled.nfa)
    }
}

fn check(field: &'static str, saved: &str, listed: String) -> Result<(), PersistError> {
    if saved == listed {
        Ok(())
    } else {
        Err(PersistError::Mismatch { field, saved: saved.to_string(), listed })
    }
}
