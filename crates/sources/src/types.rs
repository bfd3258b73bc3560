//! The searchable candidate model.
//!
//! Every entity the engine can return is one variant of a closed union.
//! Ranking works on `CandidateRef`, which borrows from the catalog and the
//! fetched records; only the page handed back to the caller is turned into
//! owned `Candidate` values.

use catalog::{Faction, System, Waypoint};
use serde::Serialize;
use std::fmt;

use crate::records::{Contract, Ship};

/// Entity kind of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    System,
    Waypoint,
    Faction,
    Ship,
    Contract,
}

impl CandidateKind {
    /// Name used by the `is:` filter
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateKind::System => "system",
            CandidateKind::Waypoint => "waypoint",
            CandidateKind::Faction => "faction",
            CandidateKind::Ship => "ship",
            CandidateKind::Contract => "contract",
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of a candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CandidateRef<'a> {
    System(&'a System),
    Waypoint(&'a Waypoint),
    Faction(&'a Faction),
    Ship(&'a Ship),
    Contract(&'a Contract),
}

impl<'a> CandidateRef<'a> {
    pub fn kind(&self) -> CandidateKind {
        match self {
            CandidateRef::System(_) => CandidateKind::System,
            CandidateRef::Waypoint(_) => CandidateKind::Waypoint,
            CandidateRef::Faction(_) => CandidateKind::Faction,
            CandidateRef::Ship(_) => CandidateKind::Ship,
            CandidateRef::Contract(_) => CandidateKind::Contract,
        }
    }

    /// Identifying string the relevance score is computed on
    pub fn key(&self) -> &'a str {
        match self {
            CandidateRef::System(s) => &s.symbol,
            CandidateRef::Waypoint(w) => &w.symbol,
            CandidateRef::Faction(f) => &f.symbol,
            CandidateRef::Ship(s) => &s.symbol,
            CandidateRef::Contract(c) => &c.id,
        }
    }

    /// Secondary string only consulted by the pre-filter
    pub fn alternate_key(&self) -> Option<&'a str> {
        match self {
            CandidateRef::Faction(f) => Some(&f.name),
            _ => None,
        }
    }

    pub fn to_candidate(&self) -> Candidate {
        match *self {
            CandidateRef::System(s) => Candidate::System(s.clone()),
            CandidateRef::Waypoint(w) => Candidate::Waypoint(w.clone()),
            CandidateRef::Faction(f) => Candidate::Faction(f.clone()),
            CandidateRef::Ship(s) => Candidate::Ship(s.clone()),
            CandidateRef::Contract(c) => Candidate::Contract(c.clone()),
        }
    }
}

/// Owned candidate, as returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum Candidate {
    System(System),
    Waypoint(Waypoint),
    Faction(Faction),
    Ship(Ship),
    Contract(Contract),
}

impl Candidate {
    pub fn view(&self) -> CandidateRef<'_> {
        match self {
            Candidate::System(s) => CandidateRef::System(s),
            Candidate::Waypoint(w) => CandidateRef::Waypoint(w),
            Candidate::Faction(f) => CandidateRef::Faction(f),
            Candidate::Ship(s) => CandidateRef::Ship(s),
            Candidate::Contract(c) => CandidateRef::Contract(c),
        }
    }

    pub fn kind(&self) -> CandidateKind {
        self.view().kind()
    }

    pub fn key(&self) -> &str {
        self.view().key()
    }
}
