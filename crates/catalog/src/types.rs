//! Core reference types for the SpaceTraders universe.
//!
//! Systems, their waypoints and the factions change rarely during a reset,
//! so they are loaded once from disk and shared read-only afterwards.
//! Field names follow the camelCase layout of the game API documents.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Symbol of a star system, e.g. `X1-DF55`
pub type SystemSymbol = String;

/// Symbol of a waypoint, e.g. `X1-DF55-A1`
pub type WaypointSymbol = String;

/// Symbol of a faction, e.g. `COSMIC`
pub type FactionSymbol = String;

// =============================================================================
// Traits
// =============================================================================

/// A trait attached to a waypoint or a faction (`MARKETPLACE`, `SHIPYARD`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

fn has_trait(traits: &[Trait], symbol: &str) -> bool {
    traits.iter().any(|t| t.symbol.eq_ignore_ascii_case(symbol))
}

// =============================================================================
// Symbol references
// =============================================================================

/// A reference to another record: either the bare symbol or the
/// `{ "symbol": ... }` object the API nests in listings
#[derive(Deserialize)]
#[serde(untagged)]
enum SymbolRef {
    Plain(String),
    Object { symbol: String },
}

impl From<SymbolRef> for String {
    fn from(reference: SymbolRef) -> Self {
        match reference {
            SymbolRef::Plain(symbol) | SymbolRef::Object { symbol } => symbol,
        }
    }
}

fn symbol_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let references = Vec::<SymbolRef>::deserialize(deserializer)?;
    Ok(references.into_iter().map(String::from).collect())
}

fn optional_symbol<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let reference = Option::<SymbolRef>::deserialize(deserializer)?;
    Ok(reference.map(String::from))
}

// =============================================================================
// Systems and Waypoints
// =============================================================================

/// A location inside a system: planet, moon, asteroid, jump gate...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub symbol: WaypointSymbol,
    /// Empty in system listings; filled from the parent when the catalog is built
    #[serde(default)]
    pub system_symbol: SystemSymbol,
    #[serde(rename = "type")]
    pub waypoint_type: String,
    pub x: i64,
    pub y: i64,
    #[serde(default)]
    pub traits: Vec<Trait>,
    /// Faction controlling the waypoint, if any
    #[serde(default, deserialize_with = "optional_symbol")]
    pub faction: Option<FactionSymbol>,
}

impl Waypoint {
    /// Whether the waypoint carries the given trait (case-insensitive)
    pub fn has_trait(&self, symbol: &str) -> bool {
        has_trait(&self.traits, symbol)
    }
}

/// A star system together with all of its waypoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    pub symbol: SystemSymbol,
    pub sector_symbol: String,
    #[serde(rename = "type")]
    pub system_type: String,
    pub x: i64,
    pub y: i64,
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
    /// Factions with a presence in the system
    #[serde(default, deserialize_with = "symbol_list")]
    pub factions: Vec<FactionSymbol>,
}

// =============================================================================
// Factions
// =============================================================================

/// One of the playable or non-playable factions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub symbol: FactionSymbol,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Headquarters system symbol; empty when the faction has none
    #[serde(default)]
    pub headquarters: String,
    #[serde(default)]
    pub traits: Vec<Trait>,
    #[serde(default)]
    pub is_recruiting: bool,
}

impl Faction {
    /// Whether the faction carries the given trait (case-insensitive)
    pub fn has_trait(&self, symbol: &str) -> bool {
        has_trait(&self.traits, symbol)
    }
}

// =============================================================================
// Catalog - read-only reference context
// =============================================================================

/// All reference data the search engine scans on every request.
///
/// A `Catalog` is built once at startup and then shared behind an `Arc`.
/// Nothing mutates it after loading, so readers never need a lock.
///
/// Systems and factions keep their file order: the search engine relies on
/// it to break score ties deterministically.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) systems: Vec<System>,
    pub(crate) factions: Vec<Faction>,

    // Lookups into the vectors above
    pub(crate) system_index: HashMap<SystemSymbol, usize>,
    /// Waypoint symbol -> (system position, waypoint position)
    pub(crate) waypoint_index: HashMap<WaypointSymbol, (usize, usize)>,
    pub(crate) faction_index: HashMap<FactionSymbol, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All systems, in load order
    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    /// All factions, in load order
    pub fn factions(&self) -> &[Faction] {
        &self.factions
    }

    pub fn get_system(&self, symbol: &str) -> Option<&System> {
        self.system_index.get(symbol).map(|&i| &self.systems[i])
    }

    pub fn get_waypoint(&self, symbol: &str) -> Option<&Waypoint> {
        self.waypoint_index
            .get(symbol)
            .map(|&(s, w)| &self.systems[s].waypoints[w])
    }

    pub fn get_faction(&self, symbol: &str) -> Option<&Faction> {
        self.faction_index.get(symbol).map(|&i| &self.factions[i])
    }

    /// Insert a system, replacing any system with the same symbol in place
    pub fn insert_system(&mut self, system: System) {
        let position = match self.system_index.get(&system.symbol) {
            Some(&i) => {
                for old in &self.systems[i].waypoints {
                    self.waypoint_index.remove(&old.symbol);
                }
                self.systems[i] = system;
                i
            }
            None => {
                self.system_index
                    .insert(system.symbol.clone(), self.systems.len());
                self.systems.push(system);
                self.systems.len() - 1
            }
        };

        for (w, waypoint) in self.systems[position].waypoints.iter().enumerate() {
            self.waypoint_index
                .insert(waypoint.symbol.clone(), (position, w));
        }
    }

    /// Insert a faction, replacing any faction with the same symbol in place
    pub fn insert_faction(&mut self, faction: Faction) {
        match self.faction_index.get(&faction.symbol) {
            Some(&i) => self.factions[i] = faction,
            None => {
                self.faction_index
                    .insert(faction.symbol.clone(), self.factions.len());
                self.factions.push(faction);
            }
        }
    }

    /// Get counts for debugging/validation: (systems, waypoints, factions)
    pub fn counts(&self) -> (usize, usize, usize) {
        let waypoints = self.systems.iter().map(|s| s.waypoints.len()).sum();
        (self.systems.len(), waypoints, self.factions.len())
    }
}
