//! Catalog building and validation.
//!
//! Reads both reference files in parallel, assembles the lookup tables and
//! checks that the records hang together before anything is searched.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument, warn};

/// File holding the system listing, waypoints nested
pub const SYSTEMS_FILE: &str = "systems.json";

/// File holding the faction listing
pub const FACTIONS_FILE: &str = "factions.json";

impl Catalog {
    /// Load the reference catalog from a data directory
    ///
    /// Steps:
    /// 1. Parse systems.json and factions.json in parallel
    /// 2. Build the symbol lookups, rejecting duplicates
    /// 3. Validate cross references
    #[instrument(skip_all, fields(dir = %data_dir.display()))]
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let systems_path = data_dir.join(SYSTEMS_FILE);
        let factions_path = data_dir.join(FACTIONS_FILE);

        let (systems, factions) = rayon::join(
            || parser::parse_systems(&systems_path),
            || parser::parse_factions(&factions_path),
        );
        let systems = systems?;
        let factions = factions?;

        let catalog = Self::from_parts(systems, factions)?;
        catalog.validate()?;

        let (systems, waypoints, factions) = catalog.counts();
        info!(systems, waypoints, factions, "catalog loaded");
        Ok(catalog)
    }

    /// Build a catalog from already parsed records, keeping their order
    ///
    /// Unlike `insert_system`/`insert_faction`, a repeated symbol is an error.
    /// Waypoints without a system symbol take their parent's.
    pub fn from_parts(systems: Vec<System>, factions: Vec<Faction>) -> Result<Self> {
        let mut catalog = Catalog::new();

        for mut system in systems {
            if catalog.system_index.contains_key(&system.symbol) {
                return Err(CatalogError::DuplicateSymbol {
                    entity: "System".to_string(),
                    symbol: system.symbol,
                });
            }
            if let Some(waypoint) = system
                .waypoints
                .iter()
                .find(|w| catalog.waypoint_index.contains_key(&w.symbol))
            {
                return Err(CatalogError::DuplicateSymbol {
                    entity: "Waypoint".to_string(),
                    symbol: waypoint.symbol.clone(),
                });
            }
            for waypoint in &mut system.waypoints {
                if waypoint.system_symbol.is_empty() {
                    waypoint.system_symbol = system.symbol.clone();
                }
            }
            catalog.insert_system(system);
        }

        for faction in factions {
            if catalog.faction_index.contains_key(&faction.symbol) {
                return Err(CatalogError::DuplicateSymbol {
                    entity: "Faction".to_string(),
                    symbol: faction.symbol,
                });
            }
            catalog.insert_faction(faction);
        }

        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// A waypoint must belong to the system it is nested in. Faction
    /// references that point outside the catalog only produce a warning:
    /// the game lists factions in systems long before they are published.
    pub fn validate(&self) -> Result<()> {
        let mut unknown: HashSet<&str> = HashSet::new();

        for system in &self.systems {
            for waypoint in &system.waypoints {
                if waypoint.system_symbol != system.symbol {
                    return Err(CatalogError::ValidationError(format!(
                        "waypoint {} is nested in {} but names system {}",
                        waypoint.symbol, system.symbol, waypoint.system_symbol
                    )));
                }
                if let Some(faction) = &waypoint.faction {
                    if !self.faction_index.contains_key(faction) {
                        unknown.insert(faction);
                    }
                }
            }
            for faction in &system.factions {
                if !self.faction_index.contains_key(faction) {
                    unknown.insert(faction);
                }
            }
        }

        for faction in &self.factions {
            if !faction.headquarters.is_empty()
                && !self.system_index.contains_key(&faction.headquarters)
            {
                warn!(
                    faction = %faction.symbol,
                    hq = %faction.headquarters,
                    "headquarters not in catalog"
                );
            }
        }

        if !unknown.is_empty() {
            warn!(count = unknown.len(), "systems reference factions missing from the catalog");
        }
        Ok(())
    }
}
