//! # Catalog Crate
//!
//! Reference data for the search engine: star systems with their waypoints,
//! and factions. The data is loaded once from JSON files and then only read.
//!
//! ## Main Components
//!
//! - **types**: System, Waypoint, Faction and the read-only `Catalog`
//! - **parser**: Parse the JSON listings (bare arrays or `{ "data": [...] }`)
//! - **index**: Build lookups and validate cross references
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("data/sample"))?;
//! let waypoint = catalog.get_waypoint("X1-SOL-A").unwrap();
//! println!("{} orbits in {}", waypoint.symbol, waypoint.system_symbol);
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use index::{FACTIONS_FILE, SYSTEMS_FILE};
pub use types::{
    // Type aliases
    FactionSymbol,
    SystemSymbol,
    WaypointSymbol,
    // Core types
    Catalog,
    Faction,
    System,
    Trait,
    Waypoint,
};
