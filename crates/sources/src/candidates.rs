//! Candidate enumeration in fetch order.
//!
//! Reference data comes first: each system immediately followed by its own
//! waypoints, then the factions. Live ships and contracts follow. Ranking
//! sorts stably, so this order is what breaks score ties.

use crate::records::{Contract, Ship};
use crate::types::CandidateRef;
use catalog::Catalog;

/// Systems (each followed by its waypoints), then factions
pub fn reference_candidates(catalog: &Catalog) -> impl Iterator<Item = CandidateRef<'_>> {
    let systems = catalog.systems().iter().flat_map(|system| {
        std::iter::once(CandidateRef::System(system))
            .chain(system.waypoints.iter().map(CandidateRef::Waypoint))
    });
    let factions = catalog.factions().iter().map(CandidateRef::Faction);
    systems.chain(factions)
}

/// Ships, then contracts
pub fn live_candidates<'a>(
    ships: &'a [Ship],
    contracts: &'a [Contract],
) -> impl Iterator<Item = CandidateRef<'a>> {
    ships
        .iter()
        .map(CandidateRef::Ship)
        .chain(contracts.iter().map(CandidateRef::Contract))
}
