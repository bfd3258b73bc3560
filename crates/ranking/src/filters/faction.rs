//! Filters for factions.

use super::{eq, evaluate};
use crate::query::Filter;
use catalog::Faction;

/// Keys: `is`, `faction`, `trait`, `recruiting`
pub fn check_filters_faction(faction: &Faction, filters: &[Filter]) -> bool {
    evaluate(filters, |key, value| match key {
        "is" => Some(eq(value, "faction")),
        "faction" => Some(eq(&faction.symbol, value)),
        "trait" => Some(faction.has_trait(value)),
        "recruiting" => Some(eq(value, if faction.is_recruiting { "true" } else { "false" })),
        _ => None,
    })
}
