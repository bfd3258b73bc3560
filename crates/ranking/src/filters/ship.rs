//! Filters for the agent's ships.

use super::{eq, evaluate};
use crate::query::Filter;
use sources::Ship;

/// Keys: `is`, `type` (frame), `faction`, `system`, `role`, `status`
pub fn check_filters_ship(ship: &Ship, filters: &[Filter]) -> bool {
    evaluate(filters, |key, value| match key {
        "is" => Some(eq(value, "ship")),
        "type" => Some(ship.frame.as_ref().is_some_and(|f| eq(&f.symbol, value))),
        "faction" => Some(eq(&ship.registration.faction_symbol, value)),
        "system" => Some(eq(&ship.nav.system_symbol, value)),
        "role" => Some(eq(&ship.registration.role, value)),
        "status" => Some(eq(ship.nav.status.as_str(), value)),
        _ => None,
    })
}
