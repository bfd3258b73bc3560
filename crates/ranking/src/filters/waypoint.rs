//! Filters for waypoints.

use super::{eq, evaluate};
use crate::query::Filter;
use catalog::Waypoint;

/// Keys: `is`, `type`, `system`, `trait`
pub fn check_filters_waypoint(waypoint: &Waypoint, filters: &[Filter]) -> bool {
    evaluate(filters, |key, value| match key {
        "is" => Some(eq(value, "waypoint")),
        "type" => Some(eq(&waypoint.waypoint_type, value)),
        "system" => Some(eq(&waypoint.system_symbol, value)),
        "trait" => Some(waypoint.has_trait(value)),
        _ => None,
    })
}
