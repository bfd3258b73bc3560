//! Filters for star systems.

use super::{eq, evaluate};
use crate::query::Filter;
use catalog::System;

/// Keys: `is`, `type`, `system`, `sector`
pub fn check_filters_system(system: &System, filters: &[Filter]) -> bool {
    evaluate(filters, |key, value| match key {
        "is" => Some(eq(value, "system")),
        "type" => Some(eq(&system.system_type, value)),
        "system" => Some(eq(&system.symbol, value)),
        "sector" => Some(eq(&system.sector_symbol, value)),
        _ => None,
    })
}
