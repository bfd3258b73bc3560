//! Filters for the agent's contracts.

use super::{eq, evaluate};
use crate::query::Filter;
use sources::Contract;

/// Keys: `is`, `type`, `status`
pub fn check_filters_contract(contract: &Contract, filters: &[Filter]) -> bool {
    evaluate(filters, |key, value| match key {
        "is" => Some(eq(value, "contract")),
        "type" => Some(eq(&contract.contract_type, value)),
        "status" => Some(eq(contract.status().as_str(), value)),
        _ => None,
    })
}
