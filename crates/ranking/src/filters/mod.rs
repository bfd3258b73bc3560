//! Filter evaluators, one per candidate kind.
//!
//! Every evaluator maps a filter key to a yes/no answer for its kind, or to
//! `None` when the key means nothing for that kind. The shared combining
//! rules live in [`evaluate`]:
//!
//! - inert and irrelevant filters are skipped
//! - include filters sharing a key are OR-ed, different keys are AND-ed
//! - any matching exclude filter rejects the candidate
//!
//! With no filters at all, every candidate passes.

pub mod contract;
pub mod faction;
pub mod ship;
pub mod system;
pub mod waypoint;

pub use contract::check_filters_contract;
pub use faction::check_filters_faction;
pub use ship::check_filters_ship;
pub use system::check_filters_system;
pub use waypoint::check_filters_waypoint;

use crate::query::{Filter, FilterOp};
use sources::CandidateRef;

/// Check a candidate of any kind against the filters
pub fn check_filters(candidate: CandidateRef<'_>, filters: &[Filter]) -> bool {
    match candidate {
        CandidateRef::System(s) => check_filters_system(s, filters),
        CandidateRef::Waypoint(w) => check_filters_waypoint(w, filters),
        CandidateRef::Faction(f) => check_filters_faction(f, filters),
        CandidateRef::Ship(s) => check_filters_ship(s, filters),
        CandidateRef::Contract(c) => check_filters_contract(c, filters),
    }
}

pub(crate) fn evaluate<F>(filters: &[Filter], matches: F) -> bool
where
    F: Fn(&str, &str) -> Option<bool>,
{
    // (key, any include with this key matched)
    let mut includes: Vec<(&str, bool)> = Vec::new();

    for filter in filters.iter().filter(|f| !f.is_inert()) {
        let Some(hit) = matches(&filter.key, &filter.value) else {
            continue;
        };
        match filter.op {
            FilterOp::Exclude if hit => return false,
            FilterOp::Exclude => {}
            FilterOp::Include => {
                let key = filter.key.as_str();
                match includes.iter_mut().find(|(k, _)| *k == key) {
                    Some(entry) => entry.1 |= hit,
                    None => includes.push((key, hit)),
                }
            }
        }
    }

    includes.iter().all(|&(_, hit)| hit)
}

pub(crate) fn eq(actual: &str, wanted: &str) -> bool {
    actual.eq_ignore_ascii_case(wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pretend kind: knows "color" (red) and "size" (big)
    fn matcher(key: &str, value: &str) -> Option<bool> {
        match key {
            "color" => Some(eq(value, "red")),
            "size" => Some(eq(value, "big")),
            _ => None,
        }
    }

    #[test]
    fn test_no_filters_pass() {
        assert!(evaluate(&[], matcher));
    }

    #[test]
    fn test_same_key_is_or() {
        let filters = vec![Filter::include("color", "blue"), Filter::include("color", "RED")];
        assert!(evaluate(&filters, matcher));
    }

    #[test]
    fn test_different_keys_are_and() {
        let filters = vec![Filter::include("color", "red"), Filter::include("size", "small")];
        assert!(!evaluate(&filters, matcher));
    }

    #[test]
    fn test_exclude_rejects() {
        let filters = vec![Filter::exclude("color", "red")];
        assert!(!evaluate(&filters, matcher));

        let filters = vec![Filter::exclude("color", "blue")];
        assert!(evaluate(&filters, matcher));
    }

    #[test]
    fn test_irrelevant_and_inert_skipped() {
        let filters = vec![
            Filter::include("shape", "round"),
            Filter::include("color", ""),
            Filter::include("", "red"),
        ];
        assert!(evaluate(&filters, matcher));
    }
}
