//! Candidate scoring and ordering.
//!
//! Per candidate: pre-filter on `quick_weight` against the kind's threshold,
//! then the filter evaluators, then the full `weight`. Survivors are sorted
//! by score, highest first, with ties left in enumeration order.

use crate::config::SearchConfig;
use crate::filters::check_filters;
use crate::query::ParsedQuery;
use crate::scorer::{quick_weight, weight};
use sources::CandidateRef;
use tracing::debug;

/// A candidate with its full relevance score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub candidate: CandidateRef<'a>,
    pub score: f64,
}

/// Score one candidate; `None` when pruned or filtered out
pub fn score_candidate(
    query: &ParsedQuery,
    candidate: CandidateRef<'_>,
    config: &SearchConfig,
) -> Option<f64> {
    let threshold = config.quick_thresholds.for_kind(candidate.kind());
    let key = candidate.key();

    let passes_quick = quick_weight(&query.text, key) > threshold
        || candidate
            .alternate_key()
            .is_some_and(|alt| quick_weight(&query.text, alt) > threshold);
    if !passes_quick || !check_filters(candidate, &query.filters) {
        return None;
    }

    Some(weight(&query.text, key))
}

/// Score every candidate of the iterator, keeping enumeration order
pub fn scan<'a, I>(
    query: &ParsedQuery,
    candidates: I,
    config: &SearchConfig,
) -> Vec<ScoredCandidate<'a>>
where
    I: IntoIterator<Item = CandidateRef<'a>>,
{
    let mut seen = 0usize;
    let scored: Vec<ScoredCandidate<'a>> = candidates
        .into_iter()
        .inspect(|_| seen += 1)
        .filter_map(|candidate| {
            score_candidate(query, candidate, config)
                .map(|score| ScoredCandidate { candidate, score })
        })
        .collect();

    debug!(seen, scored = scored.len(), "scan complete");
    scored
}

/// Drop scores at or below the cutoff, then sort descending (stable)
pub fn rank(mut scored: Vec<ScoredCandidate<'_>>, cutoff: f64) -> Vec<ScoredCandidate<'_>> {
    scored.retain(|s| s.score > cutoff);
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Faction;
    use sources::{Contract, NavStatus, Ship, ShipNav, ShipRegistration};

    fn contract(id: &str) -> Contract {
        Contract {
            id: id.to_string(),
            faction_symbol: "COSMIC".to_string(),
            contract_type: "TRANSPORT".to_string(),
            accepted: false,
            fulfilled: false,
        }
    }

    fn ship(symbol: &str) -> Ship {
        Ship {
            symbol: symbol.to_string(),
            registration: ShipRegistration {
                name: symbol.to_string(),
                faction_symbol: "COSMIC".to_string(),
                role: "COMMAND".to_string(),
            },
            nav: ShipNav {
                system_symbol: "X1-SOL".to_string(),
                waypoint_symbol: "X1-SOL-A".to_string(),
                status: NavStatus::Docked,
            },
            frame: None,
        }
    }

    fn faction(symbol: &str, name: &str) -> Faction {
        Faction {
            symbol: symbol.to_string(),
            name: name.to_string(),
            description: String::new(),
            headquarters: String::new(),
            traits: vec![],
            is_recruiting: false,
        }
    }

    fn scored_contract(contract: &Contract, score: f64) -> ScoredCandidate<'_> {
        ScoredCandidate {
            candidate: CandidateRef::Contract(contract),
            score,
        }
    }

    #[test]
    fn test_rank_sorts_and_cuts() {
        let (a, b, c, d) = (contract("a"), contract("b"), contract("c"), contract("d"));
        let scored = vec![
            scored_contract(&a, -0.5),
            scored_contract(&b, 0.2),
            scored_contract(&c, 0.9),
            scored_contract(&d, 0.2),
        ];

        let ranked = rank(scored, -0.5);
        let keys: Vec<&str> = ranked.iter().map(|s| s.candidate.key()).collect();

        // ties keep insertion order; -0.5 itself is dropped
        assert_eq!(keys, vec!["c", "b", "d"]);
    }

    #[test]
    fn test_rank_drops_nan() {
        let a = contract("a");

        assert!(rank(vec![scored_contract(&a, f64::NAN)], -0.5).is_empty());
    }

    #[test]
    fn test_filters_applied_after_prefilter() {
        let config = SearchConfig::default();
        let s = ship("STARCHART-1");
        let c = contract("clm0n4k8r0001");

        let query = ParsedQuery::parse("is:ship");
        assert_eq!(score_candidate(&query, CandidateRef::Ship(&s), &config), Some(1.0));
        assert_eq!(score_candidate(&query, CandidateRef::Contract(&c), &config), None);
    }

    #[test]
    fn test_faction_passes_prefilter_on_name() {
        let config = SearchConfig::default();
        let query = ParsedQuery::parse("zzz");
        let named = faction("COSMIC", "Zzz League");
        let unnamed = faction("COSMIC", "");

        // the name clears the threshold, the symbol is what gets scored
        assert_eq!(score_candidate(&query, CandidateRef::Faction(&named), &config), Some(-1.0));
        assert_eq!(score_candidate(&query, CandidateRef::Faction(&unnamed), &config), None);
    }

    #[test]
    fn test_scan_keeps_order() {
        let config = SearchConfig::default();
        let ships = vec![ship("STARCHART-2"), ship("STARCHART-1")];
        let query = ParsedQuery::parse("starchart");

        let scored = scan(&query, ships.iter().map(CandidateRef::Ship), &config);
        let keys: Vec<&str> = scored.iter().map(|s| s.candidate.key()).collect();
        assert_eq!(keys, vec!["STARCHART-2", "STARCHART-1"]);
    }
}
