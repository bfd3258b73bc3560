//! # Search Orchestrator
//!
//! This module runs one search request end to end:
//! 1. Parse the raw query into free text and filters
//! 2. Fetch the agent's ships, then contracts, from the game client
//! 3. Scan the reference catalog (systems with their waypoints, factions)
//! 4. Scan the live records (ships, contracts)
//! 5. Rank everything, cut at the inclusion threshold and slice the page
//!
//! Nothing is shared between requests except the read-only catalog.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use tracing::{debug, info, instrument};

use catalog::Catalog;
use ranking::{
    PageEntry, ParsedQuery, SearchConfig, page_index, page_slice, rank, scan, total_pages,
};
use sources::{Candidate, GameClient, Session, live_candidates, reference_candidates};

fn as_millis<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

/// One result row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub candidate: Candidate,
    pub score: f64,
}

/// Wall time of each search stage
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SearchTimings {
    #[serde(serialize_with = "as_millis")]
    pub parse: Duration,
    #[serde(serialize_with = "as_millis")]
    pub live_fetch: Duration,
    #[serde(serialize_with = "as_millis")]
    pub reference_scan: Duration,
    #[serde(serialize_with = "as_millis")]
    pub live_scan: Duration,
    #[serde(serialize_with = "as_millis")]
    pub rank: Duration,
}

/// Everything the search page renders
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Hits of the requested page, best first
    pub results: Vec<SearchHit>,
    pub page_index: Vec<PageEntry>,
    pub total_pages: usize,
    pub total_matches: usize,
    pub page: usize,
    #[serde(serialize_with = "as_millis")]
    pub elapsed: Duration,
    pub timings: SearchTimings,
}

/// Runs searches against a shared catalog and a game client
pub struct SearchOrchestrator<C> {
    catalog: Arc<Catalog>,
    client: C,
    config: SearchConfig,
}

impl<C: GameClient> SearchOrchestrator<C> {
    /// Create an orchestrator with the default search configuration
    pub fn new(catalog: Arc<Catalog>, client: C) -> Self {
        Self {
            catalog,
            client,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Main entry point: search every candidate kind
    ///
    /// # Arguments
    /// * `session` - Passed through to the game client
    /// * `query` - Raw search string; `None` searches by filters alone
    /// * `page` - 1-based page number; out-of-range pages come back empty
    #[instrument(skip(self, session))]
    pub async fn search(
        &self,
        session: &Session,
        query: Option<&str>,
        page: usize,
    ) -> Result<SearchResponse> {
        let start_time = Instant::now();
        let mut timings = SearchTimings::default();

        let stage = Instant::now();
        let query = ParsedQuery::parse(query.unwrap_or(""));
        timings.parse = stage.elapsed();
        debug!(text = %query.text, filters = query.filters.len(), "parsed query");

        let stage = Instant::now();
        let ships = self
            .client
            .list_all_ships(session)
            .await
            .context("Failed to fetch ships")?;
        let contracts = self
            .client
            .list_all_contracts(session)
            .await
            .context("Failed to fetch contracts")?;
        timings.live_fetch = stage.elapsed();

        let stage = Instant::now();
        let mut scored = scan(&query, reference_candidates(&self.catalog), &self.config);
        timings.reference_scan = stage.elapsed();

        let stage = Instant::now();
        scored.extend(scan(&query, live_candidates(&ships, &contracts), &self.config));
        timings.live_scan = stage.elapsed();

        let stage = Instant::now();
        let ranked = rank(scored, self.config.cutoff);
        let total_matches = ranked.len();
        let total_pages = total_pages(total_matches, self.config.page_size);
        let results: Vec<SearchHit> = page_slice(&ranked, page, self.config.page_size)
            .iter()
            .map(|hit| SearchHit {
                candidate: hit.candidate.to_candidate(),
                score: hit.score,
            })
            .collect();
        let page_index = page_index(page, total_pages);
        timings.rank = stage.elapsed();

        debug!(
            "Stage timings: parse={:.2?} fetch={:.2?} reference={:.2?} live={:.2?} rank={:.2?}",
            timings.parse,
            timings.live_fetch,
            timings.reference_scan,
            timings.live_scan,
            timings.rank
        );

        let elapsed = start_time.elapsed();
        info!(
            "Search matched {} candidates ({} pages), returning {} in {:.2?}",
            total_matches,
            total_pages,
            results.len(),
            elapsed
        );

        Ok(SearchResponse {
            results,
            page_index,
            total_pages,
            total_matches,
            page,
            elapsed,
            timings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Faction, System, Waypoint};
    use ranking::PageEntry::Page;
    use sources::client::Result as ClientResult;
    use sources::{
        CandidateKind, ClientError, Contract, NavStatus, Ship, ShipNav, ShipRegistration,
    };

    // ============================================================================
    // Test clients
    // ============================================================================

    #[derive(Default)]
    struct StaticClient {
        ships: Vec<Ship>,
        contracts: Vec<Contract>,
    }

    impl GameClient for StaticClient {
        async fn list_all_ships(&self, _session: &Session) -> ClientResult<Vec<Ship>> {
            Ok(self.ships.clone())
        }

        async fn list_all_contracts(&self, _session: &Session) -> ClientResult<Vec<Contract>> {
            Ok(self.contracts.clone())
        }
    }

    struct FailingClient;

    impl GameClient for FailingClient {
        async fn list_all_ships(&self, _session: &Session) -> ClientResult<Vec<Ship>> {
            Err(ClientError::Upstream("503 Service Unavailable".to_string()))
        }

        async fn list_all_contracts(&self, _session: &Session) -> ClientResult<Vec<Contract>> {
            Ok(vec![])
        }
    }

    // ============================================================================
    // Fixtures
    // ============================================================================

    fn waypoint(symbol: &str, system: &str) -> Waypoint {
        Waypoint {
            symbol: symbol.to_string(),
            system_symbol: system.to_string(),
            waypoint_type: "PLANET".to_string(),
            x: 0,
            y: 0,
            traits: vec![],
            faction: None,
        }
    }

    fn system(symbol: &str, waypoints: Vec<Waypoint>) -> System {
        System {
            symbol: symbol.to_string(),
            sector_symbol: "X1".to_string(),
            system_type: "RED_STAR".to_string(),
            x: 0,
            y: 0,
            waypoints,
            factions: vec![],
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

    fn contract(id: &str) -> Contract {
        Contract {
            id: id.to_string(),
            faction_symbol: "COSMIC".to_string(),
            contract_type: "PROCUREMENT".to_string(),
            accepted: false,
            fulfilled: false,
        }
    }

    fn small_catalog() -> Arc<Catalog> {
        let catalog = Catalog::from_parts(
            vec![
                system(
                    "X1-SOL",
                    vec![waypoint("X1-SOL-A", "X1-SOL"), waypoint("X1-SOL-B", "X1-SOL")],
                ),
                system("X1-KR7", vec![waypoint("X1-KR7-X9", "X1-KR7")]),
            ],
            vec![Faction {
                symbol: "COSMIC".to_string(),
                name: "Cosmic Engineers".to_string(),
                description: String::new(),
                headquarters: "X1-SOL".to_string(),
                traits: vec![],
                is_recruiting: true,
            }],
        )
        .unwrap();
        Arc::new(catalog)
    }

    fn large_catalog(systems: usize) -> Arc<Catalog> {
        let systems = (0..systems).map(|i| system(&format!("X9-{:04}", i), vec![])).collect();
        Arc::new(Catalog::from_parts(systems, vec![]).unwrap())
    }

    fn session() -> Session {
        Session::new("test-token")
    }

    // ============================================================================
    // Tests
    // ============================================================================

    #[tokio::test]
    async fn test_waypoint_filter_with_text() {
        let client = StaticClient {
            ships: vec![ship("SOL-RUNNER")],
            contracts: vec![contract("sol-contract")],
        };
        let orchestrator = SearchOrchestrator::new(small_catalog(), client);

        let response = orchestrator.search(&session(), Some("is:waypoint sol"), 1).await.unwrap();
        let keys: Vec<&str> = response.results.iter().map(|h| h.candidate.key()).collect();

        assert!(keys.contains(&"X1-SOL-A"));
        assert!(response.results.iter().all(|h| h.candidate.kind() == CandidateKind::Waypoint));
    }

    #[tokio::test]
    async fn test_filters_alone_match_everything_of_kind() {
        let client = StaticClient {
            ships: vec![ship("STARCHART-1"), ship("STARCHART-2")],
            contracts: vec![contract("c1")],
        };
        let orchestrator = SearchOrchestrator::new(small_catalog(), client);

        let response = orchestrator.search(&session(), Some("is:ship"), 1).await.unwrap();

        assert_eq!(response.total_matches, 2);
        assert!(response.results.iter().all(|h| h.score == 1.0));
        // ties keep fetch order
        assert_eq!(response.results[0].candidate.key(), "STARCHART-1");
    }

    #[tokio::test]
    async fn test_faction_filter_leaves_other_kinds_unfiltered() {
        let mut void_ship = ship("VOID-RUNNER");
        void_ship.registration.faction_symbol = "VOID".to_string();
        let mut void_contract = contract("c1");
        void_contract.faction_symbol = "VOID".to_string();
        let client = StaticClient {
            ships: vec![ship("STARCHART-1"), void_ship],
            contracts: vec![void_contract],
        };
        let orchestrator = SearchOrchestrator::new(small_catalog(), client);

        let response = orchestrator.search(&session(), Some("faction:cosmic"), 1).await.unwrap();
        let keys: Vec<&str> = response.results.iter().map(|h| h.candidate.key()).collect();

        assert_eq!(
            keys,
            vec![
                "X1-SOL",
                "X1-SOL-A",
                "X1-SOL-B",
                "X1-KR7",
                "X1-KR7-X9",
                "COSMIC",
                "STARCHART-1",
                "c1",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_query_is_empty_query() {
        let orchestrator = SearchOrchestrator::new(small_catalog(), StaticClient::default());

        let response = orchestrator.search(&session(), None, 1).await.unwrap();

        // 2 systems, 3 waypoints, 1 faction
        assert_eq!(response.total_matches, 6);
        let kinds: Vec<CandidateKind> =
            response.results.iter().map(|h| h.candidate.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                CandidateKind::System,
                CandidateKind::Waypoint,
                CandidateKind::Waypoint,
                CandidateKind::System,
                CandidateKind::Waypoint,
                CandidateKind::Faction,
            ]
        );
    }

    #[tokio::test]
    async fn test_results_sorted_above_cutoff() {
        let client = StaticClient {
            ships: vec![ship("STARCHART-1")],
            contracts: vec![contract("clm0n4k8r0001")],
        };
        let orchestrator = SearchOrchestrator::new(small_catalog(), client);

        let response = orchestrator.search(&session(), Some("x1-sol-a"), 1).await.unwrap();

        assert_eq!(response.results[0].candidate.key(), "X1-SOL-A");
        assert_eq!(response.results[0].score, 1.0);
        assert!(response.results.iter().all(|h| h.score > -0.5));
        assert!(response.results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn test_search_is_idempotent() {
        let client = StaticClient {
            ships: vec![ship("STARCHART-1")],
            contracts: vec![contract("c1")],
        };
        let orchestrator = SearchOrchestrator::new(small_catalog(), client);

        let first = orchestrator.search(&session(), Some("x1"), 1).await.unwrap();
        let second = orchestrator.search(&session(), Some("x1"), 1).await.unwrap();

        assert_eq!(first.results, second.results);
        assert_eq!(first.page_index, second.page_index);
    }

    #[tokio::test]
    async fn test_pagination_over_250_matches() {
        let orchestrator = SearchOrchestrator::new(large_catalog(250), StaticClient::default());

        let page_one = orchestrator.search(&session(), Some("is:system"), 1).await.unwrap();
        assert_eq!(page_one.total_matches, 250);
        assert_eq!(page_one.total_pages, 2);
        assert_eq!(page_one.page_index, vec![Page(1), Page(2)]);
        assert_eq!(page_one.results.len(), 100);

        // the trailing partial page is still served
        let page_three = orchestrator.search(&session(), Some("is:system"), 3).await.unwrap();
        assert_eq!(page_three.results.len(), 50);
        assert_eq!(page_three.page_index, vec![Page(1), Page(2), Page(3)]);

        let mut joined = Vec::new();
        for page in 1..=3 {
            let response = orchestrator.search(&session(), Some("is:system"), page).await.unwrap();
            joined.extend(response.results);
        }
        let single_page = SearchOrchestrator::new(large_catalog(250), StaticClient::default())
            .with_config(SearchConfig::default().with_page_size(1000));
        let everything = single_page.search(&session(), Some("is:system"), 1).await.unwrap();
        assert_eq!(joined, everything.results);
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty() {
        let orchestrator = SearchOrchestrator::new(small_catalog(), StaticClient::default());

        let response = orchestrator.search(&session(), None, 42).await.unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_matches, 6);

        let response = orchestrator.search(&session(), None, 0).await.unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_client_failure_propagates() {
        let orchestrator = SearchOrchestrator::new(small_catalog(), FailingClient);

        let error = orchestrator.search(&session(), Some("sol"), 1).await.unwrap_err();
        assert!(error.to_string().contains("Failed to fetch ships"));
    }

    #[tokio::test]
    async fn test_response_serializes() {
        let orchestrator = SearchOrchestrator::new(small_catalog(), StaticClient::default());

        let response = orchestrator.search(&session(), Some("is:faction"), 1).await.unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["results"][0]["candidate"]["kind"], "faction");
        assert_eq!(json["page_index"][0], 1);
        assert!(json["elapsed"].is_f64());
    }
}
