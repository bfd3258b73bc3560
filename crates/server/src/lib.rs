//! Server crate for the Starchart search engine.
//!
//! This crate contains the orchestrator the web layer calls for the
//! `/search/` route: parse, fetch live records, scan, rank and paginate.

pub mod orchestrator;

pub use orchestrator::{SearchHit, SearchOrchestrator, SearchResponse, SearchTimings};
