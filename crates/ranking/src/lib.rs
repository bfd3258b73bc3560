//! Query parsing, filtering, relevance scoring and pagination.
//!
//! This crate provides:
//! - `ParsedQuery` for splitting a search string into free text and filters
//! - One filter evaluator per candidate kind
//! - `weight` / `quick_weight` relevance scoring
//! - Ranking with a score cutoff, and the page-index strip
//!
//! ## Example Usage
//! ```ignore
//! use ranking::{page_index, page_slice, rank, scan, ParsedQuery, SearchConfig};
//!
//! let config = SearchConfig::default();
//! let query = ParsedQuery::parse("sol is:waypoint");
//!
//! let scored = scan(&query, sources::reference_candidates(&catalog), &config);
//! let ranked = rank(scored, config.cutoff);
//! let page = page_slice(&ranked, 1, config.page_size);
//! ```

pub mod config;
pub mod filters;
pub mod pagination;
pub mod query;
pub mod rank;
pub mod scorer;

pub use config::{QuickThresholds, SearchConfig};
pub use filters::check_filters;
pub use pagination::{PageEntry, page_index, page_slice, total_pages};
pub use query::{Filter, FilterOp, ParsedQuery};
pub use rank::{ScoredCandidate, rank, scan, score_candidate};
pub use scorer::{quick_weight, weight};
