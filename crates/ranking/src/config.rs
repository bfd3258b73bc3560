//! Search tuning knobs.
//!
//! The defaults are the values the web front-end has always used. The quick
//! thresholds only skip work: any value at or below 0 keeps every candidate
//! the default cutoff would keep.

use sources::CandidateKind;

/// Pre-filter thresholds, one per candidate kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickThresholds {
    pub system: f64,
    pub waypoint: f64,
    pub faction: f64,
    pub ship: f64,
    pub contract: f64,
}

impl QuickThresholds {
    pub fn for_kind(&self, kind: CandidateKind) -> f64 {
        match kind {
            CandidateKind::System => self.system,
            CandidateKind::Waypoint => self.waypoint,
            CandidateKind::Faction => self.faction,
            CandidateKind::Ship => self.ship,
            CandidateKind::Contract => self.contract,
        }
    }

    fn set(&mut self, kind: CandidateKind, threshold: f64) {
        let slot = match kind {
            CandidateKind::System => &mut self.system,
            CandidateKind::Waypoint => &mut self.waypoint,
            CandidateKind::Faction => &mut self.faction,
            CandidateKind::Ship => &mut self.ship,
            CandidateKind::Contract => &mut self.contract,
        };
        *slot = threshold;
    }
}

impl Default for QuickThresholds {
    fn default() -> Self {
        Self {
            system: -0.1,
            waypoint: 0.0,
            faction: -0.25,
            ship: -0.25,
            contract: -0.7,
        }
    }
}

/// Configuration for a search engine instance
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Results per page
    pub page_size: usize,

    /// Full-score inclusion cutoff; a result needs a score strictly above it
    pub cutoff: f64,

    pub quick_thresholds: QuickThresholds,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            cutoff: -0.5,
            quick_thresholds: QuickThresholds::default(),
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the page size (default: 100, minimum: 1)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Configure the inclusion cutoff (default: -0.5)
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Configure the pre-filter threshold of one kind
    pub fn with_quick_threshold(mut self, kind: CandidateKind, threshold: f64) -> Self {
        self.quick_thresholds.set(kind, threshold);
        self
    }
}
