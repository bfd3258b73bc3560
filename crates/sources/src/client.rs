//! The seam between the search engine and the remote game API.
//!
//! The engine only ever asks for two listings. Whatever talks to the real
//! API (HTTP client, cache, fixture) implements `GameClient`.

use crate::records::{Contract, Ship};
use thiserror::Error;

/// Bearer-token holder passed through to the game client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Errors raised while fetching live records
#[derive(Error, Debug)]
pub enum ClientError {
    /// The session carries no usable token
    #[error("Unauthorized: session has no bearer token")]
    Unauthorized,

    /// Snapshot file is missing
    #[error("Snapshot not found: {path}")]
    SnapshotNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file does not match the expected layout
    #[error("Malformed snapshot {path}: {reason}")]
    Malformed { path: String, reason: String },

    /// Upstream API failure
    #[error("Upstream request failed: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Source of the agent's live records
///
/// Both listings are returned whole, in the order the API pages them.
pub trait GameClient: Send + Sync {
    fn list_all_ships(&self, session: &Session) -> impl Future<Output = Result<Vec<Ship>>> + Send;

    fn list_all_contracts(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<Vec<Contract>>> + Send;
}
