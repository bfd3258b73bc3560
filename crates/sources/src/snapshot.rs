//! JSON snapshot standing in for the remote API.
//!
//! Layout: `{ "ships": [...], "contracts": [...] }`. The file is re-read on
//! every call, the same way the live API would be queried per request.

use crate::client::{ClientError, GameClient, Result, Session};
use crate::records::{Contract, Ship};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, instrument};

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    ships: Vec<Ship>,
    #[serde(default)]
    contracts: Vec<Contract>,
}

/// `GameClient` backed by a snapshot file on disk
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    path: PathBuf,
}

impl SnapshotClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self, session: &Session) -> Result<Snapshot> {
        if session.token().trim().is_empty() {
            return Err(ClientError::Unauthorized);
        }

        let display = self.path.display().to_string();
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(ClientError::SnapshotNotFound { path: display });
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| ClientError::Malformed {
            path: display,
            reason: e.to_string(),
        })
    }
}

impl GameClient for SnapshotClient {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    async fn list_all_ships(&self, session: &Session) -> Result<Vec<Ship>> {
        let ships = self.load(session).await?.ships;
        debug!(count = ships.len(), "ships fetched");
        Ok(ships)
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    async fn list_all_contracts(&self, session: &Session) -> Result<Vec<Contract>> {
        let contracts = self.load(session).await?.contracts;
        debug!(count = contracts.len(), "contracts fetched");
        Ok(contracts)
    }
}
