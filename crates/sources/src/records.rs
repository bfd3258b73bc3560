//! Live per-agent records fetched from the game API on every request.
//!
//! Only the fields the search engine reads are modeled. The game documents
//! carry much more (cargo, fuel, deliveries...), which serde skips.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ship owned by the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub symbol: String,
    pub registration: ShipRegistration,
    pub nav: ShipNav,
    #[serde(default)]
    pub frame: Option<ShipFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipRegistration {
    pub name: String,
    pub faction_symbol: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipNav {
    pub system_symbol: String,
    pub waypoint_symbol: String,
    pub status: NavStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipFrame {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

/// Navigation state of a ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavStatus {
    InTransit,
    InOrbit,
    Docked,
}

impl NavStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavStatus::InTransit => "IN_TRANSIT",
            NavStatus::InOrbit => "IN_ORBIT",
            NavStatus::Docked => "DOCKED",
        }
    }
}

impl fmt::Display for NavStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contract offered to or accepted by the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub faction_symbol: String,
    #[serde(rename = "type")]
    pub contract_type: String,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub fulfilled: bool,
}

/// Lifecycle stage of a contract, derived from its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractStatus {
    Open,
    Accepted,
    Fulfilled,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Open => "open",
            ContractStatus::Accepted => "accepted",
            ContractStatus::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Contract {
    /// Fulfilled wins over accepted
    pub fn status(&self) -> ContractStatus {
        if self.fulfilled {
            ContractStatus::Fulfilled
        } else if self.accepted {
            ContractStatus::Accepted
        } else {
            ContractStatus::Open
        }
    }
}
