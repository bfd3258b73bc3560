//! # Sources Crate
//!
//! Where search candidates come from.
//!
//! ## Components
//!
//! - **types**: the closed `Candidate` union and its borrowed `CandidateRef`
//! - **records**: live Ship and Contract records
//! - **client**: the `GameClient` seam and `Session`
//! - **snapshot**: `SnapshotClient`, a JSON file in place of the remote API
//! - **candidates**: enumeration of every candidate in fetch order
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{GameClient, Session, SnapshotClient};
//!
//! let client = SnapshotClient::new("data/sample/snapshot.json");
//! let session = Session::new("token");
//! let ships = client.list_all_ships(&session).await?;
//! let contracts = client.list_all_contracts(&session).await?;
//!
//! for candidate in sources::candidates::live_candidates(&ships, &contracts) {
//!     println!("{} {}", candidate.kind(), candidate.key());
//! }
//! ```

pub mod candidates;
pub mod client;
pub mod records;
pub mod snapshot;
pub mod types;

pub use candidates::{live_candidates, reference_candidates};
pub use client::{ClientError, GameClient, Session};
pub use records::{Contract, ContractStatus, NavStatus, Ship, ShipFrame, ShipNav, ShipRegistration};
pub use snapshot::SnapshotClient;
pub use types::{Candidate, CandidateKind, CandidateRef};
