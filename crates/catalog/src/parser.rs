//! Parsers for the reference catalog files.
//!
//! - systems.json: array of systems, each with its nested waypoints
//! - factions.json: array of factions
//!
//! Both files may also be a listing page as the API serves it,
//! `{ "data": [...], "meta": {...} }`. Pages nest waypoints without a
//! `systemSymbol` and give faction references as `{ "symbol": ... }` objects.

use crate::error::{CatalogError, Result};
use crate::types::{Faction, System};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Parse a listing document from an in-memory string
///
/// `file` is only used to label errors.
pub fn parse_listing_str<T: DeserializeOwned>(content: &str, file: &str) -> Result<Vec<T>> {
    let to_parse_error = |e: serde_json::Error| CatalogError::ParseError {
        file: file.to_string(),
        line: e.line(),
        reason: e.to_string(),
    };

    if content.trim_start().starts_with('[') {
        serde_json::from_str(content).map_err(to_parse_error)
    } else {
        let envelope: Envelope<T> = serde_json::from_str(content).map_err(to_parse_error)?;
        Ok(envelope.data)
    }
}

fn parse_listing<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = read_file(path)?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let records = parse_listing_str(&content, &file)?;
    debug!(file = %file, records = records.len(), "parsed catalog file");
    Ok(records)
}

/// Parse the systems.json file
pub fn parse_systems(path: &Path) -> Result<Vec<System>> {
    parse_listing(path)
}

/// Parse the factions.json file
pub fn parse_factions(path: &Path) -> Result<Vec<Faction>> {
    parse_listing(path)
}
