//! Display names for raw card identities.
//!
//! Statistics are always keyed by the raw card name; lookups here only
//! change what is shown to the user.

use crate::error::{Result, StatsError};
use crate::model::{base_name, evolved_name, is_evolved_name};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Maps a raw card identity to the name shown to the user
pub trait CardNameLookup {
    fn display_name(&self, card_name: &str) -> String;
}

/// Shows raw card names unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct RawNames;

impl CardNameLookup for RawNames {
    fn display_name(&self, card_name: &str) -> String {
        card_name.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct NameRow {
    card: String,
    display: String,
}

/// Name table loaded from a two-column CSV with `card,display` headers
#[derive(Debug, Clone, Default)]
pub struct NameMap {
    names: HashMap<String, String>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, card_name: impl Into<String>, display_name: impl Into<String>) {
        self.names.insert(card_name.into(), display_name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn from_csv(content: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut map = NameMap::new();
        for (idx, result) in reader.deserialize::<NameRow>().enumerate() {
            let row = result
                .map_err(|e| StatsError::Parse(format!("name table row {}: {}", idx + 1, e)))?;
            if row.card.is_empty() {
                continue;
            }
            map.insert(row.card, row.display);
        }

        log::debug!("Loaded {} card display names", map.len());
        Ok(map)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_csv(&content).map_err(|e| e.in_source(path.display().to_string()))
    }
}

impl CardNameLookup for NameMap {
    /// Exact match first; evolved names fall back to the base card's entry
    fn display_name(&self, card_name: &str) -> String {
        if let Some(name) = self.names.get(card_name) {
            return name.clone();
        }
        if is_evolved_name(card_name) {
            if let Some(name) = self.names.get(base_name(card_name)) {
                return evolved_name(name);
            }
        }
        card_name.to_string()
    }
}
