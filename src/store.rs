//! Save-file persistence
//!
//! The trainer's durable state is one JSON blob:
//!
//! ```json
//! {
//!   "aggression_value": 1.5,
//!   "weights": { "alice": { "dog *": 0.6 } },
//!   "words": ["cat/kat", "dog *"]
//! }
//! ```
//!
//! Loading validates the aggression value and parses every word; either
//! failure rejects the whole file. Saving writes to a temporary file in the
//! target directory and renames it into place, so a crash mid-write never
//! truncates an existing save.

use crate::catalogue::{CatalogueError, parse_catalogue};
use crate::core::Entry;
use crate::trainer::{Aggression, AggressionError, WeightTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// On-disk shape of the trainer state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub aggression_value: f64,
    pub weights: BTreeMap<String, BTreeMap<String, f64>>,
    pub words: Vec<String>,
}

/// Error type for save-file operations
#[derive(Debug)]
pub enum StoreError {
    /// The file could not be read or written
    Io(io::Error),
    /// The file is not valid JSON of the expected shape
    Json(serde_json::Error),
    /// The stored aggression value is out of range
    Aggression(AggressionError),
    /// A stored word violates the entry grammar
    Catalogue(CatalogueError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "save file I/O failed: {e}"),
            Self::Json(e) => write!(f, "save file is not valid JSON: {e}"),
            Self::Aggression(e) => write!(f, "save file rejected: {e}"),
            Self::Catalogue(e) => write!(f, "save file rejected: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Aggression(e) => Some(e),
            Self::Catalogue(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl SaveData {
    /// Assemble save data from live trainer state
    #[must_use]
    pub fn from_state(aggression: Aggression, weights: &WeightTable, words: &[Entry]) -> Self {
        let mut nested: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for (player, entry, weight) in weights.iter() {
            nested
                .entry(player.to_string())
                .or_default()
                .insert(entry.to_string(), weight);
        }
        Self {
            aggression_value: aggression.get(),
            weights: nested,
            words: words.iter().map(|e| e.raw().to_string()).collect(),
        }
    }

    /// Validate the stored aggression value
    ///
    /// # Errors
    /// Returns `StoreError::Aggression` if the value is not `> 1.0`.
    pub fn aggression(&self) -> Result<Aggression, StoreError> {
        Aggression::new(self.aggression_value).map_err(StoreError::Aggression)
    }

    /// Parse the stored word list into a catalogue
    ///
    /// # Errors
    /// Returns `StoreError::Catalogue` if any stored word is malformed.
    pub fn catalogue(&self) -> Result<Vec<Entry>, StoreError> {
        parse_catalogue(self.words.iter().map(String::as_str)).map_err(StoreError::Catalogue)
    }

    /// Rebuild the in-memory weight table
    #[must_use]
    pub fn weight_table(&self) -> WeightTable {
        let mut table = WeightTable::new();
        for (player, weights) in &self.weights {
            for (entry, &weight) in weights {
                table.insert(player, entry, weight);
            }
        }
        table
    }
}

/// Load save data from a JSON file
///
/// # Errors
/// Returns `StoreError` on I/O failure or a malformed file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SaveData, StoreError> {
    let content = fs::read_to_string(path)?;
    let data: SaveData = serde_json::from_str(&content)?;
    Ok(data)
}

/// Save state to a JSON file atomically
///
/// # Errors
/// Returns `StoreError::Io` if the temporary file cannot be created or
/// persisted, or `StoreError::Json` if serialization fails.
pub fn save<P: AsRef<Path>>(path: P, data: &SaveData) -> Result<(), StoreError> {
    let path = path.as_ref();
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

    let mut tmp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
        None => tempfile::NamedTempFile::new_in(".")?,
    };
    serde_json::to_writer_pretty(&mut tmp, data)?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::Aggression;

    fn sample() -> SaveData {
        let mut weights = WeightTable::new();
        weights.insert("alice", "dog *", 0.6);
        weights.insert("alice", "cat/kat", 0.25);
        weights.insert("bob", "cat/kat", 0.5);
        let words = vec![
            Entry::parse("cat/kat").unwrap(),
            Entry::parse("dog *").unwrap(),
        ];
        SaveData::from_state(Aggression::new(1.5).unwrap(), &weights, &words)
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let data = sample();
        save(&path, &data).unwrap();
        let loaded = load(&path).unwrap();

        assert!((loaded.aggression_value - 1.5).abs() < 1e-12);
        assert_eq!(loaded.words, data.words);
        assert_eq!(loaded.weights, data.weights);
    }

    #[test]
    fn save_overwrites_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        save(&path, &sample()).unwrap();
        let mut updated = sample();
        updated.aggression_value = 2.0;
        save(&path, &updated).unwrap();

        let loaded = load(&path).unwrap();
        assert!((loaded.aggression_value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn weight_table_round_trip() {
        let data = sample();
        let table = data.weight_table();
        assert!((table.weight("alice", "dog *") - 0.6).abs() < 1e-12);
        assert!((table.weight("alice", "cat/kat") - 0.25).abs() < 1e-12);
        // Unstored pairs still default
        assert!((table.weight("bob", "dog *") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn aggression_at_most_one_is_rejected() {
        let mut data = sample();
        data.aggression_value = 1.0;
        assert!(matches!(data.aggression(), Err(StoreError::Aggression(_))));

        data.aggression_value = 0.3;
        assert!(matches!(data.aggression(), Err(StoreError::Aggression(_))));
    }

    #[test]
    fn malformed_stored_word_rejects_catalogue() {
        let mut data = sample();
        data.words.push("broken/".to_string());
        assert!(matches!(data.catalogue(), Err(StoreError::Catalogue(_))));
    }

    #[test]
    fn json_shape_uses_expected_keys() {
        let text = serde_json::to_string(&sample()).unwrap();
        assert!(text.contains("\"aggression_value\""));
        assert!(text.contains("\"weights\""));
        assert!(text.contains("\"words\""));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load(&path), Err(StoreError::Json(_))));
    }
}
