//! Dinosaur record model and dataset collection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use thiserror::Error;

use crate::facts::{self, FieldKey};

/// Era bounds in millions of years ago.
///
/// Either a single marker value, or `[older, younger]` with the older bound
/// first; era queries treat two-value ranges as inclusive on both ends.
pub type MyaRange = SmallVec<[u32; 2]>;

/// One dinosaur entry as supplied by the reference dataset.
///
/// Field names follow the dataset wire format (camelCase, with the
/// identifier keyed as `dinosaurId`). Records are read-only to every query
/// in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    #[serde(rename = "dinosaurId")]
    pub id: String,
    pub name: String,
    pub pronunciation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning_of_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    pub length_in_meters: f64,
    pub period: String,
    pub mya: MyaRange,
    pub info: String,
}

impl Dinosaur {
    /// Final entry of the era range: the younger bound of a two-value range,
    /// or the single marker value. Returns 0 for an (invariant-violating)
    /// empty range rather than panicking.
    #[must_use]
    pub fn last_mya(&self) -> u32 {
        self.mya.last().copied().unwrap_or_default()
    }
}

/// Errors raised when dataset records violate the documented shape.
#[derive(Debug, Error, PartialEq)]
pub enum DataShapeError {
    #[error("dinosaur '{id}' has an empty mya range")]
    EmptyMya { id: String },
    #[error("dinosaur '{id}' has {len} mya values (expected 1 or 2)")]
    OversizedMya { id: String, len: usize },
    #[error("dinosaur '{id}' length must be positive and finite (got {length} m)")]
    InvalidLength { id: String, length: f64 },
}

/// Ordered dinosaur dataset, in the caller-supplied record order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DinosaurList(pub Vec<Dinosaur>);

impl DinosaurList {
    /// Create an empty dataset (useful for tests).
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Wrap pre-built records, preserving their order.
    #[must_use]
    pub fn from_dinosaurs(dinosaurs: Vec<Dinosaur>) -> Self {
        Self(dinosaurs)
    }

    /// Parse the bare-array dataset wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid dinosaur
    /// records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// First record carrying the given identifier.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Dinosaur> {
        self.0.iter().find(|dinosaur| dinosaur.id == id)
    }

    /// Check every record against the documented dataset shape.
    ///
    /// Queries never run this themselves; they stay permissive. Callers
    /// ingesting data of uncertain provenance can opt in before querying.
    /// Duplicate identifiers are deliberately not rejected.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: an empty or oversized mya range,
    /// or a non-positive/non-finite length.
    pub fn validate(&self) -> Result<(), DataShapeError> {
        for dinosaur in &self.0 {
            if dinosaur.mya.is_empty() {
                return Err(DataShapeError::EmptyMya {
                    id: dinosaur.id.clone(),
                });
            }
            if dinosaur.mya.len() > 2 {
                return Err(DataShapeError::OversizedMya {
                    id: dinosaur.id.clone(),
                    len: dinosaur.mya.len(),
                });
            }
            if !dinosaur.length_in_meters.is_finite() || dinosaur.length_in_meters <= 0.0 {
                return Err(DataShapeError::InvalidLength {
                    id: dinosaur.id.clone(),
                    length: dinosaur.length_in_meters,
                });
            }
        }
        Ok(())
    }

    /// Height map for the tallest record; empty when the dataset is empty.
    #[must_use]
    pub fn tallest(&self) -> HashMap<String, f64> {
        facts::tallest_dinosaur(&self.0)
    }

    /// Formatted description for `id`, or the frozen not-found reply.
    #[must_use]
    pub fn describe(&self, id: &str) -> String {
        facts::dinosaur_description(&self.0, id)
    }

    /// Era query projecting `key` for every record alive at `mya`.
    #[must_use]
    pub fn alive_at(&self, mya: u32, key: FieldKey) -> Vec<String> {
        facts::dinosaurs_alive_mya(&self.0, mya, key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dinosaur> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Dinosaur] {
        &self.0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a DinosaurList {
    type Item = &'a Dinosaur;
    type IntoIter = std::slice::Iter<'a, Dinosaur>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
