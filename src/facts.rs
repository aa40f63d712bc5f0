//! Dinosaur fact queries: tallest lookup, descriptions, and era filtering.
#[cfg(debug_assertions)]
use crate::constants::DEBUG_ENV_VAR;
use crate::constants::{FEET_PER_METER, MISSING_DINOSAUR_REPLY, SINGLE_MYA_TOLERANCE};
use crate::data::Dinosaur;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[cfg(debug_assertions)]
fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
const fn debug_log_enabled() -> bool {
    false
}

/// Which record field an era query projects into its result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    /// The unique record identifier (the default projection).
    #[default]
    Id,
    /// The display name.
    Name,
}

impl FieldKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }

    /// Map a caller-supplied key string to a projection.
    ///
    /// Only the exact key `"name"` selects the name projection; `None` and
    /// every other string fall back to the identifier projection instead of
    /// erroring.
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("name") => Self::Name,
            _ => Self::Id,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a length in meters to feet at the fixed reporting scale.
#[must_use]
pub const fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Single-entry map from the tallest record's name to its height in feet.
///
/// Empty input yields an empty map. The scan is left-to-right with a strict
/// comparison, so the first record carrying the maximum length wins and
/// later records of equal length never replace it.
#[must_use]
pub fn tallest_dinosaur(dinosaurs: &[Dinosaur]) -> HashMap<String, f64> {
    let mut tallest = HashMap::new();
    let Some(mut longest) = dinosaurs.first() else {
        return tallest;
    };
    for candidate in dinosaurs {
        if candidate.length_in_meters > longest.length_in_meters {
            longest = candidate;
        }
    }
    tallest.insert(
        longest.name.clone(),
        meters_to_feet(longest.length_in_meters),
    );
    tallest
}

/// Two-line formatted description for the first record matching `id`.
///
/// The era figure is the final `mya` entry of the matched record. When no
/// record matches, the frozen not-found reply is returned unchanged --
/// the same fixed text for every absent id.
#[must_use]
pub fn dinosaur_description(dinosaurs: &[Dinosaur], id: &str) -> String {
    match dinosaurs.iter().find(|dinosaur| dinosaur.id == id) {
        Some(dinosaur) => format!(
            "{} ({})\n{} It lived in the {} period, over {} million years ago.",
            dinosaur.name,
            dinosaur.pronunciation,
            dinosaur.info,
            dinosaur.period,
            dinosaur.last_mya()
        ),
        None => MISSING_DINOSAUR_REPLY.to_string(),
    }
}

/// Identifiers (or names, per `key`) of every record alive at `mya`.
///
/// Output order follows input order and nothing is de-duplicated. Each
/// record is classified by the first matching rule of an ordered decision
/// list; the rules layer rather than partition, and the layering is
/// observable:
///
/// 1. The era range contains `mya` exactly and `key` is [`FieldKey::Name`]:
///    the name is emitted.
/// 2. Single-value ranges matching `mya` at the marker or one unit below it
///    emit the id, even under the name projection.
/// 3. Exact containment without the name projection emits the id.
/// 4. Two-value ranges spanning `mya` inclusively emit the id.
#[must_use]
pub fn dinosaurs_alive_mya(dinosaurs: &[Dinosaur], mya: u32, key: FieldKey) -> Vec<String> {
    let mut alive = Vec::new();
    for dinosaur in dinosaurs {
        let span = dinosaur.mya.as_slice();
        if span.contains(&mya) && key == FieldKey::Name {
            alive.push(dinosaur.name.clone());
        } else if let &[marker] = span
            && (mya == marker || mya == marker.saturating_sub(SINGLE_MYA_TOLERANCE))
        {
            alive.push(dinosaur.id.clone());
        } else if span.contains(&mya) {
            alive.push(dinosaur.id.clone());
        } else if let &[older, younger, ..] = span
            && mya >= younger
            && mya <= older
        {
            alive.push(dinosaur.id.clone());
        }
    }

    if debug_log_enabled() {
        println!("Era query | mya:{} key:{} matches:{}", mya, key, alive.len());
    }

    alive
}
