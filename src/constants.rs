//! Centralized constants for dinofacts query behavior.
//!
//! Unit factors and frozen reply strings sit here so observable query output
//! can only change through reviewed code edits.

// Logging keys -------------------------------------------------------------
#[cfg(debug_assertions)]
pub(crate) const DEBUG_ENV_VAR: &str = "DINOFACTS_DEBUG_LOGS";

// Unit conversion ----------------------------------------------------------
/// Heights are reported at exactly this scale; callers compare against it.
pub(crate) const FEET_PER_METER: f64 = 3.281;

// Era query tuning ---------------------------------------------------------
/// How far below a single-value mya marker a query may land and still match.
pub(crate) const SINGLE_MYA_TOLERANCE: u32 = 1;

// Reply strings ------------------------------------------------------------
/// The quoted id is part of the frozen reply; the queried id is never
/// interpolated into it.
pub(crate) const MISSING_DINOSAUR_REPLY: &str =
    "A dinosaur with an ID of 'incorrect-id' cannot be found.";

// Test tolerances ----------------------------------------------------------
#[cfg(test)]
pub(crate) const FLOAT_EPSILON: f64 = 1e-6;
