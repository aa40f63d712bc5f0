//! Dinofacts
//!
//! Pure query logic over an in-memory dinosaur reference dataset. The crate
//! never loads or stores data itself: callers hand every operation an
//! ordered sequence of records and get plain values back. Absence is always
//! a value (an empty map, a frozen reply string, an exclusion) rather than
//! an error.

pub mod constants;
pub mod data;
pub mod facts;

// Re-export commonly used types
pub use data::{DataShapeError, Dinosaur, DinosaurList, MyaRange};
pub use facts::{
    FieldKey, dinosaur_description, dinosaurs_alive_mya, meters_to_feet, tallest_dinosaur,
};
