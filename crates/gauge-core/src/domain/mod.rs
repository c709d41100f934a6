//! Domain model (counters, weight tiers, size codes, errors).

pub mod complexity;
pub mod errors;
pub mod size;
pub mod weight;

pub use self::complexity::ComplexityTracker;
pub use self::errors::{GaugeError, GaugeResult};
pub use self::size::{Size, classify_code};
pub use self::weight::{
    WeightLevel, WeightThresholds, WeightedEntry, classify_weight, reverse_sequence,
    sort_sequence,
};
