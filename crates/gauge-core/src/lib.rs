//! gauge-core
//!
//! Small policy-evaluation building blocks.
//!
//! # Modules
//! - **domain**: value types and pure policies (complexity, weight, size, errors)
//! - **ports**: capabilities the core calls but does not own (Actor)
//! - **impls**: production implementations of the ports
//! - **app**: callers that drive the ports (ActionRunner)

pub mod domain;
pub mod ports;
pub mod impls;
pub mod app;

pub use self::app::ActionRunner;
pub use self::domain::{
    ComplexityTracker, GaugeError, GaugeResult, Size, WeightLevel, WeightThresholds,
    WeightedEntry, classify_code, classify_weight, reverse_sequence, sort_sequence,
};
pub use self::impls::TrackerActor;
pub use self::ports::Actor;
