//! Implementations of the ports.

pub mod tracker_actor;

pub use self::tracker_actor::TrackerActor;
