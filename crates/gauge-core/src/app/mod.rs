//! Application layer - callers that drive the ports.

pub mod runner;

pub use self::runner::ActionRunner;
