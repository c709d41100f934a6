//! Ports - capabilities the core depends on without constructing them.
//!
//! Each trait has one production implementation under `impls` and is replaced
//! by a hand-written fake in tests.

pub mod actor;

pub use self::actor::Actor;
