//! TrackerActor - an Actor backed by a ComplexityTracker.

use tracing::trace;

use crate::domain::ComplexityTracker;
use crate::ports::Actor;

/// Every action, primary or secondary, increments the inner tracker.
///
/// `perform_action` and `status` both report the tracker's complexity, so the
/// status always equals the last primary result unless a secondary action ran
/// in between.
#[derive(Debug, Clone, Default)]
pub struct TrackerActor {
    tracker: ComplexityTracker,
}

impl TrackerActor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracker(&self) -> &ComplexityTracker {
        &self.tracker
    }

    fn complexity_code(&self) -> i32 {
        i32::try_from(self.tracker.complexity()).unwrap_or(i32::MAX)
    }
}

impl Actor for TrackerActor {
    fn perform_action(&mut self) -> i32 {
        self.tracker.increment();
        trace!(complexity = self.tracker.complexity(), "primary action");
        self.complexity_code()
    }

    fn perform_secondary_action(&mut self) {
        self.tracker.increment();
        trace!(complexity = self.tracker.complexity(), "secondary action");
    }

    fn status(&self) -> i32 {
        self.complexity_code()
    }
}
