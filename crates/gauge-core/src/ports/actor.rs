//! Actor port - something that can be asked to act.

/// Actor performs actions on behalf of an [`ActionRunner`](crate::app::ActionRunner).
///
/// # Testability
/// - the runner only sees this trait, so tests inject a fake
/// - only the calls a test cares about need to be scripted
pub trait Actor {
    /// Perform the primary action and return its result code.
    fn perform_action(&mut self) -> i32;

    /// Perform a follow-up action that has no result.
    fn perform_secondary_action(&mut self);

    /// Current status code.
    fn status(&self) -> i32;
}

impl<A: Actor + ?Sized> Actor for Box<A> {
    fn perform_action(&mut self) -> i32 {
        (**self).perform_action()
    }

    fn perform_secondary_action(&mut self) {
        (**self).perform_secondary_action()
    }

    fn status(&self) -> i32 {
        (**self).status()
    }
}
