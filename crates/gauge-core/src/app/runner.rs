//! ActionRunner - records actions and delegates them to an injected Actor.

use tracing::trace;

use crate::ports::Actor;

/// Drives an [`Actor`] and keeps track of how often it was asked to act.
///
/// The actor is supplied by the caller; the runner never constructs one.
#[derive(Debug)]
pub struct ActionRunner<A> {
    actor: A,
    act_count: u32,
    acted: bool,
}

impl<A: Actor> ActionRunner<A> {
    pub fn new(actor: A) -> Self {
        Self {
            actor,
            act_count: 0,
            acted: false,
        }
    }

    /// Record the action and return the actor's result unchanged.
    pub fn act(&mut self) -> i32 {
        self.acted = true;
        self.act_count = self.act_count.saturating_add(1);
        trace!(act_count = self.act_count, "acting");
        self.actor.perform_action()
    }

    pub fn has_acted(&self) -> bool {
        self.acted
    }

    pub fn act_count(&self) -> u32 {
        self.act_count
    }

    pub fn actor(&self) -> &A {
        &self.actor
    }

    pub fn into_actor(self) -> A {
        self.actor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    /// Fake actor: returns a canned result and counts the calls it receives.
    #[derive(Debug, Default)]
    struct FakeActor {
        result: i32,
        action_calls: u32,
        secondary_calls: u32,
    }

    impl FakeActor {
        fn returning(result: i32) -> Self {
            Self {
                result,
                ..Self::default()
            }
        }
    }

    impl Actor for FakeActor {
        fn perform_action(&mut self) -> i32 {
            self.action_calls += 1;
            self.result
        }

        fn perform_secondary_action(&mut self) {
            self.secondary_calls += 1;
        }

        fn status(&self) -> i32 {
            // not scripted: the runner never asks for it
            unreachable!("status is not used by ActionRunner")
        }
    }

    const CANNED_RESULT: i32 = 17;

    #[fixture]
    fn runner() -> ActionRunner<FakeActor> {
        ActionRunner::new(FakeActor::returning(CANNED_RESULT))
    }

    #[rstest]
    fn initially_not_acted(runner: ActionRunner<FakeActor>) {
        assert!(!runner.has_acted());
    }

    mod act {
        use super::*;

        #[fixture]
        fn acted(mut runner: ActionRunner<FakeActor>) -> (ActionRunner<FakeActor>, i32) {
            let result = runner.act();
            (runner, result)
        }

        #[rstest]
        fn invoked_actor(acted: (ActionRunner<FakeActor>, i32)) {
            assert_eq!(acted.0.actor().action_calls, 1);
        }

        #[rstest]
        fn passed_through_result(acted: (ActionRunner<FakeActor>, i32)) {
            assert_eq!(acted.1, CANNED_RESULT);
        }

        #[rstest]
        fn marked_acted(acted: (ActionRunner<FakeActor>, i32)) {
            assert!(acted.0.has_acted());
        }

        #[rstest]
        fn left_secondary_action_alone(acted: (ActionRunner<FakeActor>, i32)) {
            assert_eq!(acted.0.actor().secondary_calls, 0);
        }

        #[rstest]
        #[case::once(1)]
        #[case::three_times(3)]
        fn counts_calls(mut runner: ActionRunner<FakeActor>, #[case] times: u32) {
            for _ in 0..times {
                runner.act();
            }

            assert_eq!(runner.act_count(), times);
        }
    }

    #[rstest]
    fn into_actor_returns_the_driven_actor(mut runner: ActionRunner<FakeActor>) {
        runner.act();
        runner.act();

        let actor = runner.into_actor();

        assert_eq!(actor.action_calls, 2);
    }

    #[test]
    fn works_with_boxed_actor() {
        let actor: Box<dyn Actor> = Box::new(FakeActor::returning(-3));
        let mut runner = ActionRunner::new(actor);

        assert_eq!(runner.act(), -3);
    }
}
