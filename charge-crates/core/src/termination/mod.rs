//! Conditions which are polled by the search engine before every decision. They tell the engine to
//! give up on the current run, even though the search space has not been exhausted yet; the run
//! then ends with [`SearchStatus::Terminated`](crate::results::SearchStatus::Terminated).
//!
//! Conditions can be combined with the [`Combinator`]; an `Option<T>` of a condition only triggers
//! when it is `Some`.

mod branch_budget;
mod combinator;
mod indefinite;
mod time_budget;

pub use branch_budget::BranchBudget;
pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// Determines when the engine should stop searching for further solutions.
pub trait TerminationCondition {
    /// Returns `true` when the engine should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called by the engine after every decision it makes.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(|condition| condition.should_stop())
    }

    fn decision_has_been_made(&mut self) {
        if let Some(condition) = self {
            condition.decision_has_been_made()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn decision_has_been_made(&mut self) {
        (**self).decision_has_been_made()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_condition_never_stops() {
        let mut condition: Option<BranchBudget> = None;
        condition.decision_has_been_made();

        assert!(!condition.should_stop());
    }

    #[test]
    fn present_condition_is_forwarded() {
        let mut condition = Some(BranchBudget::new(1));
        assert!(!condition.should_stop());

        condition.decision_has_been_made();
        assert!(condition.should_stop());
    }
}
