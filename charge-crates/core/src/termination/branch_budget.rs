use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the engine has made `budget` decisions.
#[derive(Debug, Copy, Clone)]
pub struct BranchBudget {
    budget: u64,
    num_branches: u64,
}

impl BranchBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_branches: 0,
        }
    }
}

impl TerminationCondition for BranchBudget {
    fn should_stop(&mut self) -> bool {
        self.num_branches >= self.budget
    }

    fn decision_has_been_made(&mut self) {
        self.num_branches += 1;
    }
}
