use crate::charge_assert_simple;
use crate::constraints::Relation;

/// The state of the sum of a linear constraint under a partial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PartialSum {
    /// The number of variables assigned `true`.
    pub(crate) num_true: usize,
    /// The number of variables without a value.
    pub(crate) num_unassigned: usize,
}

impl PartialSum {
    pub(crate) fn unassigned(num_variables: usize) -> Self {
        PartialSum {
            num_true: 0,
            num_unassigned: num_variables,
        }
    }

    pub(crate) fn assign(&mut self, value: bool) {
        charge_assert_simple!(self.num_unassigned > 0);

        self.num_unassigned -= 1;
        if value {
            self.num_true += 1;
        }
    }

    pub(crate) fn unassign(&mut self, value: bool) {
        if value {
            charge_assert_simple!(self.num_true > 0);
            self.num_true -= 1;
        }
        self.num_unassigned += 1;
    }

    /// The largest value the sum can still reach.
    pub(crate) fn max_sum(&self) -> usize {
        self.num_true + self.num_unassigned
    }

    /// Whether some completion of the partial assignment satisfies `relation`.
    pub(crate) fn can_satisfy(&self, relation: Relation) -> bool {
        self.num_true <= relation.upper() && self.max_sum() >= relation.lower()
    }
}
