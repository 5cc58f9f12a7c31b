use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::charge_assert_simple;

/// A stack of values partitioned into decision levels.
///
/// Level `0` holds the values pushed before the first call to
/// [`Trail::increase_decision_level`]; every later level starts with the value that opened it.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_decision_level: usize,
    /// At index i is the position where the (i + 1)-th decision level starts on the trail
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// Implemented by hand so that `T` is not required to implement `Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_decision_level: Default::default(),
            trail_delimiter: Default::default(),
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.current_decision_level += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn values_on_decision_level(&self, decision_level: usize) -> &[T] {
        charge_assert_simple!(decision_level <= self.current_decision_level);

        let start = if decision_level == 0 {
            0
        } else {
            self.trail_delimiter[decision_level - 1]
        };

        let end = if decision_level == self.current_decision_level {
            self.trail.len()
        } else {
            self.trail_delimiter[decision_level]
        };

        &self.trail[start..end]
    }

    /// Returns the value which opened the current decision level, or [`None`] at the root.
    pub(crate) fn last_decision(&self) -> Option<&T> {
        if self.current_decision_level == 0 {
            return None;
        }

        self.values_on_decision_level(self.current_decision_level)
            .first()
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.current_decision_level
    }

    /// Removes every value above `new_decision_level`, yielding them in reverse push order.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) -> Rev<Drain<'_, T>> {
        charge_assert_simple!(new_decision_level < self.current_decision_level);

        let new_trail_len = self.trail_delimiter[new_decision_level];

        self.current_decision_level = new_decision_level;
        self.trail_delimiter.truncate(new_decision_level);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}
