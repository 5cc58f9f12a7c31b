//! The constraints of a charging problem.
//!
//! The constraint set is fixed: every problem consists of the charger exclusivity, vehicle
//! exclusivity and fair-share families, all of which are linear relations over the boolean
//! decision variables. The [`ConstraintStore`] derives them from the [`Dimensions`] of the problem;
//! in particular the fair-share bounds are always computed (see [`fair_share_bounds`]) and never
//! supplied from the outside, as only the derived bounds are consistent with the charger
//! exclusivity constraints.
//!
//! [`Dimensions`]: crate::variables::Dimensions
mod constraint_store;
mod linear_constraint;

pub use constraint_store::*;
pub use linear_constraint::*;
