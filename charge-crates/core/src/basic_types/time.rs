//! Time types used for measuring the search.
//!
//! All code in charge-core should use these types instead of `std::time` directly.

pub(crate) use std::time::Duration;
pub(crate) use std::time::Instant;
