pub(crate) mod propagation;
mod search_engine;
mod search_state;
mod solver_options;
pub(crate) mod solver_statistics;
pub(crate) mod variables;

pub(crate) use search_engine::SearchEngine;
pub use solver_options::*;
