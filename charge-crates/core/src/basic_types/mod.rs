mod model_error;
mod solution;
pub(crate) mod time;
mod trail;

pub use model_error::ModelError;
pub use solution::*;
pub(crate) use trail::Trail;
