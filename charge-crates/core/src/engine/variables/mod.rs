mod charge_variables;
mod dimensions;
mod variable_id;

pub use charge_variables::*;
pub use dimensions::Dimensions;
pub use variable_id::VariableId;
