mod integer_domain;
mod variable;
mod variable_id;

pub use integer_domain::IntegerDomain;
pub use variable::Assignment;
pub(crate) use variable::Variable;
pub use variable_id::VariableId;
