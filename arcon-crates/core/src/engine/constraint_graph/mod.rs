//! The constraint network: binary relations, their support tables and the adjacency between
//! variables.
mod binary_relation;
mod graph;
mod support_table;

pub use binary_relation::BinaryRelation;
pub(crate) use graph::*;
pub(crate) use support_table::SupportTable;
