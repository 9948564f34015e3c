//! Decides which variable the search branches on next.
//!
//! Values are always tried in ascending order; only the choice of variable is configurable, through
//! a [`VariableSelector`](variable_selection::VariableSelector). The [`Solver`](crate::Solver)
//! creates its selector from the [`VariableSelection`](variable_selection::VariableSelection) in
//! its options.
mod selection_context;
pub(crate) mod tie_breaking;
pub(crate) mod variable_selection;

pub(crate) use selection_context::SelectionContext;
