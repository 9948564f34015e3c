use crate::engine::variables::VariableId;

/// A value which has been removed from the domain of a variable because it lost its support.
///
/// Removals are queued while propagating and then kept on the trail, where they serve as the
/// token to restore the value when the search backtracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Removal {
    pub(crate) variable: VariableId,
    pub(crate) value: i32,
}
