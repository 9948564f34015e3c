use super::IntegerDomain;

/// Whether a variable has been fixed by the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Assignment {
    #[default]
    Unassigned,
    Assigned(i32),
}

impl Assignment {
    pub fn value(self) -> Option<i32> {
        match self {
            Assignment::Unassigned => None,
            Assignment::Assigned(value) => Some(value),
        }
    }
}

/// A decision variable: its remaining domain and, once the search fixes it, its value.
///
/// Fixing a variable leaves its domain untouched. The values other than the assigned one are
/// excluded through the support counters of the neighbours instead, which makes unassigning
/// independent of the domain size.
#[derive(Clone, Debug)]
pub(crate) struct Variable {
    pub(crate) domain: IntegerDomain,
    pub(crate) assignment: Assignment,
}

impl Variable {
    pub(crate) fn new(domain: IntegerDomain) -> Self {
        Variable {
            domain,
            assignment: Assignment::Unassigned,
        }
    }

    /// The values which are excluded when the variable is fixed to `value`.
    pub(crate) fn values_other_than(&self, value: i32) -> impl Iterator<Item = i32> + '_ {
        self.domain.iter().filter(move |&other| other != value)
    }
}
