//! Strategies for selecting the variable to branch on.
mod anti_first_fail;
mod first_fail;
mod variable_selector;

pub(crate) use anti_first_fail::AntiFirstFail;
pub(crate) use first_fail::FirstFail;
pub(crate) use variable_selector::VariableSelector;

/// The strategy used to select the next variable to branch on.
///
/// Ties are always broken in favour of the variable which was created first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelection {
    /// Branch on the free variable with the largest domain.
    #[default]
    AntiFirstFail,
    /// Branch on the free variable with the smallest domain.
    FirstFail,
}

impl VariableSelection {
    pub(crate) fn create_selector(self) -> Box<dyn VariableSelector> {
        match self {
            VariableSelection::AntiFirstFail => Box::new(AntiFirstFail::default()),
            VariableSelection::FirstFail => Box::new(FirstFail::default()),
        }
    }
}

impl std::fmt::Display for VariableSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableSelection::AntiFirstFail => write!(f, "anti-first-fail"),
            VariableSelection::FirstFail => write!(f, "first-fail"),
        }
    }
}
