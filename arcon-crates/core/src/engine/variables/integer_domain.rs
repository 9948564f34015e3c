use crate::arcon_assert_moderate;

/// A finite set of integers which can shrink and be restored in O(1) per value.
///
/// The domain remembers the values it was declared with (sorted, without duplicates) and keeps a
/// membership flag per declared value. Removing a value clears its flag and restoring it sets the
/// flag again, so a removed value never has to be re-inserted into a data structure. Iteration
/// always visits the remaining values in ascending order, regardless of the order in which values
/// were removed and restored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerDomain {
    /// The values the domain was created with, sorted ascending.
    declared: Box<[i32]>,
    /// `present[i]` holds iff `declared[i]` is still part of the domain.
    present: Box<[bool]>,
    /// The number of set flags in `present`.
    size: usize,
}

impl IntegerDomain {
    /// Creates a domain containing the provided values; duplicates are ignored.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        let mut declared = values.into_iter().collect::<Vec<_>>();
        declared.sort_unstable();
        declared.dedup();

        let size = declared.len();
        IntegerDomain {
            present: vec![true; size].into_boxed_slice(),
            declared: declared.into_boxed_slice(),
            size,
        }
    }

    /// Returns how many values are currently in the domain.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains(&self, value: i32) -> bool {
        self.position(value)
            .is_some_and(|position| self.present[position])
    }

    /// Iterates over the values in the domain in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.declared
            .iter()
            .zip(self.present.iter())
            .filter_map(|(&value, &present)| present.then_some(value))
    }

    /// The values the domain was declared with, including the removed ones.
    pub fn declared_values(&self) -> &[i32] {
        &self.declared
    }

    /// Removes `value`; returns whether it was part of the domain.
    pub(crate) fn remove(&mut self, value: i32) -> bool {
        match self.position(value) {
            Some(position) if self.present[position] => {
                self.present[position] = false;
                self.size -= 1;
                true
            }
            _ => false,
        }
    }

    /// Puts a previously removed `value` back; returns whether it was absent.
    ///
    /// Only declared values can be restored.
    pub(crate) fn restore(&mut self, value: i32) -> bool {
        let position = self.position(value);
        arcon_assert_moderate!(
            position.is_some(),
            "attempted to restore {value} which was never part of the domain"
        );

        match position {
            Some(position) if !self.present[position] => {
                self.present[position] = true;
                self.size += 1;
                true
            }
            _ => false,
        }
    }

    /// Removes every value except `value`; returns whether `value` is in the domain.
    ///
    /// If `value` is not in the domain the domain is left unchanged.
    pub(crate) fn restrict_to(&mut self, value: i32) -> bool {
        let Some(kept) = self.position(value).filter(|&position| self.present[position]) else {
            return false;
        };

        self.present
            .iter_mut()
            .enumerate()
            .for_each(|(position, present)| *present = position == kept);
        self.size = 1;
        true
    }

    fn position(&self, value: i32) -> Option<usize> {
        self.declared.binary_search(&value).ok()
    }
}

impl FromIterator<i32> for IntegerDomain {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        IntegerDomain::new(iter)
    }
}
