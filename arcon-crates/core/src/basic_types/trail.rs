use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::arcon_assert_simple;

/// A stack of undo records grouped by search depth.
///
/// Every search node opens a checkpoint before it propagates; the records pushed afterwards
/// belong to that node. Closing the checkpoint hands the records back in the reverse order of
/// insertion, which is the order in which they have to be undone.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    /// At index i is the position on the trail where the records of the (i + 1)-th checkpoint
    /// start.
    checkpoint_starts: Vec<usize>,
    records: Vec<T>,
}

// Not derived, deriving would require `T: Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            checkpoint_starts: Vec::default(),
            records: Vec::default(),
        }
    }
}

impl<T> Trail<T> {
    /// Opens a new checkpoint; the records pushed from now on belong to it.
    pub(crate) fn push_checkpoint(&mut self) {
        self.checkpoint_starts.push(self.records.len());
    }

    /// The number of open checkpoints.
    pub(crate) fn depth(&self) -> usize {
        self.checkpoint_starts.len()
    }

    /// The records pushed since the last checkpoint was opened.
    pub(crate) fn records_since_checkpoint(&self) -> &[T] {
        let start = self.checkpoint_starts.last().copied().unwrap_or(0);
        &self.records[start..]
    }

    /// Closes the most recent checkpoint and returns its records, most recent first.
    pub(crate) fn pop_checkpoint(&mut self) -> Rev<Drain<'_, T>> {
        arcon_assert_simple!(
            !self.checkpoint_starts.is_empty(),
            "attempted to close a checkpoint while none is open"
        );

        let start = self.checkpoint_starts.pop().unwrap_or(0);
        self.records.drain(start..).rev()
    }

    pub(crate) fn push(&mut self, record: T) {
        self.records.push(record)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_observed_in_push_order() {
        let mut trail = Trail::default();
        trail.push_checkpoint();

        for record in ['a', 'b', 'c'] {
            trail.push(record);
        }

        assert_eq!(&['a', 'b', 'c'], trail.deref());
        assert_eq!(&['a', 'b', 'c'], trail.records_since_checkpoint());
    }

    #[test]
    fn closing_a_checkpoint_returns_its_records_in_reverse() {
        let mut trail = Trail::default();
        trail.push_checkpoint();
        trail.push(1);
        trail.push_checkpoint();
        trail.push(2);
        trail.push(3);

        let undone = trail.pop_checkpoint().collect::<Vec<_>>();

        assert_eq!(vec![3, 2], undone);
        assert_eq!(&[1], trail.deref());
        assert_eq!(1, trail.depth());
    }

    #[test]
    fn empty_checkpoints_are_tracked() {
        let mut trail: Trail<u32> = Trail::default();
        trail.push_checkpoint();
        trail.push_checkpoint();
        trail.push_checkpoint();

        assert_eq!(3, trail.depth());
        assert_eq!(0, trail.pop_checkpoint().count());
        assert_eq!(2, trail.depth());
    }

    #[test]
    fn records_since_checkpoint_only_contains_the_latest_checkpoint() {
        let mut trail = Trail::default();
        trail.push_checkpoint();
        trail.push(1);
        trail.push(2);
        trail.push_checkpoint();
        trail.push(3);

        assert_eq!(&[3], trail.records_since_checkpoint());

        let _ = trail.pop_checkpoint();
        assert_eq!(&[1, 2], trail.records_since_checkpoint());
    }
}
