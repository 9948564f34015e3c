use super::BinaryRelation;
use crate::containers::HashMap;
use crate::engine::variables::IntegerDomain;

/// The support entry of a single value `a` of the source variable.
#[derive(Clone, Debug, Default)]
struct SupportEntry {
    /// The values of the target variable compatible with `a`, fixed when the table is built.
    support: Box<[i32]>,
    /// How many of the values in `support` are still available to the target variable.
    count: u32,
}

/// The relations registered for a directed pair of variables `A -> B`, together with the AC4
/// support information computed from them.
///
/// Before [`SupportTable::build`] is called the table only collects relations. Building computes
/// `support(a)` for every value `a` of A's domain at that moment and seeds the live counter
/// `count(a) = |support(a)|`. The supports never change afterwards; the counters are adjusted by
/// the engine as values of B disappear and reappear.
#[derive(Clone, Debug, Default)]
pub(crate) struct SupportTable {
    relations: Vec<BinaryRelation>,
    entries: HashMap<i32, SupportEntry>,
}

impl SupportTable {
    pub(crate) fn add_relation(&mut self, relation: BinaryRelation) {
        self.relations.push(relation);
    }

    /// Whether `(a, b)` satisfies every registered relation; a table without relations accepts
    /// every pair.
    pub(crate) fn is_satisfied(&self, a: i32, b: i32) -> bool {
        self.relations.iter().all(|relation| relation.holds(a, b))
    }

    /// Computes the supports of every value of `source` against `target`, replacing the result of
    /// any earlier build.
    pub(crate) fn build(&mut self, source: &IntegerDomain, target: &IntegerDomain) {
        self.entries = source
            .iter()
            .map(|a| {
                let support = target
                    .iter()
                    .filter(|&b| self.is_satisfied(a, b))
                    .collect::<Box<[i32]>>();
                let count = support.len() as u32;

                (a, SupportEntry { support, count })
            })
            .collect();
    }

    /// The values of the target variable which support `value`; empty if `value` has no support
    /// or was not in the source domain when the table was built.
    pub(crate) fn support(&self, value: i32) -> &[i32] {
        self.entries
            .get(&value)
            .map(|entry| &entry.support[..])
            .unwrap_or(&[])
    }

    /// The number of supports of `value` which are currently available.
    pub(crate) fn count(&self, value: i32) -> u32 {
        self.entries.get(&value).map_or(0, |entry| entry.count)
    }

    /// Adds `delta` to the counter of `value` and returns the new count.
    ///
    /// Panics if `value` was not in the source domain when the table was built, or if the counter
    /// would become negative; both indicate a bookkeeping error in the engine.
    pub(crate) fn adjust_count(&mut self, value: i32, delta: i32) -> u32 {
        let entry = self
            .entries
            .get_mut(&value)
            .expect("counters exist for every value of the source domain");
        entry.count = entry
            .count
            .checked_add_signed(delta)
            .expect("support counters cannot become negative");
        entry.count
    }

    /// The number of supporting pairs in the table.
    pub(crate) fn num_pairs(&self) -> usize {
        self.entries.values().map(|entry| entry.support.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::SupportTable;
    use crate::engine::constraint_graph::BinaryRelation;
    use crate::engine::variables::IntegerDomain;

    #[test]
    fn supports_are_computed_from_the_current_domains() {
        let mut table = SupportTable::default();
        table.add_relation(BinaryRelation::NotEqual);

        let source = IntegerDomain::new(0..3);
        let mut target = IntegerDomain::new(0..3);
        let _ = target.remove(2);

        table.build(&source, &target);

        assert_eq!(&[1], table.support(0));
        assert_eq!(&[0], table.support(1));
        assert_eq!(&[0, 1], table.support(2));
        assert_eq!(2, table.count(2));
        assert_eq!(4, table.num_pairs());
    }

    #[test]
    fn relations_are_conjoined() {
        let mut table = SupportTable::default();
        table.add_relation(BinaryRelation::NotEqual);
        table.add_relation(BinaryRelation::custom(|a, b| a < b));

        table.build(&IntegerDomain::new(0..3), &IntegerDomain::new(0..3));

        assert_eq!(&[1, 2], table.support(0));
        assert_eq!(&[2], table.support(1));
        assert!(table.support(2).is_empty());
        assert_eq!(0, table.count(2));
    }

    #[test]
    fn table_without_relations_accepts_everything() {
        let mut table = SupportTable::default();

        table.build(&IntegerDomain::new([1, 2]), &IntegerDomain::new([5, 6, 7]));

        assert_eq!(&[5, 6, 7], table.support(1));
        assert_eq!(3, table.count(2));
    }

    #[test]
    fn values_outside_the_source_domain_have_no_support() {
        let mut table = SupportTable::default();
        table.add_relation(BinaryRelation::Equal);

        table.build(&IntegerDomain::new([1]), &IntegerDomain::new([1]));

        assert!(table.support(4).is_empty());
        assert_eq!(0, table.count(4));
    }

    #[test]
    fn counters_are_adjusted_in_place() {
        let mut table = SupportTable::default();
        table.add_relation(BinaryRelation::Adjacent);
        table.build(&IntegerDomain::new(0..5), &IntegerDomain::new(0..5));

        assert_eq!(2, table.count(2));
        assert_eq!(1, table.adjust_count(2, -1));
        assert_eq!(0, table.adjust_count(2, -1));
        assert_eq!(1, table.adjust_count(2, 1));
        assert_eq!(&[1, 3], table.support(2));
    }

    #[test]
    #[should_panic]
    fn counters_cannot_become_negative() {
        let mut table = SupportTable::default();
        table.add_relation(BinaryRelation::Equal);
        table.build(&IntegerDomain::new([1]), &IntegerDomain::new([2]));

        let _ = table.adjust_count(1, -1);
    }
}
