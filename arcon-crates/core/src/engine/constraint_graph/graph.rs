use super::BinaryRelation;
use super::SupportTable;
use crate::basic_types::Solution;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::variables::Variable;
use crate::engine::variables::VariableId;
use crate::engine::FreeVariables;

/// The index of a directed constraint `A -> B` in the [`ConstraintGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct DirectedConstraintId(u32);

impl StorageKey for DirectedConstraintId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        DirectedConstraintId(index as u32)
    }
}

/// A variable sharing at least one constraint with the variable whose neighbour it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Neighbour {
    pub(crate) variable: VariableId,
    /// The table `self -> neighbour`.
    pub(crate) outgoing: DirectedConstraintId,
    /// The table `neighbour -> self`.
    pub(crate) incoming: DirectedConstraintId,
}

/// Sparse adjacency structure over the variables of a problem.
///
/// Every constrained ordered pair of variables owns exactly one [`SupportTable`]; the tables for
/// `A -> B` and `B -> A` are always created together.
#[derive(Debug, Default)]
pub(crate) struct ConstraintGraph {
    neighbours: KeyedVec<VariableId, Vec<Neighbour>>,
    tables: KeyedVec<DirectedConstraintId, SupportTable>,
    /// The source and target of each directed constraint.
    endpoints: KeyedVec<DirectedConstraintId, (VariableId, VariableId)>,
    lookup: HashMap<(VariableId, VariableId), DirectedConstraintId>,
}

impl ConstraintGraph {
    /// Registers `relation` over `(a, b)` and its mirror over `(b, a)`.
    pub(crate) fn add_relation(&mut self, a: VariableId, b: VariableId, relation: BinaryRelation) {
        let mirrored = relation.mirrored();
        let (forward, backward) = self.get_or_create_pair(a, b);

        self.tables[forward].add_relation(relation);
        self.tables[backward].add_relation(mirrored);
    }

    /// The neighbours of `variable`, in the order in which they were first constrained with it.
    pub(crate) fn neighbours(&self, variable: VariableId) -> &[Neighbour] {
        self.neighbours
            .get(variable)
            .map(|neighbours| &neighbours[..])
            .unwrap_or(&[])
    }

    pub(crate) fn table(&self, constraint: DirectedConstraintId) -> &SupportTable {
        &self.tables[constraint]
    }

    /// The table for `source -> target`, if the pair is constrained.
    #[cfg(test)]
    pub(crate) fn table_between(
        &self,
        source: VariableId,
        target: VariableId,
    ) -> Option<&SupportTable> {
        self.lookup
            .get(&(source, target))
            .map(|&constraint| &self.tables[constraint])
    }

    pub(crate) fn num_directed_constraints(&self) -> usize {
        self.tables.len()
    }

    /// The number of supporting value pairs over all tables.
    pub(crate) fn num_support_pairs(&self) -> usize {
        self.tables.iter().map(SupportTable::num_pairs).sum()
    }

    /// Builds every support table from the current domains of the variables.
    pub(crate) fn build_support_tables(&mut self, variables: &KeyedVec<VariableId, Variable>) {
        for (constraint, &(source, target)) in self.endpoints.keys().zip(self.endpoints.iter()) {
            self.tables[constraint].build(&variables[source].domain, &variables[target].domain);
        }
    }

    /// Applies the disappearance (`delta = -1`) or reappearance (`delta = 1`) of `value` from
    /// `variable` to the counters of its free neighbours.
    ///
    /// For every free neighbour `N` and every value `u` of `N` supported by `value`, the counter
    /// of `u` in the table `N -> variable` is adjusted. `on_exhausted` is called for every counter
    /// that drops to zero.
    pub(crate) fn update_neighbour_counters(
        &mut self,
        variable: VariableId,
        value: i32,
        delta: i32,
        free_variables: &FreeVariables,
        mut on_exhausted: impl FnMut(VariableId, i32),
    ) {
        let Some(neighbours) = self.neighbours.get(variable) else {
            return;
        };

        for neighbour in neighbours {
            if !free_variables.contains(neighbour.variable) {
                continue;
            }

            let (outgoing, incoming) = self.tables.read_write(neighbour.outgoing, neighbour.incoming);
            for &supported in outgoing.support(value) {
                if incoming.adjust_count(supported, delta) == 0 {
                    on_exhausted(neighbour.variable, supported);
                }
            }
        }
    }

    /// Whether the values of `solution` satisfy every registered relation.
    pub(crate) fn is_satisfied_by(&self, solution: &Solution) -> bool {
        self.endpoints
            .keys()
            .zip(self.endpoints.iter())
            .all(|(constraint, &(source, target))| {
                match (solution.get(source), solution.get(target)) {
                    (Some(a), Some(b)) => self.tables[constraint].is_satisfied(a, b),
                    _ => false,
                }
            })
    }

    /// Recomputes every counter of a free source variable from scratch and compares it to the
    /// live counter; a fixed target only contributes its assigned value.
    pub(crate) fn counters_are_consistent(
        &self,
        variables: &KeyedVec<VariableId, Variable>,
        free_variables: &FreeVariables,
    ) -> bool {
        self.endpoints
            .keys()
            .zip(self.endpoints.iter())
            .filter(|(_, &(source, _))| free_variables.contains(source))
            .all(|(constraint, &(source, target))| {
                let table = &self.tables[constraint];
                let target = &variables[target];

                variables[source].domain.iter().all(|value| {
                    let expected = table
                        .support(value)
                        .iter()
                        .filter(|&&supported| match target.assignment.value() {
                            Some(assigned) => supported == assigned,
                            None => target.domain.contains(supported),
                        })
                        .count();

                    table.count(value) as usize == expected
                })
            })
    }

    fn get_or_create_pair(
        &mut self,
        a: VariableId,
        b: VariableId,
    ) -> (DirectedConstraintId, DirectedConstraintId) {
        if let Some(&forward) = self.lookup.get(&(a, b)) {
            return (forward, self.lookup[&(b, a)]);
        }

        let forward = self.tables.push(SupportTable::default());
        let backward = self.tables.push(SupportTable::default());
        let _ = self.endpoints.push((a, b));
        let _ = self.endpoints.push((b, a));
        let _ = self.lookup.insert((a, b), forward);
        let _ = self.lookup.insert((b, a), backward);

        let largest = a.max(b);
        self.neighbours.accomodate(largest, Vec::new());
        self.neighbours[a].push(Neighbour {
            variable: b,
            outgoing: forward,
            incoming: backward,
        });
        self.neighbours[b].push(Neighbour {
            variable: a,
            outgoing: backward,
            incoming: forward,
        });

        (forward, backward)
    }
}
