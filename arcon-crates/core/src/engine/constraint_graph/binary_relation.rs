use std::fmt::Debug;
use std::fmt::Formatter;
use std::rc::Rc;

/// A relation between the value `a` of a first variable and the value `b` of a second variable.
///
/// Relations are registered for an ordered pair of variables; the engine registers the
/// [`mirrored`](BinaryRelation::mirrored) relation for the reversed pair.
#[derive(Clone)]
#[allow(
    variant_size_differences,
    reason = "the predicate is a shared pointer which is never copied in bulk"
)]
pub enum BinaryRelation {
    /// `a = b`
    Equal,
    /// `a != b`
    NotEqual,
    /// `b = a + k`
    Offset(i32),
    /// `|a - b| = 1`
    Adjacent,
    /// `a != b` and `|a - b| != k`; two queens `k` rows apart do not attack each other.
    NonAttacking(i32),
    /// An arbitrary predicate over `(a, b)`.
    Custom(Rc<dyn Fn(i32, i32) -> bool>),
}

impl BinaryRelation {
    /// Creates a [`BinaryRelation::Custom`] from a predicate.
    pub fn custom(predicate: impl Fn(i32, i32) -> bool + 'static) -> Self {
        BinaryRelation::Custom(Rc::new(predicate))
    }

    /// Whether the pair `(a, b)` satisfies the relation.
    pub fn holds(&self, a: i32, b: i32) -> bool {
        let (a_wide, b_wide) = (i64::from(a), i64::from(b));
        match self {
            BinaryRelation::Equal => a == b,
            BinaryRelation::NotEqual => a != b,
            BinaryRelation::Offset(k) => b_wide == a_wide + i64::from(*k),
            BinaryRelation::Adjacent => (a_wide - b_wide).abs() == 1,
            BinaryRelation::NonAttacking(k) => a != b && (a_wide - b_wide).abs() != i64::from(*k),
            BinaryRelation::Custom(predicate) => predicate(a, b),
        }
    }

    /// The relation over `(b, a)` which holds exactly when `self` holds over `(a, b)`.
    pub fn mirrored(&self) -> BinaryRelation {
        match self {
            BinaryRelation::Equal => BinaryRelation::Equal,
            BinaryRelation::NotEqual => BinaryRelation::NotEqual,
            BinaryRelation::Offset(k) => match k.checked_neg() {
                Some(negated) => BinaryRelation::Offset(negated),
                None => {
                    let relation = self.clone();
                    BinaryRelation::custom(move |b, a| relation.holds(a, b))
                }
            },
            BinaryRelation::Adjacent => BinaryRelation::Adjacent,
            BinaryRelation::NonAttacking(k) => BinaryRelation::NonAttacking(*k),
            BinaryRelation::Custom(predicate) => {
                let predicate = Rc::clone(predicate);
                BinaryRelation::Custom(Rc::new(move |b, a| predicate(a, b)))
            }
        }
    }
}

impl Debug for BinaryRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryRelation::Equal => write!(f, "Equal"),
            BinaryRelation::NotEqual => write!(f, "NotEqual"),
            BinaryRelation::Offset(k) => f.debug_tuple("Offset").field(k).finish(),
            BinaryRelation::Adjacent => write!(f, "Adjacent"),
            BinaryRelation::NonAttacking(k) => f.debug_tuple("NonAttacking").field(k).finish(),
            BinaryRelation::Custom(_) => write!(f, "Custom(<predicate>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryRelation;

    fn assert_mirror_agrees(relation: BinaryRelation) {
        let mirrored = relation.mirrored();
        for a in -4..=4 {
            for b in -4..=4 {
                assert_eq!(
                    relation.holds(a, b),
                    mirrored.holds(b, a),
                    "{relation:?} disagrees with its mirror on ({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn offset_is_directed() {
        let relation = BinaryRelation::Offset(1);

        assert!(relation.holds(2, 3));
        assert!(!relation.holds(3, 2));
        assert!(relation.mirrored().holds(3, 2));
    }

    #[test]
    fn non_attacking_excludes_column_and_diagonals() {
        let relation = BinaryRelation::NonAttacking(2);

        assert!(!relation.holds(1, 1));
        assert!(!relation.holds(1, 3));
        assert!(!relation.holds(3, 1));
        assert!(relation.holds(1, 2));
    }

    #[test]
    fn adjacent_only_accepts_neighbouring_values() {
        let relation = BinaryRelation::Adjacent;

        assert!(relation.holds(3, 4));
        assert!(relation.holds(4, 3));
        assert!(!relation.holds(3, 3));
        assert!(!relation.holds(3, 5));
    }

    #[test]
    fn mirrors_agree_with_their_relation() {
        assert_mirror_agrees(BinaryRelation::Equal);
        assert_mirror_agrees(BinaryRelation::NotEqual);
        assert_mirror_agrees(BinaryRelation::Offset(3));
        assert_mirror_agrees(BinaryRelation::Adjacent);
        assert_mirror_agrees(BinaryRelation::NonAttacking(1));
        assert_mirror_agrees(BinaryRelation::custom(|a, b| a < b));
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert!(!BinaryRelation::Offset(1).holds(i32::MAX, i32::MIN));
        assert!(!BinaryRelation::Adjacent.holds(i32::MIN, i32::MAX));
    }
}
