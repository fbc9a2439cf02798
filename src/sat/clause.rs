use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use super::lit::Lit;

/// A disjunction of literals.
///
/// A clause never holds a literal together with its negation: such a clause is
/// always true and is dropped when it would be built. The empty clause is a
/// regular value and stands for a contradiction.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    lits: BTreeSet<Lit>,
}

impl Clause {
    /// Builds a clause, or `None` if the literals form a tautology.
    pub fn new(lits: impl IntoIterator<Item = Lit>) -> Option<Self> {
        let lits: BTreeSet<Lit> = lits.into_iter().collect();
        if Self::is_tautology(&lits) {
            None
        } else {
            Some(Self { lits })
        }
    }

    /// Builds a clause from DIMACS integers. Zeros are terminators and are skipped.
    pub fn from_dimacs(values: &[i32]) -> Option<Self> {
        Self::new(values.iter().copied().filter_map(Lit::from_dimacs))
    }

    pub fn empty() -> Self {
        Self {
            lits: BTreeSet::new(),
        }
    }

    // Complementary literals are adjacent under the literal ordering.
    fn is_tautology(lits: &BTreeSet<Lit>) -> bool {
        lits.iter()
            .tuple_windows()
            .any(|(a, b)| a.get_var() == b.get_var())
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// The only literal of a unit clause.
    pub fn unit_lit(&self) -> Option<Lit> {
        if self.lits.len() == 1 {
            self.lits.first().copied()
        } else {
            None
        }
    }

    pub fn contains(&self, lit: &Lit) -> bool {
        self.lits.contains(lit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lit> + '_ {
        self.lits.iter()
    }

    /// This clause with `lit` removed.
    pub fn without(&self, lit: &Lit) -> Self {
        let mut lits = self.lits.clone();
        lits.remove(lit);
        Self { lits }
    }

    /// The first literal of `self` whose negation occurs in `other`.
    pub fn first_complement(&self, other: &Clause) -> Option<Lit> {
        self.lits
            .iter()
            .find(|lit| other.contains(&lit.negate()))
            .copied()
    }

    /// Resolves `self` (holding `lit`) against `other` (holding its negation).
    ///
    /// Returns `None` when the resolvent is a tautology.
    pub fn resolve_on(&self, other: &Clause, lit: &Lit) -> Option<Clause> {
        let negated = lit.negate();
        Self::new(
            self.lits
                .iter()
                .filter(|l| *l != lit)
                .chain(other.lits.iter().filter(|l| **l != negated))
                .copied(),
        )
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.lits.iter().join(", "))
    }
}
