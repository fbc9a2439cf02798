use super::clause::Clause;
use super::lit::{Lit, Var};

use std::collections::{btree_set, BTreeSet, HashMap};
use std::fmt;

use itertools::Itertools;

/// A conjunction of clauses.
///
/// Clauses are kept in their sorted order, which is the order every
/// "first appearance" rule refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: BTreeSet<Clause>,
}

impl Formula {
    pub fn new(clauses: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: clauses.into_iter().collect(),
        }
    }

    /// Builds a formula from DIMACS integer clauses, dropping tautologies.
    pub fn from_dimacs<C: AsRef<[i32]>>(clauses: impl IntoIterator<Item = C>) -> Self {
        clauses
            .into_iter()
            .filter_map(|c| Clause::from_dimacs(c.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn has_empty_clause(&self) -> bool {
        self.clauses.contains(&Clause::empty())
    }

    /// Adds a clause, returning whether it was new.
    pub fn insert(&mut self, clause: Clause) -> bool {
        self.clauses.insert(clause)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Clause> {
        self.clauses.iter()
    }

    /// Every literal occurrence, clause by clause.
    pub fn literals(&self) -> impl Iterator<Item = Lit> + '_ {
        self.clauses.iter().flat_map(|c| c.iter().copied())
    }

    /// Distinct variables in order of first appearance.
    pub fn vars(&self) -> Vec<Var> {
        self.literals().map(|lit| lit.get_var()).unique().collect()
    }

    /// Occurrences of each variable, both polarities counted.
    pub fn var_counts(&self) -> HashMap<Var, usize> {
        self.literals().map(|lit| lit.get_var()).counts()
    }

    pub fn unit_literals(&self) -> Vec<Lit> {
        self.clauses.iter().filter_map(Clause::unit_lit).collect()
    }

    /// The formula once `lit` is known to be true.
    ///
    /// Clauses holding `lit` are satisfied and dropped, and `-lit` is removed
    /// from the clauses holding it.
    pub fn simplify(&self, lit: Lit) -> Formula {
        let negated = lit.negate();
        self.clauses
            .iter()
            .filter(|c| !c.contains(&lit))
            .map(|c| {
                if c.contains(&negated) {
                    c.without(&negated)
                } else {
                    c.clone()
                }
            })
            .collect()
    }

    /// Splits the clauses into those holding `var`, those holding `-var` and the rest.
    pub fn partition(&self, var: Var) -> (Vec<&Clause>, Vec<&Clause>, Vec<&Clause>) {
        let (pos, neg) = (Lit::pos(var), Lit::neg(var));
        let mut partition = (Vec::new(), Vec::new(), Vec::new());
        for clause in self.clauses.iter() {
            if clause.contains(&pos) {
                partition.0.push(clause);
            } else if clause.contains(&neg) {
                partition.1.push(clause);
            } else {
                partition.2.push(clause);
            }
        }
        partition
    }

    /// Whether every clause of `other` already occurs in `self`.
    pub fn includes(&self, other: &Formula) -> bool {
        other.clauses.is_subset(&self.clauses)
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<Clause> for Formula {
    fn extend<I: IntoIterator<Item = Clause>>(&mut self, iter: I) {
        self.clauses.extend(iter)
    }
}

impl IntoIterator for Formula {
    type Item = Clause;
    type IntoIter = btree_set::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.clauses.iter().join(", "))
    }
}
