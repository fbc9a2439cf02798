use std::collections::HashMap;

use super::lit::{Lit, Var};

/// A partial valuation built along one search branch.
///
/// Branches copy the assignment they start from; siblings never share one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: HashMap<Var, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, var: Var, val: bool) {
        self.values.insert(var, val);
    }

    /// A copy of this assignment extended with `var = val`.
    pub fn with(&self, var: Var, val: bool) -> Self {
        let mut new = self.clone();
        new.assign(var, val);
        new
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values.get(&var).copied()
    }

    /// The truth value of `lit`, if its variable is assigned.
    pub fn get_assignment(&self, lit: &Lit) -> Option<bool> {
        self.get(lit.get_var())
            .map(|val| if lit.is_negated() { !val } else { val })
    }

    pub fn is_assigned(&self, var: Var) -> bool {
        self.values.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod assignment_test {
    use super::Assignment;
    use crate::sat::lit::Lit;

    #[test]
    fn literal_value_follows_polarity() {
        let mut assignment = Assignment::new();
        assignment.assign(1, false);
        assert_eq!(assignment.get_assignment(&Lit::pos(1)), Some(false));
        assert_eq!(assignment.get_assignment(&Lit::neg(1)), Some(true));
        assert_eq!(assignment.get_assignment(&Lit::pos(2)), None);
    }

    #[test]
    fn with_leaves_original_untouched() {
        let base: Assignment = [(1, true)].into_iter().collect();
        let branch = base.with(2, false);
        assert_eq!(base.len(), 1);
        assert!(!base.is_assigned(2));
        assert_eq!(branch.get(2), Some(false));
        assert_eq!(branch.get(1), Some(true));
    }
}
