//! Resolution refutation by saturation.
//!
//! Every round resolves every pair of clauses once, on the first clashing
//! literal of the pair only. Deriving the empty clause proves the formula
//! unsatisfiable. Reaching a round that adds nothing means it is
//! satisfiable. Running out of rounds also answers satisfiable, but that
//! answer is unproven: see [`Saturation::RoundLimit`].

use itertools::Itertools;

use super::clause::Clause;
use super::formula::Formula;

/// Why saturation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saturation {
    /// The empty clause was derived.
    Refuted,
    /// A round derived nothing new.
    Fixpoint,
    /// The round bound ran out first. Reported as satisfiable without proof.
    RoundLimit,
}

impl Saturation {
    pub fn is_sat(&self) -> bool {
        !matches!(self, Self::Refuted)
    }

    /// Whether the verdict was actually derived rather than defaulted.
    pub fn is_proven(&self) -> bool {
        !matches!(self, Self::RoundLimit)
    }
}

#[derive(Debug, Clone)]
pub struct Solver {
    formula: Formula,
    max_rounds: usize,
}

impl Solver {
    pub fn new(formula: Formula, max_rounds: usize) -> Self {
        Self {
            formula,
            max_rounds,
        }
    }

    pub fn outcome(self) -> Saturation {
        let mut clauses = self.formula;
        if clauses.has_empty_clause() {
            return Saturation::Refuted;
        }

        for round in 0..self.max_rounds {
            let mut new = Formula::default();
            for (c1, c2) in clauses.iter().tuple_combinations() {
                let Some(resolvent) = resolve(c1, c2) else {
                    continue;
                };
                if resolvent.is_empty() {
                    log::debug!("Empty clause from {c1} and {c2} in round {round}");
                    return Saturation::Refuted;
                }
                new.insert(resolvent);
            }

            if clauses.includes(&new) {
                log::debug!("Saturated after {} rounds", round + 1);
                return Saturation::Fixpoint;
            }
            clauses.extend(new);
            log::trace!("Round {round} done, {} clauses", clauses.len());
        }

        log::debug!("No fixpoint within {} rounds", self.max_rounds);
        Saturation::RoundLimit
    }

    pub fn run(self) -> bool {
        self.outcome().is_sat()
    }
}

/// Resolves on the first literal of `c1` whose negation is in `c2`.
fn resolve(c1: &Clause, c2: &Clause) -> Option<Clause> {
    let lit = c1.first_complement(c2)?;
    c1.resolve_on(c2, &lit)
}

pub fn solve(formula: Formula, max_rounds: usize) -> bool {
    Solver::new(formula, max_rounds).run()
}

#[cfg(test)]
mod resolution_test {
    use super::{resolve, solve, Saturation, Solver};
    use crate::sat::config::defaults;
    use crate::sat::clause::Clause;
    use crate::sat::formula::Formula;

    #[test]
    fn empty_formula_is_sat() {
        assert_eq!(Solver::new(Formula::default(), 100).outcome(), Saturation::Fixpoint);
    }

    #[test]
    fn empty_clause_is_unsat() {
        assert_eq!(
            Solver::new(Formula::new(vec![Clause::empty()]), 100).outcome(),
            Saturation::Refuted
        );
        assert!(!solve(Formula::from_dimacs([vec![3], vec![]]), 1));
    }

    #[test]
    fn unsat_simple() {
        let formula = Formula::from_dimacs([vec![1], vec![-1]]);
        assert_eq!(Solver::new(formula, 1).outcome(), Saturation::Refuted);
    }

    #[test]
    fn unsat_two_var_xor() {
        let formula = Formula::from_dimacs([vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]]);
        assert!(!solve(formula, defaults::MAX_ROUNDS));
    }

    #[test]
    fn sat_three_clauses() {
        let formula = Formula::from_dimacs([vec![1, 2], vec![-1, 3], vec![-2, -3]]);
        let outcome = Solver::new(formula, 100).outcome();
        assert_eq!(outcome, Saturation::Fixpoint);
        assert!(outcome.is_sat() && outcome.is_proven());
    }

    #[test]
    fn round_limit_defaults_to_sat() {
        let formula = Formula::from_dimacs([vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]]);
        let outcome = Solver::new(formula.clone(), 0).outcome();
        assert_eq!(outcome, Saturation::RoundLimit);
        assert!(outcome.is_sat());
        assert!(!outcome.is_proven());
        // one round only derives units, the contradiction needs a second
        assert_eq!(Solver::new(formula.clone(), 1).outcome(), Saturation::RoundLimit);
        assert_eq!(Solver::new(formula, 2).outcome(), Saturation::Refuted);
    }

    #[test]
    fn resolves_on_first_clash_only() {
        // clash on both 1 and 2: only 1 is used, giving a tautology
        let c1 = Clause::from_dimacs(&[1, 2]).unwrap();
        let c2 = Clause::from_dimacs(&[-1, -2]).unwrap();
        assert_eq!(resolve(&c1, &c2), None);
        let c3 = Clause::from_dimacs(&[-1, 3]).unwrap();
        assert_eq!(resolve(&c1, &c3), Clause::from_dimacs(&[2, 3]));
        let c4 = Clause::from_dimacs(&[4]).unwrap();
        assert_eq!(resolve(&c1, &c4), None);
    }

    #[test]
    fn unsat_complex() {
        let formula = Formula::from_dimacs([
            vec![1, 2, 3],
            vec![1, 2, -3],
            vec![1, -2, 3],
            vec![1, -2, -3],
            vec![-1, 2, 3],
            vec![-1, 2, -3],
            vec![-1, -2, 3],
            vec![-1, -2, -3],
        ]);
        assert!(!solve(formula, defaults::MAX_ROUNDS));
    }
}
