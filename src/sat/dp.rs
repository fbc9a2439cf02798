//! Davis–Putnam variable elimination.
//!
//! Each variable is removed by replacing every clause mentioning it with all
//! non-tautological resolvents on it. Nothing is subsumed or simplified
//! along the way, so the clause set may grow as `|pos| * |neg|` per step.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::formula::Formula;
use super::lit::{Lit, Var};
use super::strategy::Strategy;

#[derive(Debug, Clone)]
pub struct Solver {
    formula: Formula,
    strategy: Strategy,
    rng: StdRng,
}

impl Solver {
    pub fn new(formula: Formula, strategy: Strategy) -> Self {
        Self {
            formula,
            strategy,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixes the generator behind the `random` strategy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn run(mut self) -> bool {
        if self.formula.has_empty_clause() {
            log::debug!("Formula holds the empty clause");
            return false;
        }
        // computed once, from the formula as given
        let order = self.strategy.variable_order(&self.formula, &mut self.rng);
        log::debug!("Elimination order ({}): {order:?}", self.strategy);

        let mut clauses = self.formula;
        for var in order {
            clauses = eliminate_variable(&clauses, var);
            log::trace!("Eliminated {var}, {} clauses left", clauses.len());
            if clauses.has_empty_clause() {
                log::debug!("Empty clause derived while eliminating {var}");
                return false;
            }
        }
        true
    }
}

/// Replaces the clauses mentioning `var` with their resolvents on `var`.
pub fn eliminate_variable(formula: &Formula, var: Var) -> Formula {
    let (pos, neg, rest) = formula.partition(var);
    let lit = Lit::pos(var);
    let resolvents = pos
        .iter()
        .flat_map(|c1| neg.iter().filter_map(move |c2| c1.resolve_on(c2, &lit)));
    rest.into_iter().cloned().chain(resolvents).collect()
}

pub fn solve(formula: Formula, strategy: Strategy) -> bool {
    Solver::new(formula, strategy).run()
}
