use rand::rngs::StdRng;
use rand::SeedableRng;

use super::assignment::Assignment;
use super::error::SatError;
use super::formula::Formula;
use super::lit::{Lit, Var};
use super::strategy::{LiteralChoice, Strategy};

/// A decision waiting for its `false` branch.
#[derive(Debug)]
struct Frame {
    formula: Formula,
    assignment: Assignment,
    var: Var,
}

#[derive(Debug)]
enum State {
    Propagating(Formula, Assignment),
    Deciding(Formula, Assignment),
    Branching(Frame, bool),
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct Solver {
    formula: Formula,
    assignment: Assignment,
    choice: LiteralChoice,
    rng: StdRng,
}

impl Solver {
    /// Fails if `strategy` is not one DPLL can branch with.
    pub fn new(formula: Formula, strategy: Strategy) -> Result<Self, SatError> {
        Ok(Self {
            formula,
            assignment: Assignment::new(),
            choice: LiteralChoice::try_from(strategy)?,
            rng: StdRng::from_entropy(),
        })
    }

    /// Starts the search from `assignment` instead of an empty one.
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.assignment = assignment;
        self
    }

    /// Fixes the generator behind the `random` strategy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Searches depth first, `true` before `false`, stopping at the first
    /// satisfied branch.
    ///
    /// Pending `false` branches live on an explicit stack, so deep searches do
    /// not grow the call stack.
    pub fn run(mut self) -> bool {
        let mut pending: Vec<Frame> = Vec::new();
        let mut state = State::Propagating(self.formula, self.assignment);
        loop {
            state = match state {
                State::Propagating(formula, assignment) => {
                    let (formula, assignment) = unit_propagate(formula, assignment);
                    State::Deciding(formula, assignment)
                }
                State::Deciding(formula, assignment) => {
                    if formula.is_empty() {
                        State::Success
                    } else if formula.has_empty_clause() {
                        State::Failure
                    } else {
                        match self.choice.choose(&formula, &assignment, &mut self.rng) {
                            // nothing left to decide on
                            None => State::Success,
                            Some(lit) => {
                                let frame = Frame {
                                    formula,
                                    assignment,
                                    var: lit.get_var(),
                                };
                                State::Branching(frame, true)
                            }
                        }
                    }
                }
                State::Branching(frame, value) => {
                    log::debug!(
                        "Deciding {} = {value} at depth {}",
                        frame.var,
                        pending.len()
                    );
                    let lit = Lit::with_value(frame.var, value);
                    let next = State::Propagating(
                        frame.formula.simplify(lit),
                        frame.assignment.with(frame.var, value),
                    );
                    if value {
                        pending.push(frame);
                    }
                    next
                }
                State::Success => return true,
                State::Failure => match pending.pop() {
                    Some(frame) => {
                        log::trace!("Backtracking on {}", frame.var);
                        State::Branching(frame, false)
                    }
                    None => return false,
                },
            }
        }
    }
}

/// Assigns the literals of unit clauses until none is left unassigned.
///
/// A unit whose variable is already assigned is skipped, even when the
/// assignment makes it false. Conflicts show up as the empty clause.
pub fn unit_propagate(mut formula: Formula, mut assignment: Assignment) -> (Formula, Assignment) {
    let mut changed = true;
    while changed {
        changed = false;
        for lit in formula.unit_literals() {
            if assignment.is_assigned(lit.get_var()) {
                continue;
            }
            log::trace!("Propagating {lit}");
            assignment.assign(lit.get_var(), !lit.is_negated());
            formula = formula.simplify(lit);
            changed = true;
        }
    }
    (formula, assignment)
}

pub fn solve(
    formula: Formula,
    assignment: Assignment,
    strategy: Strategy,
) -> Result<bool, SatError> {
    Ok(Solver::new(formula, strategy)?
        .with_assignment(assignment)
        .run())
}

#[cfg(test)]
mod dpll_test {
    use super::{solve, unit_propagate, Solver};
    use crate::sat::assignment::Assignment;
    use crate::sat::clause::Clause;
    use crate::sat::dimacs::parse_formula_from_dimacs_str;
    use crate::sat::error::SatError;
    use crate::sat::formula::Formula;
    use crate::sat::strategy::Strategy;

    const STRATEGIES: [Strategy; 3] = [Strategy::First, Strategy::Random, Strategy::MostFrequent];

    fn run(formula: &Formula, strategy: Strategy) -> bool {
        Solver::new(formula.clone(), strategy).unwrap().run()
    }

    #[test]
    fn unsat_simple() {
        let formula = Formula::from_dimacs([vec![1], vec![-1]]);
        for strategy in STRATEGIES {
            assert_eq!(run(&formula, strategy), false);
        }
    }

    #[test]
    fn sat_single_var() {
        let formula = Formula::from_dimacs([vec![1]]);
        assert_eq!(run(&formula, Strategy::First), true)
    }

    #[test]
    fn sat_single_var_negated() {
        let formula = Formula::from_dimacs([vec![-1]]);
        assert_eq!(run(&formula, Strategy::First), true)
    }

    #[test]
    fn sat_neg_unit_prop() {
        let formula = Formula::from_dimacs([vec![-1], vec![1, 2]]);
        assert_eq!(run(&formula, Strategy::First), true)
    }

    #[test]
    fn empty_formula_is_sat() {
        for strategy in STRATEGIES {
            assert!(solve(Formula::default(), Assignment::new(), strategy).unwrap());
        }
    }

    #[test]
    fn empty_clause_is_unsat() {
        let formula = Formula::new(vec![Clause::empty(), Clause::from_dimacs(&[1]).unwrap()]);
        for strategy in STRATEGIES {
            assert!(!solve(formula.clone(), Assignment::new(), strategy).unwrap());
        }
    }

    #[test]
    fn least_frequent_rejected_before_solving() {
        let result = solve(Formula::default(), Assignment::new(), Strategy::LeastFrequent);
        assert!(matches!(result, Err(SatError::InvalidStrategy(_))));
    }

    #[test]
    fn propagation_chains_units() {
        let formula = Formula::from_dimacs([vec![1], vec![-1, 2], vec![-2, 3], vec![-3, 4, 5]]);
        let (formula, assignment) = unit_propagate(formula, Assignment::new());
        assert_eq!(formula, Formula::from_dimacs([vec![4, 5]]));
        assert_eq!(assignment.get(1), Some(true));
        assert_eq!(assignment.get(2), Some(true));
        assert_eq!(assignment.get(3), Some(true));
        assert_eq!(assignment.get(4), None);
    }

    #[test]
    fn propagation_exposes_conflict() {
        let formula = Formula::from_dimacs([vec![1], vec![-1]]);
        let (formula, assignment) = unit_propagate(formula, Assignment::new());
        assert!(formula.has_empty_clause());
        assert_eq!(assignment.len(), 1);
    }

    #[test]
    fn propagation_without_units_is_identity() {
        let formula = Formula::from_dimacs([vec![1, 2], vec![-1, -2]]);
        let (propagated, assignment) = unit_propagate(formula.clone(), Assignment::new());
        assert_eq!(propagated, formula);
        assert!(assignment.is_empty());
    }

    #[test]
    fn starting_assignment_is_kept() {
        // 1 is already decided, so the unit on it is not propagated again
        let formula = Formula::from_dimacs([vec![1], vec![2, 3]]);
        let assignment: Assignment = [(1, false)].into_iter().collect();
        let (propagated, assignment) = unit_propagate(formula.clone(), assignment);
        assert_eq!(propagated, formula);
        assert_eq!(assignment.get(1), Some(false));
        assert!(solve(formula, assignment, Strategy::First).unwrap());
    }

    #[test]
    fn sat_three_clauses() {
        let formula = Formula::from_dimacs([vec![1, 2], vec![-1, 3], vec![-2, -3]]);
        for strategy in STRATEGIES {
            for seed in 0..8 {
                let solver = Solver::new(formula.clone(), strategy).unwrap();
                assert!(solver.with_seed(seed).run(), "{strategy} seed {seed}");
            }
        }
    }

    #[test]
    fn unsat_two_var_xor() {
        let formula = Formula::from_dimacs([vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]]);
        for strategy in STRATEGIES {
            for seed in 0..8 {
                let solver = Solver::new(formula.clone(), strategy).unwrap();
                assert!(!solver.with_seed(seed).run(), "{strategy} seed {seed}");
            }
        }
    }

    #[test]
    fn unsat_complex() {
        // (𝑥∨𝑦∨𝑧) ∧ (𝑥∨𝑦∨¬𝑧) ∧ (𝑥∨¬𝑦∨𝑧) ∧ (𝑥∨¬𝑦∨¬𝑧) ∧ (¬𝑥∨𝑦∨𝑧) ∧ (¬𝑥∨𝑦∨¬𝑧) ∧ (¬𝑥∨¬𝑦∨𝑧) ∧ (¬𝑥∨¬𝑦∨¬𝑧)
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
        for strategy in STRATEGIES {
            assert_eq!(run(&formula, strategy), false);
        }
    }

    #[test]
    fn simple_dimacs() {
        let str = "
          c  simple_v3_c2.cnf
          c  satisfiable
          c
          p cnf 3 2
          1 -3 0
          2 3 -1 0
        ";
        let formula = parse_formula_from_dimacs_str(str).unwrap();
        assert_eq!(run(&formula, Strategy::First), true);
    }

    #[test]
    fn simple_dimacs2() {
        let str = "
            p cnf 5 3
            1 -5 4 0
            -1 5 3 4 0
            -3 -4 0
        ";
        let formula = parse_formula_from_dimacs_str(str).unwrap();
        assert_eq!(run(&formula, Strategy::MostFrequent), true);
    }

    #[test]
    fn long_chain_of_decisions() {
        // no unit ever appears, so every variable but the last is a decision
        let n: i32 = 600;
        let formula = Formula::from_dimacs((1..n).map(|v| vec![v, v + 1]));
        assert!(run(&formula, Strategy::First));
    }
}
