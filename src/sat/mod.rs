pub mod assignment;
pub mod clause;
pub mod config;
pub mod dimacs;
pub mod dp;
pub mod dpll;
pub mod error;
pub mod formula;
pub mod lit;
pub mod resolution;
pub mod strategy;

pub use assignment::Assignment;
pub use clause::Clause;
pub use config::{Method, SolverConfig};
pub use error::{Result, SatError};
pub use formula::Formula;
pub use lit::{Lit, Var};
pub use resolution::Saturation;
pub use strategy::Strategy;

/// Decides `formula` with the method and strategy named in `config`.
///
/// Configuration problems are reported before any solving starts.
pub fn solve(formula: Formula, config: &SolverConfig) -> Result<bool> {
    config.validate()?;
    log::debug!(
        "Solving {} clauses with {} ({})",
        formula.len(),
        config.method,
        config.strategy
    );
    let verdict = match config.method {
        Method::Dp => {
            let solver = dp::Solver::new(formula, config.strategy);
            let solver = match config.seed {
                Some(seed) => solver.with_seed(seed),
                None => solver,
            };
            solver.run()
        }
        Method::Dpll => {
            let solver = dpll::Solver::new(formula, config.strategy)?;
            let solver = match config.seed {
                Some(seed) => solver.with_seed(seed),
                None => solver,
            };
            solver.run()
        }
        Method::Resolution => {
            let outcome = resolution::Solver::new(formula, config.max_rounds).outcome();
            if !outcome.is_proven() {
                log::warn!(
                    "Round bound of {} reached, satisfiability is not proven",
                    config.max_rounds
                );
            }
            outcome.is_sat()
        }
    };
    Ok(verdict)
}
