//! Decides satisfiability of CNF formulas with three classical procedures:
//! Davis–Putnam variable elimination, resolution saturation and DPLL search.

pub mod sat;
