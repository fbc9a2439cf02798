use std::path::Path;

use super::clause::Clause;
use super::error::{Result, SatError};
use super::formula::Formula;
use super::lit::Lit;

/// Reads a DIMACS CNF text.
///
/// Comment (`c`) and problem (`p`) lines are skipped, a `%` line ends the
/// input. A clause is any run of literals closed by `0` and may span lines.
/// Tautological clauses are dropped.
pub fn parse_formula_from_dimacs_str(lines: &str) -> Result<Formula> {
    let mut formula = Formula::default();

    let mut collector = Vec::new();
    let mut open_since = 0;
    for (idx, line) in lines.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('c') || trimmed.starts_with('p') {
            continue;
        }
        // SATLIB trailer
        if trimmed.starts_with('%') {
            break;
        }

        for token in trimmed.split_whitespace() {
            let num = token.parse::<i32>().map_err(|_| SatError::MalformedInput {
                line: line_no,
                reason: format!("expected a literal, found `{token}`"),
            })?;
            match Lit::from_dimacs(num) {
                Some(lit) => {
                    if collector.is_empty() {
                        open_since = line_no;
                    }
                    collector.push(lit);
                }
                // End of clause
                None => {
                    if let Some(clause) = Clause::new(collector.drain(..)) {
                        formula.insert(clause);
                    } else {
                        log::trace!("Dropping tautological clause ending on line {line_no}");
                    }
                }
            }
        }
    }

    if !collector.is_empty() {
        return Err(SatError::MalformedInput {
            line: open_since,
            reason: "clause is missing its terminating `0`".to_string(),
        });
    }
    log::debug!("Read {} clauses", formula.len());
    Ok(formula)
}

pub fn read_formula(path: impl AsRef<Path>) -> Result<Formula> {
    let text = std::fs::read_to_string(path)?;
    parse_formula_from_dimacs_str(&text)
}
