//! Variable and literal selection policies shared by the DP and DPLL solvers.
//!
//! Ties between equally frequent candidates always go to the candidate that
//! appears first when the formula is read in its sorted clause order.

use std::cmp::Reverse;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use super::assignment::Assignment;
use super::error::SatError;
use super::formula::Formula;
use super::lit::{Lit, Var};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    #[default]
    First,
    Random,
    MostFrequent,
    LeastFrequent,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::First,
        Strategy::Random,
        Strategy::MostFrequent,
        Strategy::LeastFrequent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Random => "random",
            Self::MostFrequent => "most_frequent",
            Self::LeastFrequent => "least_frequent",
        }
    }

    /// The DP elimination order over every variable of `formula`.
    pub fn variable_order<R: Rng + ?Sized>(&self, formula: &Formula, rng: &mut R) -> Vec<Var> {
        let mut order = formula.vars();
        match self {
            Self::First => (),
            Self::Random => order.shuffle(rng),
            Self::MostFrequent | Self::LeastFrequent => {
                let counts = formula.var_counts();
                // stable, so equal counts keep their appearance order
                order.sort_by_key(|var| Reverse(counts.get(var).copied().unwrap_or(0)));
                if *self == Self::LeastFrequent {
                    order.reverse();
                }
            }
        }
        order
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = SatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| SatError::InvalidStrategy(s.to_string()))
    }
}

/// The strategies DPLL can branch with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralChoice {
    First,
    Random,
    MostFrequent,
}

impl TryFrom<Strategy> for LiteralChoice {
    type Error = SatError;

    fn try_from(strategy: Strategy) -> Result<Self, Self::Error> {
        match strategy {
            Strategy::First => Ok(Self::First),
            Strategy::Random => Ok(Self::Random),
            Strategy::MostFrequent => Ok(Self::MostFrequent),
            Strategy::LeastFrequent => Err(SatError::InvalidStrategy(format!(
                "{strategy} (not available for dpll)"
            ))),
        }
    }
}

impl LiteralChoice {
    /// Picks the next branching literal among occurrences of unassigned variables.
    ///
    /// Counts are taken on the current formula at every call.
    pub fn choose<R: Rng + ?Sized>(
        &self,
        formula: &Formula,
        assignment: &Assignment,
        rng: &mut R,
    ) -> Option<Lit> {
        let candidates: Vec<Lit> = formula
            .literals()
            .filter(|lit| !assignment.is_assigned(lit.get_var()))
            .collect();
        match self {
            Self::First => candidates.first().copied(),
            Self::Random => candidates.choose(rng).copied(),
            Self::MostFrequent => first_most_common(&candidates),
        }
    }
}

/// The most frequent item, the earliest one winning ties.
fn first_most_common<T: Copy + Eq + Hash>(items: &[T]) -> Option<T> {
    let counts = items.iter().counts();
    let mut best: Option<(T, usize)> = None;
    for item in items.iter().unique() {
        let count = counts.get(item).copied().unwrap_or(0);
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((*item, count));
        }
    }
    best.map(|(item, _)| item)
}
