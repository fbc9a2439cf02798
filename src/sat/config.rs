use std::fmt;
use std::str::FromStr;

use super::error::SatError;
use super::strategy::{LiteralChoice, Strategy};

pub mod defaults {
    use super::Method;
    use crate::sat::strategy::Strategy;

    pub const METHOD: Method = Method::Dpll;
    pub const STRATEGY: Strategy = Strategy::First;
    pub const MAX_ROUNDS: usize = 100;
}

/// Which procedure decides the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Dp,
    Dpll,
    Resolution,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dp => "dp",
            Self::Dpll => "dpll",
            Self::Resolution => "resolution",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Method {
    type Err = SatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dp" => Ok(Self::Dp),
            "dpll" => Ok(Self::Dpll),
            "resolution" => Ok(Self::Resolution),
            _ => Err(SatError::InvalidMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub method: Method,
    /// Elimination order for DP, branching literal for DPLL. Unused by resolution.
    pub strategy: Strategy,
    /// Round bound for resolution.
    pub max_rounds: usize,
    /// Seed for the `random` strategy. Drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        use defaults::*;
        SolverConfig {
            method: METHOD,
            strategy: STRATEGY,
            max_rounds: MAX_ROUNDS,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Rejects strategies the chosen method cannot use.
    pub fn validate(&self) -> Result<(), SatError> {
        if self.method == Method::Dpll {
            LiteralChoice::try_from(self.strategy)?;
        }
        Ok(())
    }
}
