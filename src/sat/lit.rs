use std::cmp::Ordering;
use std::fmt;

/// A propositional variable. Variables are the positive integers of a DIMACS file.
pub type Var = u32;

/// A variable together with its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    var: Var,
    negated: bool,
}

impl Lit {
    pub fn pos(var: Var) -> Self {
        Self {
            var,
            negated: false,
        }
    }

    pub fn neg(var: Var) -> Self {
        Self { var, negated: true }
    }

    /// The literal made true by assigning `value` to `var`.
    pub fn with_value(var: Var, value: bool) -> Self {
        Self {
            var,
            negated: !value,
        }
    }

    /// Reads a DIMACS literal. `0` is the clause terminator, not a literal.
    pub fn from_dimacs(value: i32) -> Option<Self> {
        match value.cmp(&0) {
            Ordering::Equal => None,
            Ordering::Greater => Some(Self::pos(value.unsigned_abs())),
            Ordering::Less => Some(Self::neg(value.unsigned_abs())),
        }
    }

    pub fn get_var(&self) -> Var {
        self.var
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn negate(&self) -> Self {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }
}

// Literals of the same variable sit next to each other, positive first.
impl Ord for Lit {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.var, self.negated).cmp(&(other.var, other.negated))
    }
}

impl PartialOrd for Lit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "-")?;
        }
        write!(f, "{}", self.var)
    }
}
