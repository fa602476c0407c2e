use crate::error::{CalcError, Result};
use serde::Serialize;
use std::fmt;

/// One fixed binary arithmetic function, bound to one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Multiply,
    Divide,
}

/// Value carried in the `Message` field of a successful response.
///
/// Integer operations yield [`Outcome::Int`], widened to `i128` so that the sum, difference or
/// product of any two `i64` operands is exact. Division yields [`Outcome::Float`], which always
/// serializes with a fractional part (`4.0`, not `4`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Int(i128),
    Float(f64),
}

impl Operation {
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Add => "/add",
            Self::Sub => "/sub",
            Self::Multiply => "/multiply",
            Self::Divide => "/divide",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation to already-coerced operands.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] for `Divide` with `y == 0`.
    pub fn apply(self, x: i64, y: i64) -> Result<Outcome> {
        let (x_wide, y_wide) = (i128::from(x), i128::from(y));
        match self {
            Self::Add => Ok(Outcome::Int(x_wide + y_wide)),
            Self::Sub => Ok(Outcome::Int(x_wide - y_wide)),
            Self::Multiply => Ok(Outcome::Int(x_wide * y_wide)),
            Self::Divide => {
                if y == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                #[allow(clippy::cast_precision_loss)]
                let quotient = x as f64 / y as f64;
                Ok(Outcome::Float(quotient))
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
