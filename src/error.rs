// error.rs

use thiserror::Error;

use crate::operation::Operation;

/// Failures raised by the calculation core.
///
/// An undo against an empty history is not an error; `Calculator::undo`
/// reports it as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("operand {operand} is not a finite number ({value})")]
    InvalidOperand { operand: char, value: f64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{operation} does not produce a finite result")]
    NonFiniteResult { operation: Operation },
}

/// Rejections from the command line parser, before anything reaches the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid command format: expected `<operation> <a> <b>`, got {0} token(s)")]
    InvalidFormat(usize),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}
