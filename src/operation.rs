// operation.rs

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// The closed set of arithmetic kinds the calculator understands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
    ];

    /// Lowercase command name, as typed at the prompt and written to the audit log.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
        }
    }

    fn label(self) -> &'static str {
        match self {
            OperationKind::Add => "Add",
            OperationKind::Subtract => "Subtract",
            OperationKind::Multiply => "Multiply",
            OperationKind::Divide => "Divide",
        }
    }
}

impl FromStr for OperationKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One arithmetic request. Immutable once built.
///
/// A zero divisor is accepted here and only rejected by [`Operation::evaluate`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Operation {
    kind: OperationKind,
    a: f64,
    b: f64,
}

impl Operation {
    /// Build an operation from its textual kind name.
    ///
    /// The name is matched case-insensitively. Operands must be finite.
    pub fn create(kind_name: &str, a: f64, b: f64) -> Result<Self, CalcError> {
        let kind = kind_name.parse::<OperationKind>()?;
        Self::new(kind, a, b)
    }

    pub fn new(kind: OperationKind, a: f64, b: f64) -> Result<Self, CalcError> {
        if !a.is_finite() {
            return Err(CalcError::InvalidOperand { operand: 'a', value: a });
        }
        if !b.is_finite() {
            return Err(CalcError::InvalidOperand { operand: 'b', value: b });
        }
        Ok(Self { kind, a, b })
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn operands(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    /// Compute the result. Pure; recording it is the calculator's job.
    pub fn evaluate(&self) -> Result<f64, CalcError> {
        let result = match self.kind {
            OperationKind::Add => self.a + self.b,
            OperationKind::Subtract => self.a - self.b,
            OperationKind::Multiply => self.a * self.b,
            OperationKind::Divide => {
                if self.b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                self.a / self.b
            }
        };
        if !result.is_finite() {
            return Err(CalcError::NonFiniteResult { operation: *self });
        }
        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}, {:?})", self.kind.label(), self.a, self.b)
    }
}
