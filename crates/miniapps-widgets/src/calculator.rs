#![forbid(unsafe_code)]

//! Arithmetic evaluator.
//!
//! Two raw strings, one operator symbol, one displayable outcome. Every
//! evaluation is synchronous and total: the caller always gets either a
//! result formatted to two decimals or a user-facing error message.

use std::fmt;

/// Supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}

impl Operator {
    /// All operators in selector order.
    pub const ALL: &[Operator] = &[Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Parse an operator symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The operator's display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// Evaluation failures, rendered as user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// An input did not parse as a number.
    InvalidNumber,
    /// Division with a zero divisor.
    DivisionByZero,
    /// Operator symbol outside the supported set.
    UnknownOperator,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber => write!(f, "Erro: Insira números válidos."),
            Self::DivisionByZero => write!(f, "Divisão por zero!"),
            Self::UnknownOperator => write!(f, "Erro: Operador inválido."),
        }
    }
}

impl std::error::Error for CalcError {}

/// Evaluate `a <op> b` and format the result to exactly two decimals.
///
/// Invalid numbers are reported before the operator is inspected, matching
/// the displayed-message precedence users see.
pub fn evaluate(a: &str, b: &str, op: char) -> Result<String, CalcError> {
    let lhs: f64 = a.trim().parse().map_err(|_| CalcError::InvalidNumber)?;
    let rhs: f64 = b.trim().parse().map_err(|_| CalcError::InvalidNumber)?;
    let operator = Operator::from_symbol(op).ok_or(CalcError::UnknownOperator)?;
    let value = match operator {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            lhs / rhs
        }
    };
    Ok(format!("{value:.2}"))
}
