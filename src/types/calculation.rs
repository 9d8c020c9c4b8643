//! Calculation-related types for the arithmetic dispatcher
//!
//! This module defines the operation tags, operands and request records
//! consumed by [`crate::core::calculator::evaluate`].

use std::fmt;

/// Arithmetic operations supported by the dispatcher
///
/// Each variant has a one-character tag (`+`, `-`, `*`, `/`, `^`). The
/// lowercase variant names are accepted as aliases when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `a + b`
    Add,

    /// `a - b`
    Subtract,

    /// `a * b`
    Multiply,

    /// `a / b`
    ///
    /// Division by zero follows IEEE-754: `±inf` for a non-zero dividend,
    /// `NaN` for `0 / 0`.
    Divide,

    /// `a` raised to the power `b`
    Exponentiate,
}

impl Operation {
    /// All operations, in dispatch-table order
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Exponentiate,
    ];

    /// Parse an operation tag
    ///
    /// Accepts the symbols `+ - * / ^` and the case-insensitive names
    /// `add`, `subtract`, `multiply`, `divide`, `exponentiate`. Surrounding
    /// whitespace is ignored.
    ///
    /// # Returns
    ///
    /// `Some(Operation)` for a recognized tag, `None` otherwise
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "+" | "add" => Some(Operation::Add),
            "-" | "subtract" => Some(Operation::Subtract),
            "*" | "multiply" => Some(Operation::Multiply),
            "/" | "divide" => Some(Operation::Divide),
            "^" | "exponentiate" => Some(Operation::Exponentiate),
            _ => None,
        }
    }

    /// The canonical one-character tag for this operation
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Exponentiate => "^",
        }
    }

    /// Apply the operation to two numbers
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
            Operation::Exponentiate => a.powf(b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<Operation> for String {
    fn from(operation: Operation) -> Self {
        operation.symbol().to_string()
    }
}

/// A dynamically-typed operand
///
/// Requests may arrive from untyped sources (CSV cells, test tables), so the
/// operand keeps its runtime type tag. Only [`Operand::Number`] takes part in
/// arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A numeric value
    Number(f64),

    /// Any non-numeric value, kept verbatim
    Text(String),
}

impl Operand {
    /// Classify a raw text field
    ///
    /// A field that parses as `f64` (after trimming) becomes
    /// [`Operand::Number`]; anything else, including an empty field, is kept
    /// as [`Operand::Text`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) => Operand::Number(value),
            Err(_) => Operand::Text(raw.to_string()),
        }
    }

    /// The numeric value, if this operand is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Operand::Number(value) => Some(*value),
            Operand::Text(_) => None,
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Number(f64::from(value))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

/// A single calculation request
///
/// The action is stored as the raw tag so that unrecognized tags can be
/// represented and reported through the invalid-marker.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    /// Left operand
    pub a: Operand,

    /// Right operand
    pub b: Operand,

    /// Operation tag, see [`Operation::from_tag`]
    pub action: String,
}

impl CalculationRequest {
    /// Create a request from anything convertible into operands and a tag
    pub fn new(a: impl Into<Operand>, b: impl Into<Operand>, action: impl Into<String>) -> Self {
        CalculationRequest {
            a: a.into(),
            b: b.into(),
            action: action.into(),
        }
    }
}
