//! Arithmetic dispatch
//!
//! Maps a [`CalculationRequest`] to a numeric result through the
//! [`Operation`] dispatch table. Malformed requests are an expected outcome
//! and are reported as `None`, never as an error.

use crate::types::{CalculationRequest, Operation};

/// Evaluate a calculation request
///
/// # Arguments
///
/// * `request` - Operands and operation tag
///
/// # Returns
///
/// * `Some(result)` - Both operands are numeric and the tag is recognized
/// * `None` - Either operand is non-numeric, or the tag is unrecognized
///
/// # Examples
///
/// ```
/// use teller::core::calculator::evaluate;
/// use teller::types::{CalculationRequest, Operation};
///
/// assert_eq!(evaluate(&CalculationRequest::new(10, 5, Operation::Add)), Some(15.0));
/// assert_eq!(evaluate(&CalculationRequest::new(10, 5, "invalid action")), None);
/// ```
pub fn evaluate(request: &CalculationRequest) -> Option<f64> {
    let a = request.a.as_number()?;
    let b = request.b.as_number()?;
    let operation = Operation::from_tag(&request.action)?;

    Some(operation.apply(a, b))
}
