//! Numeric inputs shared by the engines.
//!
//! Both types are validated once on construction and are immutable
//! afterwards, so the engines never re-check shapes or values per round.
mod cost;
mod payoff;

pub use cost::CostSequence;
pub use payoff::PayoffMatrix;

use crate::errors::InputError;

/// Check that `rows` is a non-empty rectangular table of finite values.
///
/// Returns the shared row width.
fn rectangular_width(rows: &[Vec<f64>]) -> Result<usize, InputError> {
    let width = rows.first().map(Vec::len).unwrap_or(0);
    if width == 0 {
        return Err(InputError::EmptyMatrix);
    }

    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(InputError::RaggedRow {
                row,
                expected: width,
                found: values.len(),
            });
        }
        if let Some(col) = values.iter().position(|v| !v.is_finite()) {
            return Err(InputError::NonFiniteValue { row, col });
        }
    }

    Ok(width)
}
