use thiserror::Error;

/// Quantities arrive as JSON/CLI numbers but drive integer loop counts, so
/// anything that does not fit a u32 exactly is rejected up front.
const MAX_QUANTITY: f64 = u32::MAX as f64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("stock lengths must not be empty")]
    NoStock,
    #[error("required lengths must not be empty")]
    NoRequired,
    #[error("minimum quantities must not be empty")]
    NoQuantities,
    #[error("{required} required lengths but {quantities} minimum quantities")]
    QuantityMismatch { required: usize, quantities: usize },
    #[error("stock length {0} is not a positive number")]
    BadStock(f64),
    #[error("required length {0} is not a positive number")]
    BadRequired(f64),
    #[error("minimum quantity {0} is not a non-negative whole number")]
    BadQuantity(f64),
}

/// Shape and sign checks on the three input sequences. Runs before any
/// allocation work; the allocator assumes validated input.
pub fn validate(
    stock: &[f64],
    required: &[f64],
    min_quantities: &[f64],
) -> Result<(), InvalidInput> {
    if stock.is_empty() {
        return Err(InvalidInput::NoStock);
    }
    if required.is_empty() {
        return Err(InvalidInput::NoRequired);
    }
    if min_quantities.is_empty() {
        return Err(InvalidInput::NoQuantities);
    }
    if required.len() != min_quantities.len() {
        return Err(InvalidInput::QuantityMismatch {
            required: required.len(),
            quantities: min_quantities.len(),
        });
    }
    for &s in stock {
        if !s.is_finite() || s <= 0.0 {
            return Err(InvalidInput::BadStock(s));
        }
    }
    for &r in required {
        if !r.is_finite() || r <= 0.0 {
            return Err(InvalidInput::BadRequired(r));
        }
    }
    for &q in min_quantities {
        if !q.is_finite() || !(0.0..=MAX_QUANTITY).contains(&q) || q.fract() != 0.0 {
            return Err(InvalidInput::BadQuantity(q));
        }
    }
    Ok(())
}
