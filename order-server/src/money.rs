//! Money utilities using rust_decimal for precision
//!
//! Prices are held as `Decimal` and rounded once, at write time, to two
//! decimal places (half away from zero). Sums computed by the aggregation
//! pipeline are exact and never rounded.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult};

/// Rounding precision for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal to the f64 stored in documents
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Range-check a price and round it for storage
///
/// `0 <= price <= max`; the bound is checked before rounding so that a
/// value just above the maximum is not rounded into range.
pub fn validate_price(field: &str, price: Decimal, max: Decimal) -> AppResult<Decimal> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::validation(format!(
            "{} must be non-negative, got {}",
            field, price
        ))
        .with_detail("field", field));
    }
    if price > max {
        return Err(AppError::validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field, max, price
        ))
        .with_detail("field", field));
    }
    Ok(round2(price))
}
