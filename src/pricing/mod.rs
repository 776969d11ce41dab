//! Pricing rule using rust_decimal for precision
//!
//! All price derivation is done using `Decimal` internally, then converted to
//! `f64` for storage/serialization.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Fixed multiplier applied to a raw cost to derive the sale price
pub const MARKUP_FACTOR: u32 = 3;

/// Convert f64 to Decimal for calculation
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Derive the sale price from a raw cost: `raw * MARKUP_FACTOR`
///
/// Deterministic; called on every product create and update so the stored
/// `finalPrice` never drifts from `rawPrice`.
pub fn compute_final_price(raw_price: f64) -> f64 {
    to_f64(to_decimal(raw_price) * Decimal::from(MARKUP_FACTOR))
}

/// Quotation total: sale price times quantity
pub fn compute_total_amount(final_price: f64, quantity: i64) -> f64 {
    to_f64(to_decimal(final_price) * Decimal::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_is_three_times_raw() {
        assert_eq!(compute_final_price(100.0), 300.0);
        assert_eq!(compute_final_price(150.0), 450.0);
        assert_eq!(compute_final_price(0.0), 0.0);
    }

    #[test]
    fn test_markup_decimal_precision() {
        // 0.1 * 3 is not exactly 0.3 in f64; Decimal keeps it exact
        assert_eq!(compute_final_price(0.1), 0.3);
        assert_eq!(compute_final_price(33.33), 99.99);
    }

    #[test]
    fn test_non_finite_raw_defaults_to_zero() {
        assert_eq!(compute_final_price(f64::NAN), 0.0);
        assert_eq!(compute_final_price(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(compute_total_amount(300.0, 2), 600.0);
        assert_eq!(compute_total_amount(99.99, 3), 299.97);
    }
}
