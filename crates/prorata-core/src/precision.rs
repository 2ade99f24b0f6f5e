//! # Precision Module
//!
//! Fixed significant-digit rounding over [`Decimal`].
//!
//! ## Why Significant Digits?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE REPRODUCIBILITY PROBLEM                                            │
//! │                                                                         │
//! │  A division like 100 / 3 never terminates:                             │
//! │    33.333333333333333333333333333...                                   │
//! │                                                                         │
//! │  Unless every operation in the allocation path rounds the same way,    │
//! │  the leftover the reconciliation step has to absorb changes from one   │
//! │  code path to the next - and with it, every expected test value.       │
//! │                                                                         │
//! │  OUR SOLUTION: one shared working precision                            │
//! │    Parsing, the factor division, and each per-item multiplication      │
//! │    all round to 7 significant digits, half-to-even.                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use prorata_core::precision::round_to_working_precision;
//! use rust_decimal_macros::dec;
//!
//! let third = dec!(100) / dec!(3);
//! assert_eq!(round_to_working_precision(third), dec!(33.33333));
//! ```

use rust_decimal::Decimal;

use crate::WORKING_PRECISION;

/// Rounds a value to the crate-wide working precision
/// ([`WORKING_PRECISION`] significant digits, half-to-even).
///
/// Values with fewer significant digits pass through unchanged; in
/// particular the scale is never padded, so `200` stays `200`, not
/// `200.0000`.
///
/// ## Example
/// ```rust
/// use prorata_core::precision::round_to_working_precision;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_to_working_precision(dec!(0.123456789)), dec!(0.1234568));
/// assert_eq!(round_to_working_precision(dec!(200)), dec!(200));
/// ```
#[inline]
pub fn round_to_working_precision(value: Decimal) -> Decimal {
    // round_sf only returns None when rounding up would overflow the
    // 96-bit mantissa; such magnitudes are far outside any discount
    // campaign, and the unrounded value is the correct fallback.
    value.round_sf(WORKING_PRECISION).unwrap_or(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_to_seven_significant_digits() {
        assert_eq!(round_to_working_precision(dec!(0.123456789)), dec!(0.1234568));
        assert_eq!(round_to_working_precision(dec!(1234567.89)), dec!(1234568));
    }

    #[test]
    fn test_short_values_pass_through() {
        assert_eq!(round_to_working_precision(dec!(200)), dec!(200));
        assert_eq!(round_to_working_precision(dec!(0.25)), dec!(0.25));
        assert_eq!(round_to_working_precision(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_half_to_even_midpoint() {
        // The 8th digit is exactly 5 with nothing behind it: round to even
        assert_eq!(round_to_working_precision(dec!(0.12345675)), dec!(0.1234568));
        assert_eq!(round_to_working_precision(dec!(0.12345665)), dec!(0.1234566));
    }

    #[test]
    fn test_non_terminating_division() {
        let third = dec!(100) / dec!(3);
        assert_eq!(round_to_working_precision(third), dec!(33.33333));
    }
}
