//! # Validation Module
//!
//! Input validation rules for Prorata.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host (CLI, UI, test harness)                                 │
//! │  ├── Obtains the raw price/discount literals                           │
//! │  └── Immediate user feedback on obviously bad input                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Constructors (Rust)                                          │
//! │  └── THIS MODULE: literal parsing + business rule validation           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: allocate()                                                   │
//! │  └── Trusts construction invariants, never re-validates                │
//! │                                                                         │
//! │  Fail fast: the first violated rule wins, nothing partial survives     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use prorata_core::validation::parse_price_literal;
//!
//! // Parse and validate a price before building an Item
//! assert!(parse_price_literal("10.99").is_ok());
//! assert!(parse_price_literal("").is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::{AllocationError, AllocationResult};
use crate::precision::round_to_working_precision;
use crate::MAX_ALLOCATION_ITEMS;

// =============================================================================
// Literal Validators
// =============================================================================

/// Parses and validates a price literal.
///
/// ## Rules
/// - Must not be empty after trimming whitespace
/// - Must parse as a decimal number
/// - Must be strictly positive (zero and negative both rejected)
///
/// ## Returns
/// The parsed price, rounded to the working precision.
///
/// ## Example
/// ```rust
/// use prorata_core::validation::parse_price_literal;
///
/// assert!(parse_price_literal("500").is_ok());
/// assert!(parse_price_literal("  ").is_err());
/// assert!(parse_price_literal("0").is_err());
/// ```
pub fn parse_price_literal(literal: &str) -> AllocationResult<Decimal> {
    let literal = literal.trim();

    if literal.is_empty() {
        return Err(AllocationError::InvalidPrice);
    }

    let price: Decimal = literal
        .parse()
        .map_err(|_| AllocationError::UnparsablePrice {
            literal: literal.to_string(),
        })?;

    if price <= Decimal::ZERO {
        return Err(AllocationError::NonPositivePrice { value: price });
    }

    Ok(round_to_working_precision(price))
}

/// Parses and validates a total discount literal.
///
/// Same rules as [`parse_price_literal`], reported under the discount
/// error kinds so the caller can tell which input was at fault.
pub fn parse_discount_literal(literal: &str) -> AllocationResult<Decimal> {
    let literal = literal.trim();

    if literal.is_empty() {
        return Err(AllocationError::InvalidDiscount);
    }

    let discount: Decimal = literal
        .parse()
        .map_err(|_| AllocationError::UnparsableDiscount {
            literal: literal.to_string(),
        })?;

    if discount <= Decimal::ZERO {
        return Err(AllocationError::NonPositiveDiscount { value: discount });
    }

    Ok(round_to_working_precision(discount))
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the item list cardinality.
///
/// ## Rules
/// - Must contain at least one item
/// - Must not exceed MAX_ALLOCATION_ITEMS (5)
pub fn validate_item_count(count: usize) -> AllocationResult<()> {
    if count == 0 {
        return Err(AllocationError::EmptyItemList);
    }

    if count > MAX_ALLOCATION_ITEMS {
        return Err(AllocationError::TooManyItems {
            count,
            max: MAX_ALLOCATION_ITEMS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_price_literal_valid() {
        assert_eq!(parse_price_literal("500").unwrap(), dec!(500));
        assert_eq!(parse_price_literal("10.99").unwrap(), dec!(10.99));
        assert_eq!(parse_price_literal("  42 ").unwrap(), dec!(42));
    }

    #[test]
    fn test_parse_price_literal_rounds_to_working_precision() {
        assert_eq!(parse_price_literal("123.456789").unwrap(), dec!(123.4568));
    }

    #[test]
    fn test_parse_price_literal_missing() {
        assert!(matches!(
            parse_price_literal(""),
            Err(AllocationError::InvalidPrice)
        ));
        assert!(matches!(
            parse_price_literal("   "),
            Err(AllocationError::InvalidPrice)
        ));
    }

    #[test]
    fn test_parse_price_literal_unparsable() {
        assert!(matches!(
            parse_price_literal("abc"),
            Err(AllocationError::UnparsablePrice { .. })
        ));
        assert!(matches!(
            parse_price_literal("12,50"),
            Err(AllocationError::UnparsablePrice { .. })
        ));
    }

    #[test]
    fn test_parse_price_literal_non_positive() {
        assert!(matches!(
            parse_price_literal("0"),
            Err(AllocationError::NonPositivePrice { .. })
        ));
        assert!(matches!(
            parse_price_literal("-10"),
            Err(AllocationError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn test_parse_discount_literal_valid() {
        assert_eq!(parse_discount_literal("200").unwrap(), dec!(200));
        assert_eq!(parse_discount_literal(" 0.5 ").unwrap(), dec!(0.5));
    }

    #[test]
    fn test_parse_discount_literal_rejections() {
        assert!(matches!(
            parse_discount_literal(""),
            Err(AllocationError::InvalidDiscount)
        ));
        assert!(matches!(
            parse_discount_literal("something"),
            Err(AllocationError::UnparsableDiscount { .. })
        ));
        assert!(matches!(
            parse_discount_literal("-123"),
            Err(AllocationError::NonPositiveDiscount { .. })
        ));
        // Negative zero parses to zero, which is still not positive
        assert!(matches!(
            parse_discount_literal("-0.0"),
            Err(AllocationError::NonPositiveDiscount { .. })
        ));
    }

    #[test]
    fn test_parsing_is_idempotent() {
        assert_eq!(
            parse_price_literal("10.50").unwrap(),
            parse_price_literal("10.50").unwrap()
        );
    }

    #[test]
    fn test_validate_item_count() {
        assert!(validate_item_count(1).is_ok());
        assert!(validate_item_count(5).is_ok());

        assert!(matches!(
            validate_item_count(0),
            Err(AllocationError::EmptyItemList)
        ));
        assert!(matches!(
            validate_item_count(6),
            Err(AllocationError::TooManyItems { count: 6, max: 5 })
        ));
    }
}
