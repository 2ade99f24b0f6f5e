//! # Item Module
//!
//! The [`Item`] type: a priced entity eligible to receive a proportional
//! share of a total discount.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Item Lifecycle                                   │
//! │                                                                         │
//! │  Item::new("500") ───► price: 500, discount: None                      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Allocator::allocate()                                                  │
//! │        │                                                                │
//! │        ├── set_discount(price × factor)   every item, in order          │
//! │        │                                                                │
//! │        └── set_discount(discount + diff)  last item only, and only     │
//! │            when the applied sum drifts from the target                  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Caller reads discount() from every item                                │
//! │                                                                         │
//! │  The price is frozen at construction; only the Allocator writes the    │
//! │  discount field.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AllocationResult;
use crate::validation::parse_price_literal;

// =============================================================================
// Item
// =============================================================================

/// A priced entity eligible to receive a proportional share of a discount.
///
/// ## Design Decisions
/// - **Price is immutable**: frozen at construction, validated strictly
///   positive. Every downstream invariant (non-zero total price, the factor
///   division) leans on this.
/// - **Discount is `Option<Decimal>`**: absent until an allocation run has
///   computed it. `None` means "not yet allocated", never "zero discount".
/// - **Derives**: full serde support so hosts can ship results as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Price frozen at construction, strictly positive.
    price: Decimal,

    /// Discount computed by the allocator; `None` until an allocation runs.
    discount: Option<Decimal>,
}

impl Item {
    /// Creates an item from a price literal.
    ///
    /// The literal is trimmed, parsed as a decimal, validated strictly
    /// positive, and rounded to the working precision.
    ///
    /// ## Errors
    /// - [`AllocationError::InvalidPrice`](crate::AllocationError::InvalidPrice)
    ///   if the literal is empty or whitespace-only
    /// - [`AllocationError::UnparsablePrice`](crate::AllocationError::UnparsablePrice)
    ///   if it does not parse as a decimal number
    /// - [`AllocationError::NonPositivePrice`](crate::AllocationError::NonPositivePrice)
    ///   if it parses to zero or a negative value
    ///
    /// ## Example
    /// ```rust
    /// use prorata_core::Item;
    ///
    /// let item = Item::new("10.99").unwrap();
    /// assert!(item.discount().is_none());
    ///
    /// assert!(Item::new("-1").is_err());
    /// ```
    pub fn new(price_literal: &str) -> AllocationResult<Self> {
        let price = parse_price_literal(price_literal)?;

        Ok(Item {
            price,
            discount: None,
        })
    }

    /// Returns the price frozen at construction.
    #[inline]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the computed discount, or `None` if no allocation has run.
    #[inline]
    pub fn discount(&self) -> Option<Decimal> {
        self.discount
    }

    /// Sets the discount.
    ///
    /// No validation: the allocator is the trusted caller and the only
    /// intended writer.
    #[inline]
    pub fn set_discount(&mut self, discount: Decimal) {
        self.discount = Some(discount);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
