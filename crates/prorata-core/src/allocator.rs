//! # Allocator Module
//!
//! The [`Allocator`] spreads a fixed total discount proportionally across a
//! bounded set of [`Item`]s, then forces the applied discounts to sum to the
//! target exactly.
//!
//! ## Allocation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Allocation Flow                                   │
//! │                                                                         │
//! │  Allocator::new(items, "200")                                           │
//! │       │  validates: 1..=5 items, positive parsable discount             │
//! │       ▼                                                                 │
//! │  allocate()                                                             │
//! │       │                                                                 │
//! │       ├── total_price = Σ price                 (exact)                 │
//! │       │                                                                 │
//! │       ├── factor = discount / total_price       (7 sig digits)          │
//! │       │                                                                 │
//! │       ├── item.discount = price × factor        (7 sig digits, each)    │
//! │       │                                                                 │
//! │       └── reconcile: if Σ discounts ≠ target,                          │
//! │           add the difference to the LAST item                           │
//! │                                                                         │
//! │  Result: Σ discounts == target, exactly, always                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Correct Only the Last Item?
//! Rounding each share to a fixed precision can leave the applied sum a hair
//! off the target. Concentrating the whole difference on one designated item
//! keeps the aggregate exact with a single, predictable adjustment. A
//! largest-remainder scheme would be fairer per item but changes observable
//! behavior; the single-item correction is the contract.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::AllocationResult;
use crate::item::Item;
use crate::precision::round_to_working_precision;
use crate::validation::{parse_discount_literal, validate_item_count};

// =============================================================================
// Allocator
// =============================================================================

/// Computes and applies proportional discounts across a bounded set of items.
///
/// The allocator borrows the caller's items mutably for its whole lifetime:
/// it is the sole writer of their discount fields, and the borrow checker
/// enforces that exclusivity. Callers read the results from the items after
/// the allocator is dropped.
#[derive(Debug)]
pub struct Allocator<'a> {
    /// Caller-supplied items, 1 to 5 of them, mutated in place.
    items: &'a mut [Item],

    /// Target total discount, fixed at construction, strictly positive.
    total_discount: Decimal,
}

impl<'a> Allocator<'a> {
    /// Creates an allocator over `items` with a target total discount.
    ///
    /// Validation is fail-fast, first violation wins:
    /// 1. `items` must be non-empty
    /// 2. `items` must hold at most
    ///    [`MAX_ALLOCATION_ITEMS`](crate::MAX_ALLOCATION_ITEMS) items
    /// 3. the discount literal must be non-empty after trimming
    /// 4. it must parse as a decimal number
    /// 5. it must be strictly positive
    ///
    /// ## Example
    /// ```rust
    /// use prorata_core::{Allocator, Item};
    ///
    /// let mut items = vec![Item::new("500").unwrap(), Item::new("1500").unwrap()];
    /// let allocator = Allocator::new(&mut items, "10").unwrap();
    /// ```
    pub fn new(items: &'a mut [Item], total_discount_literal: &str) -> AllocationResult<Self> {
        validate_item_count(items.len())?;
        let total_discount = parse_discount_literal(total_discount_literal)?;

        Ok(Allocator {
            items,
            total_discount,
        })
    }

    /// Allocates the total discount across the items, in place.
    ///
    /// Each item receives `price × factor` where
    /// `factor = total_discount / total_price`, both computed at the working
    /// precision. If rounding makes the applied discounts drift from the
    /// target, the difference lands on the last item (see module docs).
    ///
    /// Never fails: every failure mode was rejected at construction.
    /// Rerunning recomputes everything from the current prices; callers
    /// should invoke it once per intended allocation.
    pub fn allocate(&mut self) {
        let total_price = self.total_price();
        debug!(%total_price, "computed the total price of all items");

        let factor = round_to_working_precision(self.total_discount / total_price);
        info!(
            total_discount = %self.total_discount,
            %total_price,
            %factor,
            "derived the allocation factor"
        );

        for item in self.items.iter_mut() {
            item.set_discount(round_to_working_precision(item.price() * factor));
        }

        self.reconcile();
    }

    /// Exact sum of all item prices, in sequence order.
    ///
    /// Strictly positive by construction (non-empty slice, every price > 0),
    /// so the factor division above cannot divide by zero. A violation here
    /// is an internal invariant failure, not a recoverable input error.
    fn total_price(&self) -> Decimal {
        self.items.iter().map(Item::price).sum()
    }

    /// Forces the exact-sum invariant after per-item rounding.
    ///
    /// Compares the applied sum against the target under exact decimal
    /// value equality and, on drift, adds the whole difference to the last
    /// item's discount.
    fn reconcile(&mut self) {
        let applied: Decimal = self.items.iter().filter_map(|item| item.discount()).sum();

        if applied == self.total_discount {
            return;
        }

        let difference = self.total_discount - applied;
        info!(
            %applied,
            target = %self.total_discount,
            %difference,
            "applied discounts drift from the target, correcting the last item"
        );

        if let Some(last) = self.items.last_mut() {
            let corrected = last.discount().unwrap_or(Decimal::ZERO) + difference;
            last.set_discount(corrected);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
