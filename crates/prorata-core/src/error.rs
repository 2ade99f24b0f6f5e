//! # Error Types
//!
//! Domain-specific error types for prorata-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  Item::new("abc")            Allocator::new(items, "-5")               │
//! │       │                           │                                     │
//! │       ▼                           ▼                                     │
//! │  UnparsablePrice             NonPositiveDiscount                        │
//! │       │                           │                                     │
//! │       └───────────┬───────────────┘                                     │
//! │                   ▼                                                     │
//! │       Caller corrects the input and reconstructs                        │
//! │                                                                         │
//! │  NOTE: allocate() itself never fails - every failure mode is caught     │
//! │        at construction time, before allocation can run.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending literal or value)
//! 3. Errors are enum variants, never String
//! 4. Each variant is a distinct failure kind the caller can match on

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Allocation Error
// =============================================================================

/// Input validation errors.
///
/// All of these are raised synchronously at construction time
/// ([`Item::new`](crate::Item::new) or
/// [`Allocator::new`](crate::Allocator::new)) and are not recoverable
/// internally: the caller must supply corrected input and reconstruct.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Price literal is missing: empty or whitespace-only.
    #[error("the price literal must not be empty")]
    InvalidPrice,

    /// Price literal does not parse as a decimal number.
    #[error("the price literal '{literal}' must be parsable as a decimal number")]
    UnparsablePrice { literal: String },

    /// Price parsed to zero or a negative value.
    #[error("the price must be strictly positive, got {value}")]
    NonPositivePrice { value: Decimal },

    /// Total discount literal is missing: empty or whitespace-only.
    #[error("the total discount literal must not be empty")]
    InvalidDiscount,

    /// Total discount literal does not parse as a decimal number.
    #[error("the total discount literal '{literal}' must be parsable as a decimal number")]
    UnparsableDiscount { literal: String },

    /// Total discount parsed to zero or a negative value.
    #[error("the total discount must be strictly positive, got {value}")]
    NonPositiveDiscount { value: Decimal },

    /// The item list is empty.
    #[error("the item list must contain at least one item")]
    EmptyItemList,

    /// The item list exceeds the allocation bound.
    #[error("the item list must contain at most {max} items, got {count}")]
    TooManyItems { count: usize, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AllocationError.
pub type AllocationResult<T> = Result<T, AllocationError>;

// =============================================================================
// Unit Tests
// =============================================================================
