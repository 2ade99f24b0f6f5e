//! # prorata-core: Pure Allocation Logic for Prorata
//!
//! This crate is the **heart** of Prorata. It spreads a fixed total discount
//! amount proportionally across a small set of priced items, with an exact
//! aggregate guarantee: the individual discounts always sum to the requested
//! total, with no rounding leakage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Prorata Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host (demo binary, tests, any app)           │   │
//! │  │    builds Items ──► runs Allocator ──► reads discounts          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ prorata-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │ allocator │  │ precision │  │ validation│  │   │
//! │  │   │   Item    │  │ Allocator │  │ round_sig │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The [`Item`] type (immutable price, computed discount)
//! - [`allocator`] - The [`Allocator`] driving the proportional split
//! - [`precision`] - Fixed significant-digit rounding over [`rust_decimal::Decimal`]
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Decimal Money**: All monetary values are `rust_decimal::Decimal`,
//!    never binary floating point
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use prorata_core::{Allocator, Item};
//! use rust_decimal_macros::dec;
//!
//! let mut items = vec![Item::new("200")?, Item::new("600")?];
//!
//! let mut allocator = Allocator::new(&mut items, "200")?;
//! allocator.allocate();
//!
//! // 200 : 600 splits a discount of 200 into 50 : 150
//! assert_eq!(items[0].discount(), Some(dec!(50)));
//! assert_eq!(items[1].discount(), Some(dec!(150)));
//! # Ok::<(), prorata_core::AllocationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocator;
pub mod error;
pub mod item;
pub mod precision;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use prorata_core::Item` instead of
// `use prorata_core::item::Item`

pub use allocator::Allocator;
pub use error::{AllocationError, AllocationResult};
pub use item::Item;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of items a single allocation may cover.
///
/// ## Business Reason
/// Prorata targets small, explicit discount campaigns where every item is
/// picked by hand. The bound keeps the system scoped to that use case; it is
/// not a performance limit.
pub const MAX_ALLOCATION_ITEMS: usize = 5;

/// Working precision for all allocation arithmetic, in significant digits.
///
/// ## Why 7?
/// Matches the standard 32-bit decimal working precision. Parsing, the
/// factor division, and every per-item multiplication all round to this
/// precision, which keeps the rounding behavior reproducible across runs
/// and platforms.
pub const WORKING_PRECISION: u32 = 7;
