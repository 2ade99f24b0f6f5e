//! # Prorata Demo
//!
//! Thin demo entry point for the allocation core.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Demo Flow                                      │
//! │                                                                         │
//! │  build Items (500, 600, 1000) ───► Allocator(items, "100")             │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                     allocate()                          │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                      log each item's price and discount                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use prorata_core::{Allocator, Item};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .init();

    let total_discount = "100";
    let mut items = demo_items()?;
    info!(
        total_discount,
        item_count = items.len(),
        "starting the demo allocation"
    );

    let mut allocator = Allocator::new(&mut items, total_discount)?;
    allocator.allocate();

    for item in &items {
        info!(
            price = %item.price(),
            discount = %item.discount().unwrap_or_default(),
            "allocated a discount share"
        );
    }

    Ok(())
}

/// The demo data set: three items and a round total discount.
fn demo_items() -> Result<Vec<Item>, prorata_core::AllocationError> {
    Ok(vec![
        Item::new("500")?,
        Item::new("600")?,
        Item::new("1000")?,
    ])
}
