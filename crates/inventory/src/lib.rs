//! `stockroom-inventory` — the inventory store.
//!
//! Holds the stock mapping (item name → quantity), its mutation and query
//! operations, JSON-file persistence, and report rendering.

pub mod journal;
pub mod report;
pub mod stock;
pub mod store;

pub use journal::Journal;
pub use stock::{DEFAULT_LOW_STOCK_THRESHOLD, RemoveOutcome, Stock};
pub use store::{DEFAULT_STOCK_FILE, StoreError, load, save, try_load, try_save};

#[cfg(test)]
mod integration_tests;
