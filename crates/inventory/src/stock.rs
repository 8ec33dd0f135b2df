use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::journal::Journal;

/// Default threshold below which an item counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Current stock on hand: item name → quantity.
///
/// Iteration order is insertion order; reporting and the low-stock filter
/// rely on it. Every stored quantity is strictly positive: an item reduced
/// to zero (or below) is removed entirely rather than kept at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stock {
    items: IndexMap<String, u64>,
}

/// Outcome of a [`Stock::remove`] call.
///
/// Removal never fails; invalid input and missing items are recovered
/// conditions reported through this outcome (and the log stream), not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Quantity decremented; the item stays in stock.
    Decremented { remaining: u64 },
    /// Requested quantity met or exceeded the stock; the entry was deleted.
    RemovedAll,
    /// The item was not in stock; nothing changed.
    NotInStock,
    /// Negative quantity requested; nothing changed.
    InvalidQuantity,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Add `qty` of `item` to the stock.
    ///
    /// Fails with a validation error on an empty item name or a negative
    /// quantity; the stock is untouched on failure. On success the mutation
    /// is logged and, when a journal is supplied, recorded there too.
    pub fn add(&mut self, item: &str, qty: i64, journal: Option<&mut Journal>) -> DomainResult<()> {
        if item.is_empty() {
            return Err(DomainError::validation("item name must be a non-empty string"));
        }
        if qty < 0 {
            return Err(DomainError::validation("quantity cannot be negative when adding stock"));
        }

        let qty = qty as u64;
        *self.items.entry(item.to_string()).or_insert(0) += qty;

        let message = format!("Added {qty} of {item}");
        if let Some(journal) = journal {
            journal.record(&message);
        }
        tracing::info!("{message}");

        Ok(())
    }

    /// Remove `qty` of `item` from the stock.
    ///
    /// Total: every input maps to a [`RemoveOutcome`]. Removing at least the
    /// current quantity deletes the entry entirely; over-removal clamps
    /// silently rather than erroring. Remaining entries keep their insertion
    /// order.
    pub fn remove(&mut self, item: &str, qty: i64) -> RemoveOutcome {
        if qty < 0 {
            tracing::warn!("Quantity to remove must be non-negative, got {qty}.");
            return RemoveOutcome::InvalidQuantity;
        }
        let qty = qty as u64;

        match self.items.get(item).copied() {
            None => {
                tracing::warn!("Attempted to remove '{item}', but it is not in stock.");
                RemoveOutcome::NotInStock
            }
            Some(current) if current <= qty => {
                self.items.shift_remove(item);
                tracing::info!("Removed all stock for '{item}'.");
                RemoveOutcome::RemovedAll
            }
            Some(current) => {
                let remaining = current - qty;
                self.items.insert(item.to_string(), remaining);
                tracing::info!("Removed {qty} of '{item}'.");
                RemoveOutcome::Decremented { remaining }
            }
        }
    }

    /// Current quantity of `item`, or 0 when absent. Never fails.
    pub fn quantity(&self, item: &str) -> u64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Names of items with quantity strictly below `threshold`, in insertion
    /// order.
    pub fn low_items(&self, threshold: u64) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
