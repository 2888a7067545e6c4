//! Bid (buy-side) order book
//!
//! Price levels sorted so the highest bid is best. Uses BTreeMap for
//! deterministic iteration; best-first traversal is descending.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};

use super::price_level::{LevelEntry, PriceLevel};
use types::ids::OrderId;

/// Bid (buy) side of the book
#[derive(Debug, Clone)]
pub struct BidBook {
    /// BTreeMap iterates ascending, so the best bid is the last entry
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Find or create the level at `price` and append the order
    pub fn insert_or_append(
        &mut self,
        price: Price,
        sequence: u64,
        order_id: OrderId,
        remaining: Quantity,
    ) {
        self.levels
            .entry(price)
            .or_default()
            .push_back(sequence, order_id, remaining);
    }

    /// Remove an order by level price and acceptance sequence
    ///
    /// Collapses the level if it empties.
    pub fn remove(&mut self, price: Price, sequence: u64) -> Option<LevelEntry> {
        let level = self.levels.get_mut(&price)?;
        let entry = level.remove(sequence)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(entry)
    }

    /// Best bid price (highest)
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Best bid price and its aggregate quantity
    pub fn best(&self) -> Option<(Price, Quantity)> {
        self.levels
            .iter()
            .next_back()
            .map(|(price, level)| (*price, level.aggregate_quantity()))
    }

    /// Mutable access to the best level
    pub(crate) fn best_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        self.levels
            .iter_mut()
            .next_back()
            .map(|(price, level)| (*price, level))
    }

    /// Drop the level at `price` if it has emptied
    pub fn erase_if_empty(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(|level| level.is_empty()) {
            self.levels.remove(&price);
        }
    }

    /// Top-N depth, best (highest) price first
    pub fn depth(&self, n: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .rev()
            .take(n)
            .map(|(price, level)| (*price, level.aggregate_quantity()))
            .collect()
    }

    /// Aggregate resting quantity a sell taker limited at `limit` could
    /// cross, capped at `needed`
    ///
    /// Walks best-first and stops as soon as `needed` is covered, so a
    /// fill-or-kill pre-scan does not traverse the whole side.
    pub fn crossable_quantity(&self, limit: Price, needed: Quantity) -> Quantity {
        let mut total = Quantity::zero();
        for (price, level) in self.levels.iter().rev() {
            if *price < limit || total >= needed {
                break;
            }
            total = total + level.aggregate_quantity();
        }
        total
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl Default for BidBook {
    fn default() -> Self {
        Self::new()
    }
}
