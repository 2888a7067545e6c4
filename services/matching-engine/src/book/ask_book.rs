//! Ask (sell-side) order book
//!
//! Price levels sorted so the lowest ask is best. Uses BTreeMap for
//! deterministic iteration; best-first traversal is ascending.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};

use super::price_level::{LevelEntry, PriceLevel};
use types::ids::OrderId;

/// Ask (sell) side of the book
#[derive(Debug, Clone)]
pub struct AskBook {
    /// BTreeMap iterates ascending, so the best ask is the first entry
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book
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

    /// Best ask price (lowest)
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Best ask price and its aggregate quantity
    pub fn best(&self) -> Option<(Price, Quantity)> {
        self.levels
            .iter()
            .next()
            .map(|(price, level)| (*price, level.aggregate_quantity()))
    }

    /// Mutable access to the best level
    pub(crate) fn best_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        self.levels
            .iter_mut()
            .next()
            .map(|(price, level)| (*price, level))
    }

    /// Drop the level at `price` if it has emptied
    pub fn erase_if_empty(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(|level| level.is_empty()) {
            self.levels.remove(&price);
        }
    }

    /// Top-N depth, best (lowest) price first
    pub fn depth(&self, n: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .take(n)
            .map(|(price, level)| (*price, level.aggregate_quantity()))
            .collect()
    }

    /// Aggregate resting quantity a buy taker limited at `limit` could
    /// cross, capped at `needed`
    ///
    /// Walks best-first and stops as soon as `needed` is covered, so a
    /// fill-or-kill pre-scan does not traverse the whole side.
    pub fn crossable_quantity(&self, limit: Price, needed: Quantity) -> Quantity {
        let mut total = Quantity::zero();
        for (price, level) in self.levels.iter() {
            if *price > limit || total >= needed {
                break;
            }
            total = total + level.aggregate_quantity();
        }
        total
    }

    /// Check if the ask book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl Default for AskBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    fn qty(s: &str) -> Quantity {
        Quantity::parse(s).unwrap()
    }

    #[test]
    fn test_best_is_lowest_price() {
        let mut book = AskBook::new();
        book.insert_or_append(px("51000"), 1, OrderId::new(), qty("1.0"));
        book.insert_or_append(px("50500"), 2, OrderId::new(), qty("2.0"));
        book.insert_or_append(px("52000"), 3, OrderId::new(), qty("1.5"));

        let (best_price, best_qty) = book.best().unwrap();
        assert_eq!(best_price, px("50500"));
        assert_eq!(best_qty, qty("2.0"));
    }

    #[test]
    fn test_depth_ascends_from_best() {
        let mut book = AskBook::new();
        book.insert_or_append(px("51000"), 1, OrderId::new(), qty("0.3"));
        book.insert_or_append(px("51100"), 2, OrderId::new(), qty("0.4"));
        book.insert_or_append(px("51200"), 3, OrderId::new(), qty("0.5"));

        let depth = book.depth(2);
        assert_eq!(depth.len(), 2);
        assert_eq!(depth[0].0, px("51000"));
        assert_eq!(depth[1].0, px("51100"));
    }

    #[test]
    fn test_remove_collapses_empty_level() {
        let mut book = AskBook::new();
        book.insert_or_append(px("51000"), 1, OrderId::new(), qty("1.0"));
        book.insert_or_append(px("51000"), 2, OrderId::new(), qty("2.0"));

        book.remove(px("51000"), 1).unwrap();
        assert_eq!(book.level_count(), 1);

        book.remove(px("51000"), 2).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_crossable_quantity_respects_limit() {
        let mut book = AskBook::new();
        book.insert_or_append(px("51000"), 1, OrderId::new(), qty("0.3"));
        book.insert_or_append(px("51100"), 2, OrderId::new(), qty("0.4"));
        book.insert_or_append(px("51200"), 3, OrderId::new(), qty("0.5"));

        // A buy limited at 51100 crosses the first two levels only.
        assert_eq!(
            book.crossable_quantity(px("51100"), qty("100")),
            qty("0.7")
        );
    }
}
