//! Order records and lifecycle enums

use crate::ids::{OrderId, Symbol};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (bid or ask)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        })
    }
}

/// Execution policy of an order
///
/// Market orders carry no price; the other three carry a limit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Match what crosses, rest the remainder at the limit price
    Limit,
    /// Match greedily at any price, never rest
    Market,
    /// Immediate-or-cancel: match at-or-better, cancel the remainder
    Ioc,
    /// Fill-or-kill: fill entirely or reject with zero side effects
    Fok,
}

impl OrderType {
    /// Whether submissions of this type must carry a limit price
    pub fn requires_price(&self) -> bool {
        !matches!(self, OrderType::Market)
    }

    /// Whether an unfilled remainder rests in the book
    pub fn rests(&self) -> bool {
        matches!(self, OrderType::Limit)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
            OrderType::Ioc => "ioc",
            OrderType::Fok => "fok",
        })
    }
}

/// Outcome of a submission, reported synchronously to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Rested without matching
    Accepted,
    /// Matched in part; remainder rested (limit) or cancelled (market/IOC)
    PartiallyFilled,
    /// Matched in full
    Filled,
    /// Nothing matched and nothing rested
    Cancelled,
    /// Fill-or-kill with insufficient crossing liquidity
    Rejected,
}

/// An order as the engine tracks it
///
/// Identity fields never change after acceptance; only
/// `remaining_quantity` mutates, and only under the symbol's mutation
/// right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub order_type: OrderType,
    /// Absent for market orders
    pub limit_price: Option<Price>,
    pub original_quantity: Quantity,
    pub remaining_quantity: Quantity,
    /// Per-symbol monotonic counter assigned at acceptance; FIFO tie-break
    pub sequence: u64,
    /// Acceptance wall time in Unix nanoseconds, informational only
    pub timestamp: i64,
}

impl Order {
    /// Create a new order at acceptance time
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_id: OrderId,
        symbol: Symbol,
        side: Side,
        order_type: OrderType,
        limit_price: Option<Price>,
        quantity: Quantity,
        sequence: u64,
        timestamp: i64,
    ) -> Self {
        Self {
            order_id,
            symbol,
            side,
            order_type,
            limit_price,
            original_quantity: quantity,
            remaining_quantity: quantity,
            sequence,
            timestamp,
        }
    }

    /// Decrement the remaining quantity by a fill
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity
    pub fn fill(&mut self, quantity: Quantity) {
        self.remaining_quantity = self.remaining_quantity - quantity;
    }

    /// Quantity matched so far
    pub fn filled_quantity(&self) -> Quantity {
        self.original_quantity - self.remaining_quantity
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity.is_zero()
    }

    /// Check if the order has any fills
    pub fn has_fills(&self) -> bool {
        self.remaining_quantity < self.original_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit_buy(qty: &str, price: &str) -> Order {
        Order::new(
            OrderId::new(),
            Symbol::new("BTC-USDT"),
            Side::Buy,
            OrderType::Limit,
            Some(Price::parse(price).unwrap()),
            Quantity::parse(qty).unwrap(),
            1,
            1_708_123_456_789_000_000,
        )
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_side_wire_form() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        let side: Side = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(side, Side::Sell);
    }

    #[test]
    fn test_order_type_wire_form() {
        assert_eq!(serde_json::to_string(&OrderType::Ioc).unwrap(), "\"ioc\"");
        let t: OrderType = serde_json::from_str("\"fok\"").unwrap();
        assert_eq!(t, OrderType::Fok);
        assert!(serde_json::from_str::<OrderType>("\"stop\"").is_err());
    }

    #[test]
    fn test_order_type_price_requirement() {
        assert!(OrderType::Limit.requires_price());
        assert!(OrderType::Ioc.requires_price());
        assert!(OrderType::Fok.requires_price());
        assert!(!OrderType::Market.requires_price());
    }

    #[test]
    fn test_only_limit_rests() {
        assert!(OrderType::Limit.rests());
        assert!(!OrderType::Market.rests());
        assert!(!OrderType::Ioc.rests());
        assert!(!OrderType::Fok.rests());
    }

    #[test]
    fn test_order_fill() {
        let mut order = limit_buy("1.0", "50000");

        order.fill(Quantity::parse("0.3").unwrap());
        assert!(order.has_fills());
        assert!(!order.is_filled());
        assert_eq!(order.remaining_quantity, Quantity::parse("0.7").unwrap());
        assert_eq!(order.filled_quantity(), Quantity::parse("0.3").unwrap());

        order.fill(Quantity::parse("0.7").unwrap());
        assert!(order.is_filled());
        assert_eq!(order.filled_quantity(), order.original_quantity);
    }

    #[test]
    #[should_panic(expected = "Quantity subtraction would go negative")]
    fn test_order_overfill_panics() {
        let mut order = limit_buy("1.0", "50000");
        order.fill(Quantity::parse("1.5").unwrap());
    }

    #[test]
    fn test_order_status_wire_form() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::PartiallyFilled).unwrap(),
            "\"partially_filled\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Accepted).unwrap(),
            "\"accepted\""
        );
    }
}
