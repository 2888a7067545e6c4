//! Trade records
//!
//! A trade is the atomic exchange between a resting maker and an
//! incoming taker. Trades are immutable once emitted.

use crate::ids::{OrderId, Symbol};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Per-symbol monotonic trade sequence
    pub trade_id: u64,
    pub symbol: Symbol,
    /// Execution price, always the maker's limit price
    pub price: Price,
    pub quantity: Quantity,
    /// Side of the incoming (taker) order
    pub aggressor_side: Side,
    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,
    /// Unix nanoseconds at match time
    pub timestamp: i64,
}

impl Trade {
    /// Notional value (price × quantity), exact
    pub fn notional(&self) -> Decimal {
        self.quantity * self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> Trade {
        Trade {
            trade_id: 7,
            symbol: Symbol::new("BTC-USDT"),
            price: Price::parse("50000").unwrap(),
            quantity: Quantity::parse("0.5").unwrap(),
            aggressor_side: Side::Buy,
            maker_order_id: OrderId::new(),
            taker_order_id: OrderId::new(),
            timestamp: 1_708_123_456_789_000_000,
        }
    }

    #[test]
    fn test_notional() {
        assert_eq!(sample_trade().notional(), Decimal::from(25000));
    }

    #[test]
    fn test_trade_wire_form() {
        let trade = sample_trade();
        let json = serde_json::to_value(&trade).unwrap();

        assert_eq!(json["price"], "50000");
        assert_eq!(json["quantity"], "0.5");
        assert_eq!(json["aggressor_side"], "buy");
        assert_eq!(json["trade_id"], 7);

        let back: Trade = serde_json::from_value(json).unwrap();
        assert_eq!(trade, back);
    }
}
