//! Trade formation
//!
//! Stamps each match with the symbol's monotonic trade id. Trades
//! always print at the maker's resting price.

use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::Trade;

/// Per-symbol trade builder holding the trade id sequence
#[derive(Debug, Clone)]
pub struct MatchExecutor {
    next_trade_id: u64,
}

impl MatchExecutor {
    /// Create a new executor; trade ids start at 1
    pub fn new() -> Self {
        Self { next_trade_id: 1 }
    }

    /// Form a trade between a resting maker and an incoming taker
    ///
    /// `price` is the maker's limit price.
    #[allow(clippy::too_many_arguments)]
    pub fn execute(
        &mut self,
        symbol: Symbol,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        aggressor_side: Side,
        price: Price,
        quantity: Quantity,
        timestamp: i64,
    ) -> Trade {
        let trade_id = self.next_trade_id;
        self.next_trade_id += 1;

        Trade {
            trade_id,
            symbol,
            price,
            quantity,
            aggressor_side,
            maker_order_id,
            taker_order_id,
            timestamp,
        }
    }
}

impl Default for MatchExecutor {
    fn default() -> Self {
        Self::new()
    }
}
