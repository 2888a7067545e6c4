//! Crossing detection
//!
//! A taker with no limit price is a market order and crosses any
//! resting price.

use types::numeric::Price;

/// Does a buy taker cross a resting ask at `resting`?
pub fn buy_crosses(taker_limit: Option<Price>, resting: Price) -> bool {
    taker_limit.is_none_or(|limit| limit >= resting)
}

/// Does a sell taker cross a resting bid at `resting`?
pub fn sell_crosses(taker_limit: Option<Price>, resting: Price) -> bool {
    taker_limit.is_none_or(|limit| limit <= resting)
}
