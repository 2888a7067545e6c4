//! Error taxonomy
//!
//! Every error is returned synchronously on the submit/cancel call that
//! caused it; the event stream never carries errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed decimal, non-positive quantity, missing price for a
    /// priced order type, or an otherwise invalid request
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Cancel target absent or already terminal
    #[error("order not found: {order_id}")]
    NotFound { order_id: String },

    /// Market order against an empty opposite side
    #[error("rejected: {0}")]
    Rejected(String),

    /// Per-symbol resting-order cap reached
    #[error("overloaded: {symbol} at resting-order cap {cap}")]
    Overloaded { symbol: String, cap: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::BadRequest("empty decimal".to_string());
        assert_eq!(err.to_string(), "bad request: empty decimal");

        let err = EngineError::Overloaded {
            symbol: "BTC-USDT".to_string(),
            cap: 100_000,
        };
        assert!(err.to_string().contains("BTC-USDT"));
        assert!(err.to_string().contains("100000"));
    }
}
