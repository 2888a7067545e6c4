//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for exact arithmetic (no floating-point errors).
//! Values carry at most [`SCALE`] fractional digits; anything finer is
//! rejected at the parse boundary. Wire form is a canonical string:
//! no trailing zeros beyond scale, no leading plus, no scientific
//! notation.

use crate::errors::EngineError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Maximum fractional digits carried by a price or quantity.
pub const SCALE: u32 = 8;

/// Parse a user-supplied decimal string, enforcing the scale limit.
fn parse_decimal(input: &str) -> Result<Decimal, EngineError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EngineError::BadRequest("empty decimal".to_string()));
    }

    // rust_decimal rejects scientific notation and junk outright.
    let value = Decimal::from_str(trimmed)
        .map_err(|_| EngineError::BadRequest(format!("malformed decimal: {:?}", input)))?;

    if value.normalize().scale() > SCALE {
        return Err(EngineError::BadRequest(format!(
            "more than {} fractional digits: {:?}",
            SCALE, input
        )));
    }

    Ok(value)
}

/// Price with fixed-point decimal representation
///
/// Always strictly positive. Serialized as a canonical string to prevent
/// JSON number precision loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a new Price from a Decimal
    ///
    /// # Panics
    /// Panics if the price is not strictly positive
    pub fn new(value: Decimal) -> Self {
        assert!(value > Decimal::ZERO, "Price must be positive");
        Self(value)
    }

    /// Try to create a Price, returning None if not strictly positive
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse a user-supplied price string
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let value = parse_decimal(input)?;
        Self::try_new(value)
            .ok_or_else(|| EngineError::BadRequest(format!("price must be positive: {:?}", input)))
    }

    /// Create from integer (for testing/convenience)
    pub fn from_u64(value: u64) -> Self {
        Self::new(Decimal::from(value))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let value = Decimal::from_str(&s).map_err(serde::de::Error::custom)?;
        Self::try_new(value).ok_or_else(|| serde::de::Error::custom("price must be positive"))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Canonical wire form: trailing zeros stripped.
        write!(f, "{}", self.0.normalize())
    }
}

/// Quantity with fixed-point decimal representation
///
/// Never negative; zero only as the result of fills. Serialized as a
/// canonical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a new Quantity from a Decimal
    ///
    /// # Panics
    /// Panics if the quantity is not strictly positive
    pub fn new(value: Decimal) -> Self {
        assert!(value > Decimal::ZERO, "Quantity must be positive");
        Self(value)
    }

    /// Try to create a Quantity, returning None if not strictly positive
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse a user-supplied quantity string (must be strictly positive)
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let value = parse_decimal(input)?;
        Self::try_new(value).ok_or_else(|| {
            EngineError::BadRequest(format!("quantity must be positive: {:?}", input))
        })
    }

    /// Zero quantity (fully filled remainders)
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create from integer (for testing/convenience)
    pub fn from_u64(value: u64) -> Self {
        Self::new(Decimal::from(value))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check if quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.0 >= rhs.0, "Quantity subtraction would go negative");
        Self(self.0 - rhs.0)
    }
}

// Notional value of a fill. rust_decimal keeps 28 significant digits, so
// a scale-8 price times a scale-8 quantity stays exact.
impl Mul<Price> for Quantity {
    type Output = Decimal;

    fn mul(self, rhs: Price) -> Self::Output {
        self.0 * rhs.as_decimal()
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let value = Decimal::from_str(&s).map_err(serde::de::Error::custom)?;
        // Zero is legal on the wire (remaining of a filled order).
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(serde::de::Error::custom("quantity cannot be negative"))
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_parse() {
        let price = Price::parse("50000.0").unwrap();
        assert_eq!(price.as_decimal(), Decimal::from(50000));
    }

    #[test]
    fn test_price_parse_rejects_empty() {
        assert!(matches!(Price::parse(""), Err(EngineError::BadRequest(_))));
        assert!(matches!(Price::parse("  "), Err(EngineError::BadRequest(_))));
    }

    #[test]
    fn test_price_parse_rejects_garbage() {
        assert!(Price::parse("abc").is_err());
        assert!(Price::parse("1.2.3").is_err());
        assert!(Price::parse("1e5").is_err());
    }

    #[test]
    fn test_price_parse_rejects_non_positive() {
        assert!(Price::parse("0").is_err());
        assert!(Price::parse("-50000").is_err());
    }

    #[test]
    fn test_price_parse_rejects_excess_scale() {
        assert!(Price::parse("1.123456789").is_err());
        assert!(Price::parse("1.12345678").is_ok());
        // Trailing zeros beyond scale carry no precision.
        assert!(Price::parse("1.1234567800").is_ok());
    }

    #[test]
    fn test_price_ordering() {
        assert!(Price::parse("50000").unwrap() < Price::parse("51000").unwrap());
        assert_eq!(Price::parse("1.50").unwrap(), Price::parse("1.5").unwrap());
    }

    #[test]
    fn test_canonical_wire_form() {
        assert_eq!(Price::parse("50000.0").unwrap().to_string(), "50000");
        assert_eq!(Price::parse("0.50000000").unwrap().to_string(), "0.5");
        assert_eq!(Quantity::parse("1.10").unwrap().to_string(), "1.1");
    }

    #[test]
    fn test_price_serialization() {
        let price = Price::parse("50000.25").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"50000.25\"");

        let deserialized: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, deserialized);
    }

    #[test]
    fn test_quantity_parse_rejects_non_positive() {
        assert!(Quantity::parse("0").is_err());
        assert!(Quantity::parse("0.0").is_err());
        assert!(Quantity::parse("-1").is_err());
    }

    #[test]
    fn test_quantity_arithmetic() {
        let q1 = Quantity::parse("2.5").unwrap();
        let q2 = Quantity::parse("1.5").unwrap();

        assert_eq!(q1 + q2, Quantity::from_u64(4));
        assert_eq!(q1 - q2, Quantity::from_u64(1));
    }

    #[test]
    #[should_panic(expected = "Quantity subtraction would go negative")]
    fn test_quantity_underflow_panics() {
        let _ = Quantity::from_u64(1) - Quantity::from_u64(2);
    }

    #[test]
    fn test_quantity_zero_roundtrip() {
        let json = serde_json::to_string(&Quantity::zero()).unwrap();
        assert_eq!(json, "\"0\"");
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert!(back.is_zero());
    }

    #[test]
    fn test_notional_is_exact() {
        let qty = Quantity::parse("0.12345678").unwrap();
        let price = Price::parse("50000.87654321").unwrap();

        let notional = qty * price;
        assert_eq!(notional, Decimal::from_str("6172.9472152022374638").unwrap());

        // Same inputs always produce the same output.
        let again =
            Quantity::parse("0.12345678").unwrap() * Price::parse("50000.87654321").unwrap();
        assert_eq!(notional, again);
    }
}
