//! # Money Module
//!
//! Provides the `Money` type for handling prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total is Σ price × quantity over every line. Summing floats    │
//! │  drifts; summing integer paise never does.                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    ₹25,000.00 is stored as 2_500_000                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aurum_core::money::Money;
//!
//! let ring = Money::from_major(25_000);     // ₹25,000
//! let line = ring.multiply_quantity(2);     // ₹50,000
//! assert_eq!(line.format_inr(), "₹50,000");
//!
//! let total: Money = [line, Money::from_minor(50)].into_iter().sum();
//! assert_eq!(total.format_inr(), "₹50,000.50");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: the reducer accepts negative quantities, so line
///   totals and cart totals can go negative
/// - **Saturating arithmetic**: totals clamp at `i64::MIN`/`i64::MAX`
///   instead of overflowing, so no payload can panic a reducer
/// - **Rupees on the wire**: JSON carries a plain number of rupees
///   (`25000`, `1499.5`), the same `price` the front-end renders.
///   SQLite stores the paise integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole currency units (rupees).
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(150).minor(), 15_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major.saturating_mul(100))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(100);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 300);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats with Indian digit grouping and the given currency symbol.
    ///
    /// The last three digits form one group, every group before that has
    /// two digits. A zero paise part is omitted, like the storefront's
    /// `toLocaleString("en-IN")` output.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(125_000).format_grouped("Rs "), "Rs 1,25,000");
    /// ```
    pub fn format_grouped(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let major = group_indian((self.0 / 100).unsigned_abs());
        let minor = (self.0 % 100).unsigned_abs();

        if minor == 0 {
            format!("{sign}{symbol}{major}")
        } else {
            format!("{sign}{symbol}{major}.{minor:02}")
        }
    }

    /// Formats as rupees: `₹85,000`, `₹1,25,000.50`.
    pub fn format_inr(&self) -> String {
        self.format_grouped("₹")
    }
}

/// Groups digits as 12,34,56,789.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses rupee formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_inr())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a line quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Serde (rupees on the wire)
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}

struct RupeeVisitor;

impl<'de> Visitor<'de> for RupeeVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a price in rupees")
    }

    fn visit_i64<E: de::Error>(self, rupees: i64) -> Result<Money, E> {
        Ok(Money::from_major(rupees))
    }

    fn visit_u64<E: de::Error>(self, rupees: u64) -> Result<Money, E> {
        Ok(Money::from_major(i64::try_from(rupees).unwrap_or(i64::MAX)))
    }

    fn visit_f64<E: de::Error>(self, rupees: f64) -> Result<Money, E> {
        if !rupees.is_finite() {
            return Err(E::custom("price must be a finite number"));
        }
        // `as` saturates out-of-range floats
        Ok(Money::from_minor((rupees * 100.0).round() as i64))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RupeeVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor_and_major() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);

        assert_eq!(Money::from_major(25_000).minor(), 2_500_000);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((a * 3).minor(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_minor(100);
        assert_eq!(c.minor(), 1400);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_minor(100), Money::from_minor(250), Money::from_minor(-50)];
        let by_ref: Money = prices.iter().sum();
        let by_value: Money = prices.into_iter().sum();
        assert_eq!(by_ref.minor(), 300);
        assert_eq!(by_value, by_ref);
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(Money::from_major(0).format_inr(), "₹0");
        assert_eq!(Money::from_major(999).format_inr(), "₹999");
        assert_eq!(Money::from_major(15_000).format_inr(), "₹15,000");
        assert_eq!(Money::from_major(85_000).format_inr(), "₹85,000");
        assert_eq!(Money::from_major(125_000).format_inr(), "₹1,25,000");
        assert_eq!(Money::from_major(12_345_678).format_inr(), "₹1,23,45,678");
    }

    #[test]
    fn test_format_inr_with_paise_and_sign() {
        assert_eq!(Money::from_minor(12_500_050).format_inr(), "₹1,25,000.50");
        assert_eq!(Money::from_minor(5).format_inr(), "₹0.05");
        assert_eq!(Money::from_minor(-550).format_inr(), "-₹5.50");
        assert_eq!(format!("{}", Money::from_major(25_000)), "₹25,000");
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::default().is_zero());
        assert!(Money::from_minor(-1).is_negative());
        assert!(!Money::from_minor(1).is_negative());
    }

    #[test]
    fn test_json_carries_rupees() {
        assert_eq!(serde_json::to_string(&Money::from_major(25_000)).unwrap(), "25000");
        assert_eq!(serde_json::to_string(&Money::from_minor(149_950)).unwrap(), "1499.5");

        let ring: Money = serde_json::from_str("25000").unwrap();
        assert_eq!(ring, Money::from_major(25_000));
        assert_eq!(ring.format_inr(), "₹25,000");

        let charm: Money = serde_json::from_str("1499.5").unwrap();
        assert_eq!(charm.minor(), 149_950);

        let refund: Money = serde_json::from_str("-12").unwrap();
        assert_eq!(refund.minor(), -1200);

        assert!(serde_json::from_str::<Money>("\"25000\"").is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max + Money::from_minor(1), max);
        assert_eq!(max.multiply_quantity(2), max);
        assert_eq!(Money::from_minor(i64::MIN) - Money::from_minor(1), Money::from_minor(i64::MIN));
        assert_eq!(Money::from_major(i64::MAX), max);

        let total: Money = [max, max].into_iter().sum();
        assert_eq!(total, max);
    }
}
