//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The store keeps prices in REAL columns:                                │
//! │    19.99 * 3 = 59.970000000000006  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents in Rust                                    │
//! │    1999 cents * 3 = 5997 cents = $59.97                                 │
//! │    Floats only exist at the SQL boundary, rounded to the cent          │
//! │                                                                         │
//! │  Quantities are unbounded, so arithmetic is checked: an amount that    │
//! │  does not fit in i64 cents is None, never a wrapped total.             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nutrifit_core::money::Money;
//!
//! let price = Money::from_cents(1999);          // $19.99
//! let line = price.checked_mul(2).unwrap();      // $39.98
//! assert_eq!(line.to_string(), "$39.98");
//!
//! let typed = Money::from_decimal_str("19.99").unwrap();
//! assert_eq!(typed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// Supplement.price_cents ──► CartEntry.supplement_price_cents (snapshot)
///                                   │
///                                   ▼
///                    line total = snapshot × quantity
///                                   │
///                                   ▼
///                       CartSummary.total per user
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount such as `19.99`, `20` or `.5`.
    ///
    /// ## Rules
    /// - Optional leading `-`
    /// - Digits with at most one `.`
    /// - More than two fractional digits are rounded half-up to the cent
    ///
    /// Returns `None` for anything that is not a plain decimal number.
    ///
    /// ## Example
    /// ```rust
    /// use nutrifit_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_str("19.99"), Some(Money::from_cents(1999)));
    /// assert_eq!(Money::from_decimal_str("0.125"), Some(Money::from_cents(13)));
    /// assert_eq!(Money::from_decimal_str("abc"), None);
    /// ```
    pub fn from_decimal_str(input: &str) -> Option<Self> {
        let raw = input.trim();
        let (negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = i64::from(digits.next().is_some_and(|d| d >= 5));

        let cents = whole
            .checked_mul(100)?
            .checked_add(tenths * 10 + hundredths + round_up)?;

        Some(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as floating point dollars.
    ///
    /// ## Note
    /// Only for binding into the REAL price columns. Never do arithmetic
    /// on the result.
    #[inline]
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero money.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies by a quantity, or `None` if the result does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use nutrifit_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1999);
    /// assert_eq!(unit_price.checked_mul(2), Some(Money::from_cents(3998)));
    /// assert_eq!(unit_price.checked_mul(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_mul(self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` if the result does not fit.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$19.99` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1999);
        assert_eq!(money.cents(), 1999);
        assert_eq!(money.dollars(), 19);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1999)), "$19.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(a.checked_mul(3), Some(Money::from_cents(3000)));
        assert_eq!(b.checked_mul(-2), Some(Money::from_cents(-1000)));
    }

    #[test]
    fn test_arithmetic_overflow_is_none() {
        let price = Money::from_cents(1999);
        assert_eq!(price.checked_mul(i64::MAX), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_add(Money::from_cents(-1)), None);
    }

    #[test]
    fn test_from_decimal_str_accepts_plain_decimals() {
        assert_eq!(Money::from_decimal_str("19.99"), Some(Money::from_cents(1999)));
        assert_eq!(Money::from_decimal_str("20"), Some(Money::from_cents(2000)));
        assert_eq!(Money::from_decimal_str("  7.5 "), Some(Money::from_cents(750)));
        assert_eq!(Money::from_decimal_str(".5"), Some(Money::from_cents(50)));
        assert_eq!(Money::from_decimal_str("3."), Some(Money::from_cents(300)));
        assert_eq!(Money::from_decimal_str("-2.25"), Some(Money::from_cents(-225)));
    }

    #[test]
    fn test_from_decimal_str_rounds_to_cent() {
        assert_eq!(Money::from_decimal_str("0.125"), Some(Money::from_cents(13)));
        assert_eq!(Money::from_decimal_str("0.124"), Some(Money::from_cents(12)));
        assert_eq!(Money::from_decimal_str("9.999"), Some(Money::from_cents(1000)));
    }

    #[test]
    fn test_from_decimal_str_rejects_garbage() {
        assert_eq!(Money::from_decimal_str(""), None);
        assert_eq!(Money::from_decimal_str("."), None);
        assert_eq!(Money::from_decimal_str("abc"), None);
        assert_eq!(Money::from_decimal_str("1.2.3"), None);
        assert_eq!(Money::from_decimal_str("1e3"), None);
        assert_eq!(Money::from_decimal_str("$5"), None);
        assert_eq!(Money::from_decimal_str("99999999999999999999"), None);
    }

    #[test]
    fn test_as_dollars_round_trips_through_cents() {
        let price = Money::from_cents(1999);
        assert!((price.as_dollars() - 19.99).abs() < 1e-9);
        assert_eq!((price.as_dollars() * 100.0).round() as i64, 1999);
    }
}
