use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Monetary amount stored as whole cents.
///
/// `times` is exact, so revenue equals units times price to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Scale by `factor` and round half away from zero to the nearest cent.
    pub fn scale(self, factor: f64) -> Self {
        let scaled = (self.0 as f64 * factor).round();
        if scaled.is_finite() && scaled > 0.0 {
            Self(scaled as u64)
        } else {
            Self::ZERO
        }
    }

    pub fn times(self, units: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(units)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let invalid = || Error::InvalidMoney(raw.to_string());

        let (whole, fraction) = match raw.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (raw, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .map(Money)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Money {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|money| money.0).fold(0, u64::saturating_add))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_fraction_digits() {
        assert_eq!(Money::from_cents(7999).to_string(), "79.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn parses_decimal_literals() {
        assert_eq!("79.99".parse::<Money>().ok(), Some(Money::from_cents(7999)));
        assert_eq!("5".parse::<Money>().ok(), Some(Money::from_cents(500)));
        assert_eq!("5.5".parse::<Money>().ok(), Some(Money::from_cents(550)));
        assert!("5.555".parse::<Money>().is_err());
        assert!("-1.00".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn scale_rounds_to_nearest_cent() {
        // 79.99 * 0.85 = 67.9915
        assert_eq!(Money::from_cents(7999).scale(0.85), Money::from_cents(6799));
        // 24.99 * 0.9 = 22.491
        assert_eq!(Money::from_cents(2499).scale(0.9), Money::from_cents(2249));
    }

    #[test]
    fn times_is_exact() {
        assert_eq!(Money::from_cents(1999).times(37).to_string(), "739.63");
    }
}
