//! # Expense Records
//!
//! The data model shared by the ledger, the storage backends and the TUI.
//!
//! ```text
//! ExpenseRecord
//! ├── id: ExpenseId      // unique, strictly increasing
//! ├── title: String      // non-empty, stored as typed
//! └── amount: Amount     // integer hundredths
//! ```
//!
//! Amounts are held as integer minor units so that totals never drift.
//! The floating representation only exists at the edges: parsing what the
//! user typed, and the JSON number written to disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// Minor units per major unit (hundredths).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Largest magnitude (in minor units) that survives an f64 round trip exactly (2^53).
const MAX_EXACT_MINOR: f64 = 9_007_199_254_740_992.0;

/// A monetary amount in hundredths of the (single, unnamed) currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub fn minor(self) -> i64 {
        self.0
    }

    /// Convert a major-unit float, rounding to the nearest hundredth.
    /// Returns `None` for NaN, infinities and values too large to hold exactly.
    pub fn from_major(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let minor = (value * MINOR_PER_MAJOR as f64).round();
        if minor.abs() > MAX_EXACT_MINOR {
            return None;
        }
        Some(Self(minor as i64))
    }

    /// Parse user text such as `"12"`, `" 3.50 "`, `"-4"` or `"1e3"`.
    ///
    /// Anything that is empty after trimming or not a finite number is rejected.
    /// Trailing garbage (`"12abc"`) is rejected too.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().and_then(Self::from_major)
    }

    pub fn to_major(self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Amount) -> Amount {
        Amount(self.0.saturating_sub(other.0))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> f64 {
        amount.to_major()
    }
}

impl TryFrom<f64> for Amount {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::from_major(value).ok_or_else(|| format!("amount out of range: {value}"))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Amount::saturating_add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Shortest decimal form: `12`, `3.5`, `0.25`, `-4`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / MINOR_PER_MAJOR as u64;
        let frac = abs % MINOR_PER_MAJOR as u64;
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else if frac % 10 == 0 {
            write!(f, "{sign}{whole}.{}", frac / 10)
        } else {
            write!(f, "{sign}{whole}.{frac:02}")
        }
    }
}

/// Unique identifier of an expense record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single ledger entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub title: String,
    pub amount: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_numbers() {
        assert_eq!(Amount::parse("12"), Some(Amount::from_minor(1200)));
        assert_eq!(Amount::parse("3.50"), Some(Amount::from_minor(350)));
        assert_eq!(Amount::parse(" 0.25 "), Some(Amount::from_minor(25)));
        assert_eq!(Amount::parse("-4"), Some(Amount::from_minor(-400)));
        assert_eq!(Amount::parse(".5"), Some(Amount::from_minor(50)));
        assert_eq!(Amount::parse("1e3"), Some(Amount::from_minor(100_000)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Amount::parse(""), None);
        assert_eq!(Amount::parse("   "), None);
        assert_eq!(Amount::parse("12abc"), None);
        assert_eq!(Amount::parse("1.2.3"), None);
        assert_eq!(Amount::parse("-"), None);
        assert_eq!(Amount::parse("inf"), None);
        assert_eq!(Amount::parse("NaN"), None);
        assert_eq!(Amount::parse("1e300"), None);
    }

    #[test]
    fn test_parse_rounds_to_hundredths() {
        assert_eq!(Amount::parse("0.126"), Some(Amount::from_minor(13)));
        assert_eq!(Amount::parse("0.124"), Some(Amount::from_minor(12)));
    }

    #[test]
    fn test_display_uses_shortest_form() {
        assert_eq!(Amount::from_minor(1200).to_string(), "12");
        assert_eq!(Amount::from_minor(350).to_string(), "3.5");
        assert_eq!(Amount::from_minor(25).to_string(), "0.25");
        assert_eq!(Amount::from_minor(-400).to_string(), "-4");
        assert_eq!(Amount::from_minor(-5).to_string(), "-0.05");
        assert_eq!(Amount::ZERO.to_string(), "0");
    }

    #[test]
    fn test_sum_is_exact() {
        // 0.1 + 0.2 drifts in f64; hundredths do not
        let total: Amount = [Amount::parse("0.1"), Amount::parse("0.2")]
            .into_iter()
            .flatten()
            .sum();
        assert_eq!(total, Amount::from_minor(30));
        assert_eq!(total.to_string(), "0.3");
    }

    #[test]
    fn test_sum_saturates() {
        let total: Amount = [Amount::from_minor(i64::MAX), Amount::from_minor(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Amount::from_minor(i64::MAX));
    }

    #[test]
    fn test_record_json_shape() {
        let record = ExpenseRecord {
            id: ExpenseId(1_700_000_000_000),
            title: "Coffee".to_string(),
            amount: Amount::from_minor(350),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":1700000000000,"title":"Coffee","amount":3.5}"#);

        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_accepts_integer_amounts() {
        let record: ExpenseRecord =
            serde_json::from_str(r#"{"id":7,"title":"Book","amount":12}"#).unwrap();
        assert_eq!(record.amount, Amount::from_minor(1200));
    }
}
