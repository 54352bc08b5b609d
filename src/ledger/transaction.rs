use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// A single monetary movement in its own currency, convertible to USD at a
/// fixed, caller-supplied rate.
///
/// The record is immutable: every field is set at construction and read-only
/// afterwards. No field is validated — negative amounts, non-positive
/// conversion rates, and unknown currency codes are all accepted silently.
///
/// ```
/// use account_core::ledger::Transaction;
/// use chrono::NaiveDate;
///
/// let t = Transaction::new(100.0, NaiveDate::from_ymd_opt(2008, 12, 9).unwrap());
/// assert_eq!((t.amount, t.currency.as_str(), t.usd_conversion_rate), (100.0, "USD", 1.0));
/// assert_eq!(t.usd(), 100.0);
///
/// let t = Transaction::new(250.0, NaiveDate::from_ymd_opt(2009, 3, 12).unwrap())
///     .with_currency("EUR", 1.53);
/// assert_eq!(t.usd(), 382.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Signed amount in the transaction's own currency (positive = credit,
    /// negative = debit).
    pub amount: f64,
    /// Calendar date of the movement; no time-of-day semantics.
    pub date: NaiveDate,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default = "Transaction::default_conversion_rate")]
    pub usd_conversion_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Creates a USD transaction with a conversion rate of 1 and no
    /// description.
    pub fn new(amount: f64, date: NaiveDate) -> Self {
        Self {
            amount,
            date,
            currency: CurrencyCode::usd(),
            usd_conversion_rate: 1.0,
            description: None,
        }
    }

    /// Denominates the transaction in `currency`, converted to USD by
    /// multiplying with `usd_conversion_rate`.
    pub fn with_currency(mut self, currency: impl Into<String>, usd_conversion_rate: f64) -> Self {
        self.currency = CurrencyCode::new(currency);
        self.usd_conversion_rate = usd_conversion_rate;
        self
    }

    /// Attaches a free-text note.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Value in the reference currency, recomputed on every call.
    pub fn usd(&self) -> f64 {
        self.amount * self.usd_conversion_rate
    }

    pub fn default_conversion_rate() -> f64 {
        1.0
    }
}
