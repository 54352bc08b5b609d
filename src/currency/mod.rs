use std::fmt;

use serde::{Deserialize, Serialize};

/// The reference currency all balances are aggregated into.
pub const REFERENCE_CURRENCY: &str = "USD";

/// ISO 4217-style currency code.
///
/// The code is stored verbatim: no validation or case normalization is
/// applied, so `"usd"` and `"USD"` are distinct codes and unknown codes are
/// accepted silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The USD reference currency.
    pub fn usd() -> Self {
        Self::new(REFERENCE_CURRENCY)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this code equals the USD reference currency exactly.
    pub fn is_reference(&self) -> bool {
        self.0 == REFERENCE_CURRENCY
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::usd()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_kept_verbatim() {
        let code = CurrencyCode::new("eur");
        assert_eq!(code.as_str(), "eur");
        assert!(!code.is_reference());
    }

    #[test]
    fn lowercase_usd_is_not_the_reference() {
        assert!(CurrencyCode::usd().is_reference());
        assert!(!CurrencyCode::new("usd").is_reference());
    }
}
