use rust_decimal::Decimal;
use std::str::FromStr;

use crate::ledger::LedgerError;

/// A non-negative currency amount. Only constructible through validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, LedgerError> {
        if value < Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(value.to_string()));
        }
        // Collapse -0 so it never renders with a sign.
        if value.is_zero() {
            return Ok(Self::ZERO);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            parse_decimal(s).ok_or_else(|| LedgerError::InvalidAmount(s.trim().to_string()))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a plain (`12.50`) or scientific (`1.5e2`) decimal, ignoring surrounding whitespace.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
