use std::str::FromStr;

use super::Expense;
use crate::ledger::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Category,
    Description,
    Amount,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Description => "Description",
            Self::Amount => "Amount",
        }
    }

    pub fn all() -> &'static [SearchField] {
        &[Self::Category, Self::Description, Self::Amount]
    }

    pub fn cycle(self, delta: i32) -> Self {
        let all = Self::all();
        let len = all.len() as i32;
        let idx = all.iter().position(|f| *f == self).unwrap_or(0) as i32;
        all[(idx + delta).rem_euclid(len) as usize]
    }

    /// Text this field contributes to substring matching. `None` for `Amount`,
    /// which is matched numerically.
    pub fn text_of<'a>(&self, expense: &'a Expense) -> Option<&'a str> {
        match self {
            Self::Category => Some(expense.category.as_str()),
            Self::Description => Some(expense.description.as_str()),
            Self::Amount => None,
        }
    }
}

impl FromStr for SearchField {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category" | "cat" | "c" => Ok(Self::Category),
            "description" | "desc" | "d" => Ok(Self::Description),
            "amount" | "amt" | "a" => Ok(Self::Amount),
            _ => Err(LedgerError::InvalidSearchField(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
