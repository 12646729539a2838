use rust_decimal::Decimal;

use super::Amount;

/// The session's spending ceiling. Starts at zero and unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Budget {
    limit: Amount,
    is_set: bool,
}

impl Budget {
    pub fn set(&mut self, limit: Amount) {
        self.limit = limit;
        self.is_set = true;
    }

    pub fn limit(&self) -> Amount {
        self.limit
    }

    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Compare `spent` against the limit. Reporting is suppressed while
    /// nothing has been recorded, whatever the budget holds.
    pub fn status(&self, spent: Decimal, has_expenses: bool) -> BudgetStatus {
        if !has_expenses {
            return BudgetStatus::NoExpenses;
        }
        if !self.is_set {
            return BudgetStatus::Unset;
        }
        let remaining = self.limit.value() - spent;
        if remaining >= Decimal::ZERO {
            BudgetStatus::WithinBudget(remaining)
        } else {
            BudgetStatus::OverBudget(remaining.abs())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    NoExpenses,
    Unset,
    WithinBudget(Decimal),
    OverBudget(Decimal),
}
