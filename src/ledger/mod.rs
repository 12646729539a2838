mod error;

pub use error::LedgerError;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::{parse_decimal, Amount, Budget, BudgetStatus, Category, Expense, SearchField};

/// Every recorded expense in insertion order, with their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Listing<'a> {
    pub(crate) records: &'a [Expense],
    pub(crate) total: Decimal,
}

impl Listing<'_> {
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

/// Per-category sums, alphabetical by category name. Categories without
/// records are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategorySummary {
    pub(crate) totals: Vec<(Category, Decimal)>,
    pub(crate) grand_total: Decimal,
}

/// Session-scoped expense ledger: an append-only list of expenses and a
/// single budget. Owned by whoever drives the session; nothing is shared or
/// persisted.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    expenses: Vec<Expense>,
    budget: Budget,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append an expense. Callers check [`Ledger::can_add`] first; the sums
    /// below saturate rather than panic if that is skipped.
    pub(crate) fn add_expense(
        &mut self,
        category: Category,
        amount: Amount,
        description: String,
    ) -> Expense {
        let expense = Expense::new(category, amount, description);
        self.expenses.push(expense.clone());
        info!(
            category = %expense.category,
            amount = %expense.amount,
            entries = self.expenses.len(),
            "expense added"
        );
        expense
    }

    pub(crate) fn list_all(&self) -> Listing<'_> {
        Listing {
            records: &self.expenses,
            total: self.total(),
        }
    }

    pub(crate) fn category_summary(&self) -> CategorySummary {
        let mut totals: Vec<(Category, Decimal)> = Vec::new();
        for expense in &self.expenses {
            match totals.iter_mut().find(|(c, _)| *c == expense.category) {
                Some((_, sum)) => *sum = sum.saturating_add(expense.amount.value()),
                None => totals.push((expense.category, expense.amount.value())),
            }
        }
        totals.sort_by_key(|(c, _)| c.as_str());

        let grand_total = totals
            .iter()
            .fold(Decimal::ZERO, |acc, (_, sum)| acc.saturating_add(*sum));
        debug!(categories = totals.len(), %grand_total, "category summary");
        CategorySummary {
            totals,
            grand_total,
        }
    }

    pub(crate) fn set_budget(&mut self, value: Amount) {
        self.budget.set(value);
        info!(budget = %value, "budget set");
    }

    pub(crate) fn budget_status(&self) -> BudgetStatus {
        self.budget.status(self.total(), !self.expenses.is_empty())
    }

    /// Find expenses whose `field` matches `query`.
    ///
    /// Category and description use case-insensitive substring matching, so
    /// an empty query matches everything. Amount requires `query` to parse as
    /// a number and matches by exact value.
    pub(crate) fn search(
        &self,
        field: SearchField,
        query: &str,
    ) -> Result<Vec<Expense>, LedgerError> {
        let matches: Vec<Expense> = match field {
            SearchField::Amount => {
                let target = parse_decimal(query)
                    .ok_or_else(|| LedgerError::InvalidQuery(query.trim().to_string()))?;
                self.expenses
                    .iter()
                    .filter(|e| e.amount.value() == target)
                    .cloned()
                    .collect()
            }
            SearchField::Category | SearchField::Description => {
                let needle = query.to_lowercase();
                self.expenses
                    .iter()
                    .filter(|e| {
                        field
                            .text_of(e)
                            .is_some_and(|text| text.to_lowercase().contains(&needle))
                    })
                    .cloned()
                    .collect()
            }
        };
        debug!(%field, query, matches = matches.len(), "search");
        Ok(matches)
    }

    pub(crate) fn total(&self) -> Decimal {
        self.expenses
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount.value()))
    }

    /// Whether `amount` fits on top of the running total without overflowing
    /// `Decimal`.
    pub(crate) fn can_add(&self, amount: Amount) -> bool {
        self.total().checked_add(amount.value()).is_some()
    }

    pub(crate) fn budget(&self) -> Amount {
        self.budget.limit()
    }

    pub(crate) fn is_budget_set(&self) -> bool {
        self.budget.is_set()
    }

    pub(crate) fn len(&self) -> usize {
        self.expenses.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
