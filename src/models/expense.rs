use super::{Amount, Category};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub category: Category,
    pub amount: Amount,
    pub description: String,
}

impl Expense {
    pub fn new(category: Category, amount: Amount, description: String) -> Self {
        Self {
            category,
            amount,
            description,
        }
    }
}
