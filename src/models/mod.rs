mod amount;
mod budget;
mod category;
mod expense;
mod search_field;

pub use amount::{parse_decimal, Amount};
pub use budget::{Budget, BudgetStatus};
pub use category::Category;
pub use expense::Expense;
pub use search_field::SearchField;
