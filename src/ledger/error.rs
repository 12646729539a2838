use thiserror::Error;

/// Rejected user input. Every variant is recoverable and meant to be shown
/// to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Invalid amount '{0}': enter a number of zero or more")]
    InvalidAmount(String),
    #[error(
        "Unknown category '{0}'. Choose one of: Food, Transport, Entertainment, Shopping, Bills, Others"
    )]
    InvalidCategory(String),
    #[error("Please enter a valid number (got '{0}')")]
    InvalidQuery(String),
    #[error("Unknown search field '{0}'. Search by Category, Description or Amount")]
    InvalidSearchField(String),
    #[error("Amount '{0}' would push the session total past the largest supported value")]
    TotalOverflow(String),
}
