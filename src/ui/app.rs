use rust_decimal::Decimal;
use tracing::warn;

use crate::config::Config;
use crate::ledger::{Ledger, LedgerError};
use crate::models::{Amount, Category, Expense, SearchField};
use crate::ui::util::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Add,
    Expenses,
    Summary,
    Budget,
    Search,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Add,
            Self::Expenses,
            Self::Summary,
            Self::Budget,
            Self::Search,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "Add Expense"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Summary => write!(f, "Summary"),
            Self::Budget => write!(f, "Budget"),
            Self::Search => write!(f, "Search"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// Rows of the add-expense form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Category,
    Amount,
    Description,
    Submit,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Category,
            Self::Amount,
            Self::Description,
            Self::Submit,
        ]
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Description,
            Self::Description | Self::Submit => Self::Submit,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Category | Self::Amount => Self::Category,
            Self::Description => Self::Amount,
            Self::Submit => Self::Description,
        }
    }
}

/// Where the edit line writes its text when confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditTarget {
    Amount,
    Description,
    Budget,
}

impl std::fmt::Display for EditTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount => write!(f, "amount"),
            Self::Description => write!(f, "description"),
            Self::Budget => write!(f, "budget"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) currency: String,
    pub(crate) ledger: Ledger,

    // Edit line
    pub(crate) edit_input: String,
    pub(crate) edit_target: Option<EditTarget>,

    // Add form
    pub(crate) form_field: FormField,
    pub(crate) form_category: Category,
    pub(crate) form_amount: String,
    pub(crate) form_description: String,

    // Expenses
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Search
    pub(crate) search_field: SearchField,
    pub(crate) search_input: String,
    pub(crate) search_results: Vec<Expense>,
    pub(crate) search_error: Option<String>,
    pub(crate) search_ran: bool,
    pub(crate) search_index: usize,
    pub(crate) search_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: &Config) -> Self {
        let mut ledger = Ledger::new();
        if let Some(budget) = config.initial_budget {
            ledger.set_budget(budget);
        }

        Self {
            running: true,
            screen: Screen::Add,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            currency: config.currency.clone(),
            ledger,

            edit_input: String::new(),
            edit_target: None,

            form_field: FormField::Category,
            form_category: Category::Food,
            form_amount: String::new(),
            form_description: String::new(),

            expense_index: 0,
            expense_scroll: 0,

            search_field: SearchField::Category,
            search_input: String::new(),
            search_results: Vec::new(),
            search_error: None,
            search_ran: false,
            search_index: 0,
            search_scroll: 0,

            visible_rows: 20,
        }
    }

    pub(crate) fn money(&self, val: Decimal) -> String {
        format_amount(val, &self.currency)
    }

    /// Validate raw amount text and append the expense to the ledger.
    pub(crate) fn record_expense(
        &mut self,
        category: Category,
        amount_text: &str,
        description: &str,
    ) -> Result<Expense, LedgerError> {
        let amount = amount_text.parse::<Amount>().inspect_err(|e| {
            warn!(error = %e, "expense rejected");
        })?;
        if !self.ledger.can_add(amount) {
            let err = LedgerError::TotalOverflow(amount.to_string());
            warn!(error = %err, "expense rejected");
            return Err(err);
        }
        let expense = self
            .ledger
            .add_expense(category, amount, description.to_string());
        if self.search_ran {
            self.run_search();
        }
        Ok(expense)
    }

    /// Validate raw budget text and store it.
    pub(crate) fn apply_budget(&mut self, text: &str) -> Result<Amount, LedgerError> {
        let amount = text.parse::<Amount>().inspect_err(|e| {
            warn!(error = %e, "budget rejected");
        })?;
        self.ledger.set_budget(amount);
        Ok(amount)
    }

    pub(crate) fn submit_form(&mut self) {
        let amount_text = self.form_amount.clone();
        let description = self.form_description.clone();
        match self.record_expense(self.form_category, &amount_text, &description) {
            Ok(expense) => {
                let msg = format!(
                    "Expense added: {} {}",
                    expense.category,
                    self.money(expense.amount.value())
                );
                self.set_status(msg);
                self.form_amount.clear();
                self.form_description.clear();
            }
            Err(e) => self.set_status(e.to_string()),
        }
        self.form_field = FormField::Amount;
    }

    /// Re-run the current query against the ledger. Invalid amount queries
    /// leave an error message and no results.
    pub(crate) fn run_search(&mut self) {
        self.search_ran = true;
        self.search_index = 0;
        self.search_scroll = 0;
        match self.ledger.search(self.search_field, &self.search_input) {
            Ok(results) => {
                self.search_results = results;
                self.search_error = None;
            }
            Err(e) => {
                warn!(error = %e, "search rejected");
                self.search_results.clear();
                self.search_error = Some(e.to_string());
            }
        }
    }

    pub(crate) fn clear_search(&mut self) {
        self.search_input.clear();
        self.search_results.clear();
        self.search_error = None;
        self.search_ran = false;
        self.search_index = 0;
        self.search_scroll = 0;
    }

    pub(crate) fn cycle_search_field(&mut self, delta: i32) {
        self.search_field = self.search_field.cycle(delta);
        if self.search_ran {
            self.run_search();
        }
        let field = self.search_field;
        self.set_status(format!("Search by {field}"));
    }

    pub(crate) fn begin_edit(&mut self, target: EditTarget) {
        self.edit_input = match target {
            EditTarget::Amount => self.form_amount.clone(),
            EditTarget::Description => self.form_description.clone(),
            EditTarget::Budget if self.ledger.is_budget_set() => {
                self.ledger.budget().to_string()
            }
            EditTarget::Budget => String::new(),
        };
        self.edit_target = Some(target);
        self.input_mode = InputMode::Editing;
    }

    pub(crate) fn commit_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        let text = std::mem::take(&mut self.edit_input);
        let Some(target) = self.edit_target.take() else {
            return;
        };

        match target {
            EditTarget::Amount => {
                self.form_amount = text.trim().to_string();
                match self.form_amount.parse::<Amount>() {
                    Ok(_) => {
                        self.status_message.clear();
                        self.form_field = FormField::Description;
                    }
                    Err(e) => self.set_status(e.to_string()),
                }
            }
            EditTarget::Description => {
                self.form_description = text;
                self.form_field = FormField::Submit;
            }
            EditTarget::Budget => match self.apply_budget(&text) {
                Ok(amount) => {
                    let msg = format!("Budget set to {}", self.money(amount.value()));
                    self.set_status(msg);
                }
                Err(e) => self.set_status(e.to_string()),
            },
        }
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.edit_input.clear();
        self.edit_target = None;
        self.input_mode = InputMode::Normal;
        self.set_status("Edit cancelled");
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
