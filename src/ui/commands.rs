use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::models::{BudgetStatus, Category, SearchField};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!(
        "a",
        "Add expense (e.g. :add Food 120 lunch)",
        cmd_add,
        r
    );
    register_command!(
        "add",
        "Add expense (e.g. :add Food 120 lunch)",
        cmd_add,
        r
    );
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("s", "Go to Category Summary", cmd_summary, r);
    register_command!("summary", "Go to Category Summary", cmd_summary, r);
    register_command!(
        "b",
        "Set or check budget (e.g. :budget 5000)",
        cmd_budget,
        r
    );
    register_command!(
        "budget",
        "Set or check budget (e.g. :budget 5000)",
        cmd_budget,
        r
    );
    register_command!(
        "f",
        "Search by field (e.g. :search description coffee)",
        cmd_search,
        r
    );
    register_command!(
        "search",
        "Search by field (e.g. :search description coffee)",
        cmd_search,
        r
    );
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let (cmd_name, args) = split_word(input);

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

/// Split off the first whitespace-delimited word; the rest is trimmed.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(char::is_whitespace) {
        Some(i) => (&input[..i], input[i..].trim()),
        None => (input, ""),
    }
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.screen = Screen::Add;
        app.set_status("Usage: :add <category> <amount> [description]");
        return Ok(());
    }

    let (category_name, rest) = split_word(args);
    let (amount_str, description) = split_word(rest);
    if amount_str.is_empty() {
        app.set_status("Usage: :add <category> <amount> [description]");
        return Ok(());
    }

    let category = match category_name.parse::<Category>() {
        Ok(c) => c,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    match app.record_expense(category, amount_str, description) {
        Ok(expense) => {
            let msg = format!(
                "Expense added: {} {}",
                expense.category,
                app.money(expense.amount.value())
            );
            app.set_status(msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    let listing = app.ledger.list_all();
    let msg = if listing.records.is_empty() {
        "No expenses recorded yet!".to_string()
    } else {
        format!(
            "{} entries, total {}",
            listing.len(),
            app.money(listing.total)
        )
    };
    app.set_status(msg);
    Ok(())
}

fn cmd_summary(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Summary;
    let summary = app.ledger.category_summary();
    let msg = if summary.totals.is_empty() {
        "No expenses recorded yet!".to_string()
    } else {
        summary
            .totals
            .iter()
            .map(|(c, amt)| format!("{c}: {}", app.money(*amt)))
            .chain(std::iter::once(format!(
                "Total: {}",
                app.money(summary.grand_total)
            )))
            .collect::<Vec<_>>()
            .join(", ")
    };
    app.set_status(msg);
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Budget;
    if !args.is_empty() {
        match app.apply_budget(args) {
            Ok(amount) => {
                let msg = format!("Budget set to {}", app.money(amount.value()));
                app.set_status(msg);
            }
            Err(e) => app.set_status(e.to_string()),
        }
        return Ok(());
    }

    let msg = budget_message(app);
    app.set_status(msg);
    Ok(())
}

/// The banner text for the current budget status.
pub(crate) fn budget_message(app: &App) -> String {
    match app.ledger.budget_status() {
        BudgetStatus::NoExpenses => "No expenses recorded yet to compare with budget.".into(),
        BudgetStatus::Unset => "No budget set. Use :budget <amount>".into(),
        BudgetStatus::WithinBudget(remaining) => {
            format!("You can still spend {}", app.money(remaining))
        }
        BudgetStatus::OverBudget(excess) => format!("Over budget by {}!", app.money(excess)),
    }
}

fn cmd_search(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Search;
    if args.is_empty() {
        app.set_status("Usage: :search <category|description|amount> [query]");
        return Ok(());
    }

    let (field_name, query) = split_word(args);
    let field = match field_name.parse::<SearchField>() {
        Ok(f) => f,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    app.search_field = field;
    app.search_input = query.to_string();
    app.run_search();

    let msg = if let Some(err) = &app.search_error {
        err.clone()
    } else if app.search_results.is_empty() {
        "No matching records found.".to_string()
    } else {
        format!("{} matching records", app.search_results.len())
    };
    app.set_status(msg);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
