#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::app::{App, Screen};
use super::commands::*;
use crate::config::Config;
use crate::models::{BudgetStatus, Category};

fn app() -> App {
    App::new(&Config::default())
}

fn run(app: &mut App, input: &str) {
    handle_command(input, app).unwrap();
}

// ── :add ──────────────────────────────────────────────────────

#[test]
fn test_add_command_records_expense() {
    let mut app = app();
    run(&mut app, "add Food 100 lunch with team");
    let listing = app.ledger.list_all();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing.records[0].category, Category::Food);
    assert_eq!(listing.records[0].amount.value(), dec!(100));
    assert_eq!(listing.records[0].description, "lunch with team");
    assert_eq!(app.status_message, "Expense added: Food ₹100.00");
}

#[test]
fn test_add_alias_and_case_insensitive_category() {
    let mut app = app();
    run(&mut app, "a transport 50");
    let listing = app.ledger.list_all();
    assert_eq!(listing.records[0].category, Category::Transport);
    assert_eq!(listing.records[0].description, "");
}

#[test]
fn test_add_extra_whitespace() {
    let mut app = app();
    run(&mut app, "  add   Bills    1200.5   electricity  ");
    let listing = app.ledger.list_all();
    assert_eq!(listing.records[0].amount.value(), dec!(1200.5));
    assert_eq!(listing.records[0].description, "electricity");
}

#[test]
fn test_add_unknown_category_leaves_ledger_untouched() {
    let mut app = app();
    run(&mut app, "add Travel 100 flight");
    assert!(app.ledger.is_empty());
    assert!(app.status_message.starts_with("Unknown category 'Travel'"));
}

#[test]
fn test_add_negative_amount_rejected() {
    let mut app = app();
    run(&mut app, "add Food -5 refund");
    assert!(app.ledger.is_empty());
    assert!(app.status_message.starts_with("Invalid amount '-5'"));
}

#[test]
fn test_add_non_numeric_amount_rejected() {
    let mut app = app();
    run(&mut app, "add Food lots");
    assert!(app.ledger.is_empty());
    assert!(app.status_message.starts_with("Invalid amount 'lots'"));
}

#[test]
fn test_add_missing_amount_shows_usage() {
    let mut app = app();
    run(&mut app, "add Food");
    assert!(app.ledger.is_empty());
    assert!(app.status_message.starts_with("Usage: :add"));
}

#[test]
fn test_add_without_args_opens_form() {
    let mut app = app();
    app.screen = Screen::Summary;
    run(&mut app, "add");
    assert_eq!(app.screen, Screen::Add);
}

// ── views ─────────────────────────────────────────────────────

#[test]
fn test_expenses_command_reports_totals() {
    let mut app = app();
    run(&mut app, "expenses");
    assert_eq!(app.screen, Screen::Expenses);
    assert_eq!(app.status_message, "No expenses recorded yet!");

    run(&mut app, "add Food 100");
    run(&mut app, "add Food 20");
    run(&mut app, "e");
    assert_eq!(app.status_message, "2 entries, total ₹120.00");
}

#[test]
fn test_summary_command_lists_categories() {
    let mut app = app();
    run(&mut app, "add Food 100 lunch");
    run(&mut app, "add Transport 50 bus");
    run(&mut app, "add Food 20 snack");
    run(&mut app, "summary");
    assert_eq!(app.screen, Screen::Summary);
    assert_eq!(
        app.status_message,
        "Food: ₹120.00, Transport: ₹50.00, Total: ₹170.00"
    );
}

// ── :budget ───────────────────────────────────────────────────

#[test]
fn test_budget_command_sets_value() {
    let mut app = app();
    run(&mut app, "budget 500");
    assert_eq!(app.screen, Screen::Budget);
    assert_eq!(app.ledger.budget().value(), dec!(500));
    assert_eq!(app.status_message, "Budget set to ₹500.00");
}

#[test]
fn test_budget_command_rejects_negative() {
    let mut app = app();
    run(&mut app, "budget -1");
    assert!(!app.ledger.is_budget_set());
    assert!(app.status_message.starts_with("Invalid amount"));
}

#[test]
fn test_budget_check_messages() {
    let mut app = app();
    run(&mut app, "budget");
    assert_eq!(
        app.status_message,
        "No expenses recorded yet to compare with budget."
    );

    run(&mut app, "add Food 300");
    run(&mut app, "b");
    assert_eq!(app.status_message, "No budget set. Use :budget <amount>");

    run(&mut app, "b 500");
    run(&mut app, "b");
    assert_eq!(app.status_message, "You can still spend ₹200.00");

    run(&mut app, "add Shopping 400");
    run(&mut app, "b");
    assert_eq!(app.status_message, "Over budget by ₹200.00!");
    assert_eq!(
        app.ledger.budget_status(),
        BudgetStatus::OverBudget(dec!(200))
    );
}

// ── :search ───────────────────────────────────────────────────

#[test]
fn test_search_command_by_category() {
    let mut app = app();
    run(&mut app, "add Food 100 lunch");
    run(&mut app, "add Transport 50 bus");
    run(&mut app, "search category food");
    assert_eq!(app.screen, Screen::Search);
    assert_eq!(app.search_results.len(), 1);
    assert_eq!(app.status_message, "1 matching records");
}

#[test]
fn test_search_command_description_with_spaces() {
    let mut app = app();
    run(&mut app, "add Food 100 Lunch With Team");
    run(&mut app, "f desc with team");
    assert_eq!(app.search_input, "with team");
    assert_eq!(app.search_results.len(), 1);
}

#[test]
fn test_search_command_invalid_amount() {
    let mut app = app();
    run(&mut app, "add Food 100 lunch");
    run(&mut app, "search amount abc");
    assert!(app.search_results.is_empty());
    assert_eq!(
        app.status_message,
        "Please enter a valid number (got 'abc')"
    );
}

#[test]
fn test_search_command_no_match() {
    let mut app = app();
    run(&mut app, "add Food 100 lunch");
    run(&mut app, "search amount 99");
    assert_eq!(app.status_message, "No matching records found.");
}

#[test]
fn test_search_command_unknown_field() {
    let mut app = app();
    run(&mut app, "search date 2024");
    assert!(app.status_message.starts_with("Unknown search field 'date'"));
    assert!(!app.search_ran);
}

#[test]
fn test_search_results_follow_new_expenses() {
    let mut app = app();
    run(&mut app, "add Food 10 tea");
    run(&mut app, "search description tea");
    assert_eq!(app.search_results.len(), 1);
    run(&mut app, "add Food 12 green tea");
    assert_eq!(app.search_results.len(), 2);
}

// ── misc ──────────────────────────────────────────────────────

#[test]
fn test_unknown_command_suggests() {
    let mut app = app();
    run(&mut app, "sumary");
    assert_eq!(
        app.status_message,
        "Unknown command: :sumary. Did you mean :summary?"
    );
}

#[test]
fn test_quit_and_help() {
    let mut app = app();
    run(&mut app, "help");
    assert!(app.show_help);
    run(&mut app, "q");
    assert!(!app.running);
}

#[test]
fn test_registry_aliases_share_descriptions() {
    for (long, short) in [("add", "a"), ("expenses", "e"), ("summary", "s"), ("budget", "b"), ("search", "f")] {
        assert_eq!(
            COMMANDS.get(long).unwrap().description,
            COMMANDS.get(short).unwrap().description
        );
    }
}

#[test]
fn test_budget_message_matches_status() {
    let mut app = app();
    assert_eq!(app.ledger.total(), Decimal::ZERO);
    run(&mut app, "add Food 150");
    run(&mut app, "budget 100");
    assert_eq!(budget_message(&app), "Over budget by ₹50.00!");
}
