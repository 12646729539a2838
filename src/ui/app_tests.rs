#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::*;
use crate::config::Config;
use crate::ledger::LedgerError;
use crate::models::{Amount, Category, SearchField};

fn app() -> App {
    App::new(&Config::default())
}

// ── construction ──────────────────────────────────────────────

#[test]
fn test_new_app_defaults() {
    let app = app();
    assert!(app.running);
    assert_eq!(app.screen, Screen::Add);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.form_category, Category::Food);
    assert!(app.ledger.is_empty());
    assert!(!app.ledger.is_budget_set());
}

#[test]
fn test_initial_budget_from_config() {
    let config = Config {
        initial_budget: Some(Amount::new(dec!(750)).unwrap()),
        ..Config::default()
    };
    let app = App::new(&config);
    assert!(app.ledger.is_budget_set());
    assert_eq!(app.ledger.budget().value(), dec!(750));
}

#[test]
fn test_money_uses_configured_currency() {
    let config = Config {
        currency: "$".into(),
        ..Config::default()
    };
    assert_eq!(App::new(&config).money(dec!(1500)), "$1,500.00");
}

// ── add form ──────────────────────────────────────────────────

#[test]
fn test_form_field_navigation() {
    assert_eq!(FormField::Category.next(), FormField::Amount);
    assert_eq!(FormField::Description.next(), FormField::Submit);
    assert_eq!(FormField::Submit.next(), FormField::Submit);
    assert_eq!(FormField::Category.prev(), FormField::Category);
    assert_eq!(FormField::Submit.prev(), FormField::Description);
}

#[test]
fn test_submit_form_adds_and_clears() {
    let mut app = app();
    app.form_category = Category::Entertainment;
    app.form_amount = "250".into();
    app.form_description = "concert".into();
    app.submit_form();

    let listing = app.ledger.list_all();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing.records[0].category, Category::Entertainment);
    assert_eq!(listing.records[0].description, "concert");
    assert!(app.form_amount.is_empty());
    assert!(app.form_description.is_empty());
    assert_eq!(app.form_category, Category::Entertainment);
    assert_eq!(app.status_message, "Expense added: Entertainment ₹250.00");
}

#[test]
fn test_submit_form_invalid_amount_keeps_input() {
    let mut app = app();
    app.form_amount = "-20".into();
    app.form_description = "oops".into();
    app.submit_form();
    assert!(app.ledger.is_empty());
    assert_eq!(app.form_amount, "-20");
    assert_eq!(app.form_description, "oops");
    assert_eq!(app.form_field, FormField::Amount);
    assert!(app.status_message.starts_with("Invalid amount"));
}

#[test]
fn test_submit_form_blank_amount_rejected() {
    let mut app = app();
    app.submit_form();
    assert!(app.ledger.is_empty());
    assert!(app.status_message.starts_with("Invalid amount"));
}

#[test]
fn test_edit_amount_then_description() {
    let mut app = app();
    app.form_field = FormField::Amount;
    app.begin_edit(EditTarget::Amount);
    assert_eq!(app.input_mode, InputMode::Editing);
    app.edit_input.push_str(" 42.5 ");
    app.commit_edit();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.form_amount, "42.5");
    assert_eq!(app.form_field, FormField::Description);

    app.begin_edit(EditTarget::Description);
    app.edit_input.push_str("taxi home");
    app.commit_edit();
    assert_eq!(app.form_description, "taxi home");
    assert_eq!(app.form_field, FormField::Submit);
}

#[test]
fn test_edit_amount_invalid_stays_on_field() {
    let mut app = app();
    app.form_field = FormField::Amount;
    app.begin_edit(EditTarget::Amount);
    app.edit_input.push_str("ten");
    app.commit_edit();
    assert_eq!(app.form_field, FormField::Amount);
    assert!(app.status_message.starts_with("Invalid amount 'ten'"));
}

#[test]
fn test_edit_budget() {
    let mut app = app();
    app.begin_edit(EditTarget::Budget);
    assert!(app.edit_input.is_empty());
    app.edit_input.push_str("1000");
    app.commit_edit();
    assert_eq!(app.ledger.budget().value(), dec!(1000));
    assert_eq!(app.status_message, "Budget set to ₹1,000.00");

    app.begin_edit(EditTarget::Budget);
    assert_eq!(app.edit_input, "1000");
}

#[test]
fn test_cancel_edit_discards_text() {
    let mut app = app();
    app.begin_edit(EditTarget::Description);
    app.edit_input.push_str("draft");
    app.cancel_edit();
    assert!(app.form_description.is_empty());
    assert!(app.edit_target.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
}

// ── search ────────────────────────────────────────────────────

#[test]
fn test_run_search_and_clear() {
    let mut app = app();
    app.record_expense(Category::Food, "100", "lunch").unwrap();
    app.record_expense(Category::Bills, "80", "phone").unwrap();

    app.search_input = "PHO".into();
    app.search_field = SearchField::Description;
    app.run_search();
    assert!(app.search_ran);
    assert_eq!(app.search_results.len(), 1);
    assert!(app.search_error.is_none());

    app.clear_search();
    assert!(!app.search_ran);
    assert!(app.search_results.is_empty());
    assert!(app.search_input.is_empty());
}

#[test]
fn test_run_search_invalid_amount_sets_error() {
    let mut app = app();
    app.record_expense(Category::Food, "100", "lunch").unwrap();
    app.search_field = SearchField::Amount;
    app.search_input = "1oo".into();
    app.run_search();
    assert!(app.search_results.is_empty());
    assert_eq!(
        app.search_error.as_deref(),
        Some("Please enter a valid number (got '1oo')")
    );
}

#[test]
fn test_cycle_search_field_reruns() {
    let mut app = app();
    app.record_expense(Category::Food, "100", "food court").unwrap();
    app.record_expense(Category::Food, "5", "tip").unwrap();
    app.search_input = "food".into();
    app.run_search();
    assert_eq!(app.search_results.len(), 2);

    app.cycle_search_field(1);
    assert_eq!(app.search_field, SearchField::Description);
    assert_eq!(app.search_results.len(), 1);

    app.cycle_search_field(1);
    assert_eq!(app.search_field, SearchField::Amount);
    assert!(app.search_error.is_some());
}

#[test]
fn test_record_expense_rejects_bad_amount() {
    let mut app = app();
    assert!(app.record_expense(Category::Food, "abc", "").is_err());
    assert!(app.ledger.is_empty());
}

#[test]
fn test_record_expense_rejects_total_overflow() {
    let mut app = app();
    let max = "79228162514264337593543950335";
    assert!(app.record_expense(Category::Food, max, "first").is_ok());
    let err = app.record_expense(Category::Food, max, "second").unwrap_err();
    assert_eq!(err, LedgerError::TotalOverflow(max.into()));
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.ledger.list_all().total.to_string(), max);
}

#[test]
fn test_submit_form_reports_total_overflow() {
    let mut app = app();
    app.record_expense(Category::Bills, "79228162514264337593543950335", "")
        .unwrap();
    app.form_amount = "1".into();
    app.submit_form();
    assert!(app.status_message.contains("largest supported value"));
    assert_eq!(app.form_amount, "1");
    assert_eq!(app.ledger.len(), 1);
}
