#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use std::io::Write as _;

use super::script::run_script;
use crate::config::Config;
use crate::models::BudgetStatus;
use crate::ui::app::App;

fn run(text: &str) -> (App, String) {
    let mut app = App::new(&Config::default());
    let mut out = Vec::new();
    run_script(text, &mut app, &mut out).unwrap();
    (app, String::from_utf8(out).unwrap())
}

#[test]
fn test_script_applies_commands_in_order() {
    let (app, out) = run("add Food 100 lunch\n:add Transport 50 bus\nadd Food 20 snack\n");
    let summary = app.ledger.category_summary();
    assert_eq!(summary.grand_total, dec!(170));
    assert_eq!(summary.totals.len(), 2);
    assert!(out.contains("   1: Expense added: Food ₹100.00"));
    assert!(out.contains("   2: Expense added: Transport ₹50.00"));
    assert!(out.contains("  Entries:    3"));
    assert!(out.contains("  Total:      ₹170.00"));
    assert!(out.contains("  Food             ₹120.00"));
    assert!(out.contains("  Transport        ₹50.00"));
}

#[test]
fn test_script_skips_comments_and_blanks() {
    let (app, out) = run("# groceries\n\n   \nadd Food 10\n");
    assert_eq!(app.ledger.len(), 1);
    assert!(out.contains("   4: Expense added"));
}

#[test]
fn test_script_reports_bad_input_and_continues() {
    let (app, out) = run("add Food -3\nadd Travel 5\nsearch amount abc\nadd Bills 40 internet\n");
    assert_eq!(app.ledger.len(), 1);
    assert!(out.contains("   1: Invalid amount '-3'"));
    assert!(out.contains("   2: Unknown category 'Travel'"));
    assert!(out.contains("   3: Please enter a valid number (got 'abc')"));
}

#[test]
fn test_script_budget_status() {
    let (app, out) = run("budget 100\nadd Shopping 150 shoes\n");
    assert_eq!(app.ledger.budget_status(), BudgetStatus::OverBudget(dec!(50)));
    assert!(out.contains("  Budget:     ₹100.00"));
    assert!(out.ends_with("Over budget by ₹50.00!\n"));
}

#[test]
fn test_script_empty_ledger_suppresses_status() {
    let (_, out) = run("budget 500\n");
    assert!(out.contains("  Entries:    0"));
    assert!(!out.contains("Spending by Category"));
    assert!(out.ends_with("No expenses recorded yet to compare with budget.\n"));
}

#[test]
fn test_script_quit_stops_early() {
    let (app, _) = run("add Food 1\nquit\nadd Food 2\n");
    assert_eq!(app.ledger.len(), 1);
    assert!(!app.running);
}

#[test]
fn test_script_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "add Others 7.25 stamps").unwrap();
    writeln!(file, "search description STAMP").unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();

    let (app, out) = run(&text);
    assert_eq!(app.search_results.len(), 1);
    assert!(out.contains("   2: 1 matching records"));
}

#[test]
fn test_shellexpand() {
    assert_eq!(super::shellexpand("/tmp/x.log"), "/tmp/x.log");
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    assert_eq!(super::shellexpand("~/x.log"), format!("{home}/x.log"));
}
