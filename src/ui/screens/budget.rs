use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::titled_block;
use crate::models::BudgetStatus;
use crate::ui::app::{App, EditTarget, InputMode};
use crate::ui::commands::budget_message;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Figures
            Constraint::Length(5), // Status banner
            Constraint::Min(0),
        ])
        .split(area);

    render_figures(f, chunks[0], app);
    render_status(f, chunks[1], app);
}

fn render_figures(f: &mut Frame, area: Rect, app: &App) {
    let editing =
        app.input_mode == InputMode::Editing && app.edit_target == Some(EditTarget::Budget);
    let budget_text = if editing {
        format!("{}{}▏", app.currency, app.edit_input)
    } else if app.ledger.is_budget_set() {
        app.money(app.ledger.budget().value())
    } else {
        "not set".to_string()
    };
    let spent = app.ledger.total();

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {:<16}", "Budget"), theme::dim_style()),
            Span::styled(budget_text, theme::normal_style()),
        ]),
        Line::from(vec![
            Span::styled(format!(" {:<16}", "Spent"), theme::dim_style()),
            Span::styled(app.money(spent), theme::amount_style()),
        ]),
        Line::from(vec![
            Span::styled(format!(" {:<16}", "Entries"), theme::dim_style()),
            Span::styled(app.ledger.len().to_string(), theme::normal_style()),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines).block(titled_block("Budget Management")),
        area,
    );
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = app.ledger.budget_status();
    let style = match status {
        BudgetStatus::WithinBudget(_) => theme::ok_banner_style(),
        BudgetStatus::OverBudget(_) => theme::error_banner_style(),
        BudgetStatus::NoExpenses => Style::default().fg(theme::ACCENT),
        BudgetStatus::Unset => theme::dim_style(),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {}", budget_message(app)), style)),
    ];

    if app.ledger.is_budget_set() && !app.ledger.is_empty() {
        let ratio = spent_ratio(app.ledger.total(), app.ledger.budget().value());
        lines.push(Line::from(vec![
            Span::styled(format!(" {}", create_progress_bar(ratio, 30)), style),
            Span::styled(format!(" {:.0}%", ratio * 100.0), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(titled_block("Status")), area);
}

/// Fraction of the budget spent, capped at 1. A zero budget with any
/// spending counts as fully spent.
pub(crate) fn spent_ratio(spent: Decimal, limit: Decimal) -> f64 {
    if limit > Decimal::ZERO {
        spent
            .checked_div(limit)
            .and_then(|r| r.to_f64())
            .unwrap_or(1.0)
            .min(1.0)
    } else if spent > Decimal::ZERO {
        1.0
    } else {
        0.0
    }
}

fn create_progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
