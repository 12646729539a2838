use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{empty_lines, titled_block};
use crate::models::Expense;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let listing = app.ledger.list_all();
    if listing.records.is_empty() {
        let msg = empty_lines(&[
            "No expenses recorded yet!",
            "Add one on the Add Expense tab or with :add <category> <amount> [description]",
        ]);
        f.render_widget(
            Paragraph::new(msg)
                .centered()
                .block(titled_block("All Expenses (0)")),
            area,
        );
        return;
    }

    let title = format!(
        "All Expenses ({}) | Total: {}",
        listing.len(),
        app.money(listing.total)
    );
    render_table(
        f,
        area,
        app,
        listing.records,
        app.expense_index,
        app.expense_scroll,
        title,
    );
}

/// Expense table shared by the listing and search screens. Row numbers are
/// positions within `records`.
pub(crate) fn render_table(
    f: &mut Frame,
    area: Rect,
    app: &App,
    records: &[Expense],
    cursor: usize,
    scroll: usize,
    title: String,
) {
    let header_cells = ["#", "Category", "Amount", "Description"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .skip(scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if i == cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(expense.category.as_str()),
                Cell::from(Span::styled(
                    app.money(expense.amount.value()),
                    if i == cursor {
                        style
                    } else {
                        theme::amount_style()
                    },
                )),
                Cell::from(truncate(&expense.description, 60)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(15),
        Constraint::Length(16),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block(title));

    f.render_widget(table, area);
}
