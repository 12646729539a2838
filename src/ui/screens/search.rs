use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{empty_lines, titled_block};
use crate::models::SearchField;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query
            Constraint::Min(3),    // Results
        ])
        .split(area);

    render_query(f, chunks[0], app);
    render_results(f, chunks[1], app);
}

fn render_query(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(" Search by: ", theme::dim_style())];
    for field in SearchField::all() {
        let style = if *field == app.search_field {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        spans.push(Span::styled(format!(" {field} "), style));
    }
    spans.push(Span::styled("   Query: ", theme::dim_style()));
    spans.push(Span::styled(
        format!("'{}'", app.search_input),
        theme::normal_style(),
    ));

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(titled_block("Search Expenses")),
        area,
    );
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let message: Option<Vec<Line>> = if app.ledger.is_empty() {
        Some(empty_lines(&["No expenses recorded yet!"]))
    } else if let Some(err) = &app.search_error {
        Some(vec![
            Line::from(""),
            Line::from(Span::styled(err.clone(), theme::error_banner_style())),
        ])
    } else if !app.search_ran {
        Some(empty_lines(&[
            "Press / and type a query, +/- to change the field",
            "or use :search <category|description|amount> <query>",
        ]))
    } else if app.search_results.is_empty() {
        Some(empty_lines(&["No matching records found."]))
    } else {
        None
    };

    if let Some(lines) = message {
        f.render_widget(
            Paragraph::new(lines)
                .centered()
                .block(titled_block("Results (0)")),
            area,
        );
        return;
    }

    let title = format!("Results ({})", app.search_results.len());
    super::expenses::render_table(
        f,
        area,
        app,
        &app.search_results,
        app.search_index,
        app.search_scroll,
        title,
    );
}
