use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use super::{empty_lines, titled_block};
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.ledger.category_summary();
    if summary.totals.is_empty() {
        let msg = empty_lines(&["No expenses recorded yet!"]);
        f.render_widget(
            Paragraph::new(msg)
                .centered()
                .block(titled_block("Category Summary")),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),                                  // Bar chart
            Constraint::Length(summary.totals.len() as u16 + 4), // Totals
        ])
        .split(area);

    let bars: Vec<Bar> = summary
        .totals
        .iter()
        .map(|(category, amt)| {
            // Whole units; the exact figure is in the totals list below.
            let val = amt.round().to_u64().unwrap_or(0);
            Bar::default()
                .value(val)
                .label(Line::from(category.as_str()))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block("Spending by Category"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(13)
        .bar_gap(2)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));
    f.render_widget(chart, chunks[0]);

    let mut lines: Vec<Line> = summary
        .totals
        .iter()
        .map(|(category, amt)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<16}", category.as_str()),
                    theme::normal_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:>16}", app.money(*amt)), theme::amount_style()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!(" {:<16}", "Total"), theme::section_style()),
        Span::styled(
            format!("{:>16}", app.money(summary.grand_total)),
            theme::section_style(),
        ),
    ]));

    f.render_widget(Paragraph::new(lines).block(titled_block("Totals")), chunks[1]);
}
