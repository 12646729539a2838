pub(crate) mod add;
pub(crate) mod budget;
pub(crate) mod expenses;
pub(crate) mod search;
pub(crate) mod summary;


use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::ui::theme;

/// Bordered block with the dim bold title every screen uses.
pub(crate) fn titled_block(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(ratatui::style::Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {} ", title.into()), theme::title_style()))
}

/// Centered dim message lines for empty states.
pub(crate) fn empty_lines(messages: &[&str]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (i, msg) in messages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(msg.to_string(), theme::dim_style())));
    }
    lines
}
