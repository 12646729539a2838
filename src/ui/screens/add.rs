use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::titled_block;
use crate::models::Category;
use crate::ui::app::{App, EditTarget, FormField, InputMode};
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FormField::all().len() as u16 + 4), // Form
            Constraint::Min(3),                                    // Recent entries
        ])
        .split(area);

    render_form(f, chunks[0], app);
    render_recent(f, chunks[1], app);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(20) as usize;
    let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(""))];

    for field in FormField::all() {
        let selected = *field == app.form_field;
        let (label, value) = match field {
            FormField::Category => (
                "Category",
                format!(
                    "< {} >   ({})",
                    app.form_category,
                    Category::all()
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(" / ")
                ),
            ),
            FormField::Amount => ("Amount", format!("{}{}", app.currency, field_text(app, *field))),
            FormField::Description => ("Description", field_text(app, *field)),
            FormField::Submit => ("", "[ Add Expense ]".to_string()),
        };

        let style = if selected {
            theme::selected_style()
        } else {
            theme::normal_style()
        };
        let marker = if selected { "›" } else { " " };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!(" {marker} {label:<14}"), style),
            Span::styled(
                truncate(&value, width),
                if *field == FormField::Submit {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                },
            ),
        ])));
    }

    let list = List::new(items).block(titled_block("Add New Expense"));
    f.render_widget(list, area);
}

/// Text shown for an editable field, including the in-progress edit line.
fn field_text(app: &App, field: FormField) -> String {
    let editing = app.input_mode == InputMode::Editing;
    match field {
        FormField::Amount if editing && app.edit_target == Some(EditTarget::Amount) => {
            format!("{}▏", app.edit_input)
        }
        FormField::Description
            if editing && app.edit_target == Some(EditTarget::Description) =>
        {
            format!("{}▏", app.edit_input)
        }
        FormField::Amount if app.form_amount.is_empty() => "0.00".into(),
        FormField::Amount => app.form_amount.clone(),
        FormField::Description => app.form_description.clone(),
        _ => String::new(),
    }
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let listing = app.ledger.list_all();
    let rows = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = if listing.records.is_empty() {
        vec![Line::from(Span::styled(
            " Nothing recorded this session. Fill in the form and press Enter on [ Add Expense ]",
            theme::dim_style(),
        ))]
    } else {
        listing
            .records
            .iter()
            .rev()
            .take(rows)
            .map(|e| {
                Line::from(vec![
                    Span::styled(format!(" {:<15}", e.category), theme::normal_style()),
                    Span::styled(
                        format!("{:>14}  ", app.money(e.amount.value())),
                        theme::amount_style(),
                    ),
                    Span::styled(truncate(&e.description, 40), theme::dim_style()),
                ])
            })
            .collect()
    };

    f.render_widget(
        Paragraph::new(lines).block(titled_block("Recently Added")),
        area,
    );
}
