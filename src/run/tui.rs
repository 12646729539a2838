use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use crate::ui::app::{App, EditTarget, FormField, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("tui session started");

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }
    info!(
        entries = app.ledger.len(),
        total = %app.ledger.total(),
        "tui session ended"
    );

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Tab, status and command bars, table borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Search => handle_search_input(key, app),
                InputMode::Editing => handle_editing_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.screen = Screen::Search;
            app.input_mode = InputMode::Search;
            app.search_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, Screen::Add),
        KeyCode::Char('2') => switch_screen(app, Screen::Expenses),
        KeyCode::Char('3') => switch_screen(app, Screen::Summary),
        KeyCode::Char('4') => switch_screen(app, Screen::Budget),
        KeyCode::Char('5') => switch_screen(app, Screen::Search),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Enter => handle_enter(app),
        KeyCode::Esc => handle_escape(app),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => handle_adjust(app, 1),
        KeyCode::Char('-') | KeyCode::Left => handle_adjust(app, -1),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.run_search();
            if let Some(err) = app.search_error.clone() {
                app.set_status(err);
            } else if app.search_results.is_empty() {
                app.set_status("No matching records found.");
            } else {
                let n = app.search_results.len();
                app.set_status(format!("{n} matching records"));
            }
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.clear_search();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            // Live search: filter as you type
            app.run_search();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.run_search();
        }
        _ => {}
    }
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => {
            app.edit_input.pop();
        }
        KeyCode::Char(c) => {
            app.edit_input.push(c);
        }
        _ => {}
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    if screen == Screen::Expenses {
        let len = app.ledger.len();
        if app.expense_index >= len {
            app.expense_index = len.saturating_sub(1);
        }
    }
}

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Add => app.form_field = app.form_field.next(),
        Screen::Expenses => {
            let len = app.ledger.len();
            scroll_down(&mut app.expense_index, &mut app.expense_scroll, len, page);
        }
        Screen::Search => {
            let len = app.search_results.len();
            scroll_down(&mut app.search_index, &mut app.search_scroll, len, page);
        }
        _ => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Add => app.form_field = app.form_field.prev(),
        Screen::Expenses => scroll_up(&mut app.expense_index, &mut app.expense_scroll),
        Screen::Search => scroll_up(&mut app.search_index, &mut app.search_scroll),
        _ => {}
    }
}

fn handle_enter(app: &mut App) {
    match app.screen {
        Screen::Add => match app.form_field {
            FormField::Category => {
                app.form_category = app.form_category.cycle(1);
            }
            FormField::Amount => app.begin_edit(EditTarget::Amount),
            FormField::Description => app.begin_edit(EditTarget::Description),
            FormField::Submit => app.submit_form(),
        },
        Screen::Budget => app.begin_edit(EditTarget::Budget),
        Screen::Search => {
            app.input_mode = InputMode::Search;
        }
        _ => {}
    }
}

fn handle_escape(app: &mut App) {
    match app.screen {
        Screen::Search => app.clear_search(),
        _ => app.status_message.clear(),
    }
}

fn handle_adjust(app: &mut App, delta: i32) {
    match app.screen {
        Screen::Add if app.form_field == FormField::Category => {
            app.form_category = app.form_category.cycle(delta);
        }
        Screen::Search => app.cycle_search_field(delta),
        _ => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Add => app.form_field = FormField::Category,
        Screen::Expenses => scroll_to_top(&mut app.expense_index, &mut app.expense_scroll),
        Screen::Search => scroll_to_top(&mut app.search_index, &mut app.search_scroll),
        _ => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Add => app.form_field = FormField::Submit,
        Screen::Expenses => {
            let len = app.ledger.len();
            scroll_to_bottom(&mut app.expense_index, &mut app.expense_scroll, len, page);
        }
        Screen::Search => {
            let len = app.search_results.len();
            scroll_to_bottom(&mut app.search_index, &mut app.search_scroll, len, page);
        }
        _ => {}
    }
}
