use anyhow::Result;
use std::io::Write;
use tracing::info;

use crate::ui::app::App;
use crate::ui::commands::{budget_message, handle_command};

/// Run command lines against `app`, echoing each status message to `out`,
/// then print a session summary. Blank lines and `#` comments are skipped; a
/// leading `:` is optional. `quit` stops early.
pub(crate) fn run_script(text: &str, app: &mut App, out: &mut impl Write) -> Result<()> {
    let mut executed = 0usize;
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command = line.strip_prefix(':').unwrap_or(line);

        app.status_message.clear();
        handle_command(command, app)?;
        executed += 1;

        if !app.status_message.is_empty() {
            writeln!(out, "{:>4}: {}", lineno + 1, app.status_message)?;
        }
        if !app.running {
            break;
        }
    }
    info!(commands = executed, "script finished");

    write_summary(app, out)
}

fn write_summary(app: &App, out: &mut impl Write) -> Result<()> {
    let listing = app.ledger.list_all();
    writeln!(out)?;
    writeln!(out, "Session summary")?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Entries:    {}", listing.len())?;
    writeln!(out, "  Total:      {}", app.money(listing.total))?;
    if app.ledger.is_budget_set() {
        writeln!(out, "  Budget:     {}", app.money(app.ledger.budget().value()))?;
    }

    let summary = app.ledger.category_summary();
    if !summary.totals.is_empty() {
        writeln!(out)?;
        writeln!(out, "Spending by Category:")?;
        for (category, amount) in &summary.totals {
            writeln!(out, "  {:<16} {}", category.as_str(), app.money(*amount))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", budget_message(app))?;
    Ok(())
}
