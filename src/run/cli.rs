use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use super::script::run_script;
use crate::ui::app::App;

pub(crate) fn as_cli(args: &[String], app: &mut App) -> Result<()> {
    match args[1].as_str() {
        "script" => cli_script(&args[2..], app),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expense-tracker {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Expense Tracker — session-scoped personal expense tracker");
    println!();
    println!("Usage: expense-tracker [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  script <file|->               Run TUI commands from a file (or stdin)");
    println!("                                one per line, e.g. 'add Food 120 lunch'");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  EXPENSE_TRACKER_CURRENCY      Currency symbol (default: ₹)");
    println!("  EXPENSE_TRACKER_BUDGET        Budget to start the session with");
    println!("  EXPENSE_TRACKER_LOG           Log file path");
    println!("  RUST_LOG                      Log filter (default: info)");
}

fn cli_script(args: &[String], app: &mut App) -> Result<()> {
    let Some(source) = args.first() else {
        anyhow::bail!("Usage: expense-tracker script <file|->");
    };

    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read commands from stdin")?;
        buf
    } else {
        let expanded = super::shellexpand(source);
        let path = Path::new(&expanded);
        if !path.exists() {
            anyhow::bail!("File not found: {source}");
        }
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?
    };

    let stdout = std::io::stdout();
    run_script(&text, app, &mut stdout.lock())
}
