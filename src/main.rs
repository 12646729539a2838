mod config;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    let log_path = logging::init(&config)?;
    tracing::info!(log = %log_path.display(), "expense tracker starting");

    // One ledger per process; it lives exactly as long as this session.
    let mut app = ui::app::App::new(&config);

    match args.len() {
        1 => run::as_tui(&mut app),
        _ => run::as_cli(&args, &mut app),
    }
}
