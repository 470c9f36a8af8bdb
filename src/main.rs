use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};
use tracing::{debug, info};

/// Admin dashboard TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (dashtui-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Page to open on start: sellers, customers, products or reports
    #[arg(short, long)]
    page: Option<String>,

    /// Directory CSV exports are written to
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

mod app;
mod handlers;
mod ui;
mod utils;

use dashtui::config::Config;
use dashtui::export::FileExportSink;

/// How long quitting waits for in-flight CSV writes
const EXPORT_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);
use dashtui::logic;
use dashtui::model::{self, PageId};
use dashtui::seed::SeedData;

pub struct App {
    pub model: model::Model,

    export_sink: FileExportSink,
}

impl App {
    pub fn new(model: model::Model, export_sink: FileExportSink) -> Self {
        Self { model, export_sink }
    }
}

/// Determine the config file path with fallback logic
///
/// Returns None when no config exists; the defaults are used then.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/dashtui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("dashtui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    utils::init_logging(args.debug)?;
    debug!("Debug mode enabled");

    // Load configuration
    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            debug!("Loading config from: {:?}", path);
            Config::load(&path).with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => {
            debug!("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(dir) = args.export_dir {
        config.export_dir = Some(dir);
    }

    let start_page = match args.page.as_deref() {
        Some(name) => PageId::from_name(name)
            .with_context(|| format!("Unknown page: {} (expected sellers, customers, products or reports)", name))?,
        None => PageId::default(),
    };

    // Seed every page (failed sources fall back to mock data)
    let (data, failures) = SeedData::load(&config.seeds, config.mock_seed).await;
    let mut model = model::Model::new(data, &config, start_page);

    if let Some(failure) = failures.first() {
        let kind = logic::errors::classify_seed_error(&failure.error);
        model.show_toast(format!(
            "Error: {} for {}: {} (using mock data)",
            logic::errors::seed_error_label(&kind),
            failure.page,
            logic::errors::format_seed_error(&failure.error)
        ));
    }

    let export_sink =
        FileExportSink::new(config.export_dir()).timestamped(config.timestamp_exports);
    info!("Exports go to {}", export_sink.dir().display());

    let mut app = App::new(model, export_sink);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Finish exports started just before quitting
    if app.export_sink.pending_len() > 0 {
        let report = app.export_sink.flush(EXPORT_FLUSH_TIMEOUT).await;
        info!(
            "Export flush: {} written, {} failed, {} abandoned",
            report.written, report.failed, report.abandoned
        );
        if report.failed + report.abandoned > 0 {
            eprintln!(
                "Warning: {} export(s) were not written (see debug log)",
                report.failed + report.abandoned
            );
        }
    }

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Let spawned export writes make progress between frames
        tokio::task::yield_now().await;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
