//! Main entry point for the show-browser CLI application.

use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info, warn};
use ratatui::prelude::*;
use show_browser::api::TvMazeClient;
use show_browser::browser::Browser;
use show_browser::config::{Config, SelectorStyle};
use show_browser::tui::{Action, Tui, poll_event};
use show_browser::types::ShowId;
use show_browser::ui::TextRenderer;
use std::io::{self, stdout};
use std::time::Duration;

/// Command-line arguments for the show-browser application.
#[derive(Parser, Debug)]
#[command(
    name = "show-browser",
    version,
    about = "Browse TV shows and their episodes",
    long_about = "Search and browse TV shows and episodes from a TVmaze-style API using a TUI interface."
)]
struct Args {
    /// Log verbosity level: 0=error, 1=warn, 2=info, 3=debug, 4=trace
    #[arg(short, long, default_value_t = 1)]
    log: u8,

    /// Base URL of the show API (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Episode selector style (overrides config)
    #[arg(short, long, value_enum)]
    selector: Option<SelectorStyle>,

    /// Print the listing as plain text instead of starting the TUI
    #[arg(short, long)]
    print: bool,

    /// With --print, list the episodes of this show
    #[arg(long, requires = "print")]
    show: Option<ShowId>,

    /// With --print, filter the listing by this text
    #[arg(short, long, requires = "print")]
    query: Option<String>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    init_config: bool,
}

/// Initialize the terminal for TUI mode.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    debug!("Log level set to {:?}", log_level);

    // Load config
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        Config::new()
    });

    // Merge config with CLI args
    if let Some(url) = args.api_url {
        config.api_base_url = url;
    }
    if let Some(selector) = args.selector {
        config.selector = selector;
    }

    if args.init_config {
        let path = config.save()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let client = TvMazeClient::from_config(&config)?;
    info!("Using API at {}", client.base_url());

    if args.print {
        return run_print(client, config.selector, args.show, args.query).await;
    }

    let mut terminal = init_terminal()?;
    terminal.clear()?;

    let mut browser = Browser::new(client, Tui::new(terminal), config.selector);
    let result = run_app(&mut browser).await;

    // Restore terminal
    restore_terminal()?;

    result
}

/// Load, optionally open a show, filter and print once.
async fn run_print(
    client: TvMazeClient,
    selector: SelectorStyle,
    show: Option<ShowId>,
    query: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut browser = Browser::new(client, TextRenderer::new(stdout()), selector);

    browser.load_shows().await?;
    if let Some(id) = show {
        if !browser.status().is_failed() {
            browser.select_show(Some(id)).await?;
            if browser.state().selected_show().is_none() && !browser.status().is_failed() {
                warn!("No show with id {}", id);
            }
        }
    }
    if let Some(query) = query {
        if browser.state().selected_show().is_some() {
            browser.search_episodes(&query)?;
        } else {
            browser.search_shows(&query)?;
        }
    }

    let failed = browser.status().is_failed();
    let (_, renderer) = browser.into_parts();
    renderer.finish()?;

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Main TUI event loop. Every browser operation is awaited before the next
/// key is read, so responses always apply to the latest request.
async fn run_app(
    browser: &mut Browser<TvMazeClient, Tui<CrosstermBackend<io::Stdout>>>,
) -> Result<(), Box<dyn std::error::Error>> {
    browser.load_shows().await?;

    loop {
        let Some(event) = poll_event(Duration::from_millis(100))? else {
            continue;
        };

        let key = match event {
            Event::Key(key) => key,
            Event::Resize(_, _) => {
                browser.renderer_mut().redraw()?;
                continue;
            }
            _ => continue,
        };

        match browser.renderer_mut().handle_input(key) {
            Action::Quit => break,
            Action::None => browser.renderer_mut().redraw()?,
            Action::SearchShows(text) => browser.search_shows(&text)?,
            Action::SearchEpisodes(text) => browser.search_episodes(&text)?,
            Action::SelectShow(id) => browser.select_show(id).await?,
            Action::SelectEpisode(index) => browser.select_episode(index)?,
            Action::Back => browser.back()?,
            Action::Retry => browser.retry().await?,
            Action::DismissError => browser.dismiss_error()?,
        }
    }

    Ok(())
}
