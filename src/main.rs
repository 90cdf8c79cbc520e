//! FilmWise - terminal front-end for a movie and series catalog
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! filmwise
//!
//! # CLI mode
//! filmwise movies --genre drama
//! filmwise slides --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use filmwise::app::App;
use filmwise::cli::{Cli, Command, ExitCode, Output};
use filmwise::commands;
use filmwise::logging::{self, LogSink};
use filmwise::ui::pages::render_app;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        logging::init(LogSink::Stderr);
        let exit_code = run_cli(cli);
        std::process::exit(exit_code.into());
    } else {
        logging::init(LogSink::File);
        run_tui(cli).await
    }
}

/// Run CLI command and return exit code
fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);
    let config = cli.effective_config();
    let config_path = cli.config_path();

    match cli.command {
        Some(Command::Routes(cmd)) => commands::routes_cmd(cmd, &output),
        Some(Command::Movies(cmd)) => commands::movies_cmd(cmd, &output),
        Some(Command::Slides(cmd)) => commands::slides_cmd(cmd, &output),
        Some(Command::Config(cmd)) => commands::config_cmd(cmd, config, config_path, &output),
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(cli: Cli) -> Result<()> {
    let (config, problem) = cli.load_config();
    if let Some(ref e) = problem {
        log::warn!("{}", e);
    }
    log::info!("starting TUI on {}", config.start_route().path());

    let mut terminal = init_terminal()?;
    let mut app = App::from_config(&config, problem);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, applies timer events, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        terminal.draw(|frame| render_app(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.tick();

        // Let the carousel timer tasks run between polls
        tokio::task::yield_now().await;
    }

    Ok(())
}
