use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use shelfseek::app::App;
use shelfseek::config::{Config, load_config};

/// Search books interactively and pick one
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial query to search for
    query: Option<String>,

    /// Debounce window in milliseconds before a fetch is issued
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Maximum number of results per fetch
    #[arg(long)]
    limit: Option<usize>,
}

/// How long the event loop waits before servicing timers and fetch responses
const TICK_INTERVAL: Duration = Duration::from_millis(25);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Args::parse();
    let config = effective_config(&args)?;

    let mut app = App::new(&config)?;
    if let Some(ref query) = args.query {
        app.prime_query(query, Instant::now());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    execute!(std::io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result?;

    if let Some(ref book) = app.selected {
        println!("{}", book.label());
    }

    Ok(())
}

fn effective_config(args: &Args) -> Result<Config> {
    let mut config = load_config()?;
    if let Some(delay_ms) = args.delay_ms {
        config.search.delay_ms = delay_ms;
    }
    if let Some(limit) = args.limit {
        config.search.result_limit = limit;
    }
    Ok(config)
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key, Instant::now());
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        // Debounce deadlines and fetch responses are serviced between events
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
