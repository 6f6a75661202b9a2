//! Interactive terminal UI.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::subscriber::NoSubscriber;

use ticklist_app::{TaskBook, TaskStore};

mod app;
mod handlers;
mod input;
mod palette;
mod ui;
mod view;
mod widgets;

use self::app::App;
use self::view::Ui;

const TICK_RATE_MS: u64 = 200;
const UI_MESSAGE_TTL_SECS: u64 = 4;

/// Launch the interactive TUI over the loaded task book.
pub fn run<S: TaskStore>(book: TaskBook<S>) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Log lines would tear the alternate screen, so tracing is silenced
    // while the event loop owns the terminal.
    let result = tracing::subscriber::with_default(NoSubscriber::default(), || {
        run_event_loop(&mut terminal, book)
    });

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_event_loop<S: TaskStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    book: TaskBook<S>,
) -> Result<()> {
    let mut ui = Ui::new(App::new(book));

    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    loop {
        terminal.draw(|f| ui.draw(f))?;
        if ui.should_quit {
            break;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();
        if event::poll(timeout)?
            && let CrosstermEvent::Key(key) = event::read()?
        {
            ui.handle_key(key)?;
        }

        if last_tick.elapsed() >= tick_rate {
            ui.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
