//! Terminal browser for the portfolio pages

pub mod app;
pub mod mode;
pub mod ui;
pub mod viewport;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{FolioConfig, Page, Site};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};

pub use app::App;
pub use mode::{AppMode, Pane};
pub use ui::UI;
pub use viewport::Viewport;

/// Run the interactive browser starting at `page` until the user quits
pub fn run_browser(config: FolioConfig, page: &'static Page) -> Result<()> {
    let mut app = App::new(Site::new(), config, page);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut ui = UI::new();
    let res = run_event_loop(&mut terminal, &mut app, &mut ui);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ui: &mut UI,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui.render(f, app))?;

        // The short poll also drives the loading gauge
        if let Some(Event::Key(key)) = App::poll_event(Duration::from_millis(100))? {
            if key.kind == KeyEventKind::Press {
                app.handle_key_event(key)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
