//! Interactive terminal dashboard.
//!
//! Holds the full survey in memory and redraws metric cards, charts, and
//! the record table on every disorder-filter toggle. Terminal state is
//! restored on drop, including on panic unwind.

pub mod app;
pub mod renderer;
pub mod theme;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::core::Dataset;
use crate::filter::DisorderFilter;
use app::App;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TuiManager {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| renderer::render(frame, app))?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Run the dashboard until the user quits.
pub fn run_dashboard(
    source: PathBuf,
    dataset: Dataset,
    filter: DisorderFilter,
    config: DashboardConfig,
) -> anyhow::Result<()> {
    let mut app = App::new(source, dataset, filter, config)?;
    let mut tui = TuiManager::new()?;

    while !app.should_quit() {
        tui.draw(&app)?;
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code)?;
                }
            }
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) -> anyhow::Result<()> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected()?,
        KeyCode::PageDown => app.scroll_table_down(),
        KeyCode::PageUp => app.scroll_table_up(),
        _ => {}
    }
    Ok(())
}
