//! navshell-tui: Terminal host for the adaptive navigation shell
//!
//! This crate renders the shell's presentations with ratatui:
//! - Terminal size feeds the viewport monitor as samples
//! - Fixed sidebar, drawer with tab bar, and tab-bar-only chrome
//! - Three demo content screens (posts, members, profile)

mod app;
mod event;
mod layout;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use navshell_core;

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use navshell_core::ShellConfig;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::info;

/// Renderable node handed to the shell by every screen.
pub type Node = ratatui::text::Text<'static>;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit.
pub async fn run_tui(config: ShellConfig) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(config, size.width, size.height)?;
    info!(
        columns = size.width,
        rows = size.height,
        layout = ?app.shell.layout(),
        "TUI started"
    );

    let mut events = EventHandler::new(250);
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Tear down before restoring the terminal so no late sample arrives.
    app.shell.teardown();
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| {
                let area = frame.area();
                app.render(area, frame.buffer_mut());
            })?;
        }

        let Some(event) = events.next().await else {
            break;
        };
        match event {
            Event::Key(key) => app.handle_action(key_to_action(key))?,
            Event::Resize(columns, rows) => app.handle_resize(columns, rows),
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI exiting");
    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
