//! Event handling for the navshell TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized (columns, rows).
    Resize(u16, u16),
}

/// Event handler that reads terminal events on a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler polling at the given interval.
    pub fn new(poll_interval_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // Spawn blocking thread for event polling (crossterm uses blocking I/O)
        std::thread::spawn(move || {
            let poll_interval = Duration::from_millis(poll_interval_ms);
            loop {
                if tx_clone.is_closed() {
                    break;
                }
                if !event::poll(poll_interval).unwrap_or(false) {
                    continue;
                }
                let Ok(evt) = event::read() else {
                    continue;
                };
                let event = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                    _ => None,
                };
                if let Some(e) = event {
                    if tx_clone.send(e).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, waiting until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// User action derived from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Back,
    Select,
    Up,
    Down,
    NextTab,
    PrevTab,
    Tab(usize),
    Menu,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('m') => Action::Menu,
        KeyCode::Esc => Action::Back,
        KeyCode::Enter => Action::Select,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Action::PrevTab
            } else {
                Action::NextTab
            }
        }
        KeyCode::BackTab => Action::PrevTab,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map_or(Action::None, |d| Action::Tab(d as usize - 1)),
        _ => Action::None,
    }
}
