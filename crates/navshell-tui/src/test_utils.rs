//! Test utilities for navshell-tui snapshot and integration testing.
//!
//! Helpers for building apps at a given terminal size and converting buffers
//! to strings for snapshot comparison.

use crate::app::App;
use navshell_core::{IconStyle, PlatformKind, ShellConfig};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Deterministic configuration: ASCII icons, default cell size.
pub fn test_config(platform: PlatformKind) -> ShellConfig {
    ShellConfig {
        platform,
        icons: IconStyle::Ascii,
        ..ShellConfig::default()
    }
}

/// Create a web-platform test app for a terminal of the given size.
pub fn create_test_app(columns: u16, rows: u16) -> App {
    create_test_app_on(columns, rows, PlatformKind::Web)
}

/// Create a test app on a specific platform.
pub fn create_test_app_on(columns: u16, rows: u16, platform: PlatformKind) -> App {
    App::new(test_config(platform), columns, rows).expect("Failed to create test app")
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// Trailing whitespace is trimmed from each line.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the app at its own terminal size and return it as a string.
pub fn render_app_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|frame| {
            let area = frame.area();
            app.render(area, frame.buffer_mut());
        })
        .expect("Failed to draw");
    buffer_to_string(terminal.backend().buffer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal_sized(80, 24);
        let size = terminal.size().unwrap();
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }

    #[test]
    fn test_render_app_to_string() {
        let app = create_test_app(120, 30);
        let rendered = render_app_to_string(&app, 120, 30);
        assert!(rendered.contains("navshell"));
        assert!(rendered.contains("Latest updates from the team"));
    }
}
