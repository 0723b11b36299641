//! Application state and update logic for the navshell TUI.
//!
//! The terminal acts as the viewport: every resize becomes a sample pushed
//! through a [`ManualViewport`], and the shell decides the presentation.

use std::cell::Cell;
use std::rc::Rc;

use navshell_core::{
    ConfigurationError, ManualViewport, ShellConfig, ShellController, ShellError, SizeClass,
    Subscription, ViewportMonitor,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget},
};
use tracing::debug;

use crate::event::Action;
use crate::layout::{render_presentation, Chrome};
use crate::screens;
use crate::theme::{BorderSet, IconSet, Theme};
use crate::Node;

/// Main application state.
pub struct App {
    /// Marks the app dirty on every shell notification.
    _render_trigger: Subscription,
    /// The navigation shell.
    pub shell: ShellController<Node>,
    /// Viewport fed from terminal resizes.
    viewport: ViewportMonitor,
    source: ManualViewport,
    /// Host configuration.
    pub config: ShellConfig,
    /// Size class read by the directory screen.
    size_class: Rc<Cell<SizeClass>>,
    /// Theme colors.
    pub theme: Theme,
    /// Icon set based on config.
    pub icons: IconSet,
    /// Border set based on config.
    pub borders: BorderSet,
    /// Highlighted row while the drawer is open.
    pub drawer_cursor: usize,
    dirty: Rc<Cell<bool>>,
    /// Should the app quit?
    pub should_quit: bool,
}

impl App {
    /// Create the app for a terminal of `columns` x `rows` cells.
    pub fn new(config: ShellConfig, columns: u16, rows: u16) -> Result<Self, ConfigurationError> {
        let sample = config.sample_for_cells(columns, rows);
        let size_class = Rc::new(Cell::new(SizeClass::from_width(sample.width)));
        let source = ManualViewport::new(sample);
        let viewport = ViewportMonitor::new(source.clone());

        let theme = Theme::from_env();
        let icons = IconSet::new(config.icons);
        let borders = BorderSet::new(config.icons);

        let shell = ShellController::new(screens::registry(icons, &theme, &size_class), &viewport)?;

        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let render_trigger = shell.observe(move |_| flag.set(true));

        Ok(Self {
            _render_trigger: render_trigger,
            shell,
            viewport,
            source,
            config,
            size_class,
            theme,
            icons,
            borders,
            drawer_cursor: 0,
            dirty,
            should_quit: false,
        })
    }

    /// Current size class of the viewport.
    pub fn size_class(&self) -> SizeClass {
        self.size_class.get()
    }

    /// Number of viewport subscribers (the shell, while it is alive).
    pub fn viewport_subscribers(&self) -> usize {
        self.viewport.subscriber_count()
    }

    /// Handle terminal resize.
    pub fn handle_resize(&mut self, columns: u16, rows: u16) {
        let sample = self.config.sample_for_cells(columns, rows);
        self.size_class.set(SizeClass::from_width(sample.width));
        self.source.push(sample);
        self.dirty.set(true);
    }

    /// Handle a user action.
    ///
    /// Unknown screen positions are ignored; an unknown id from the shell is
    /// propagated.
    pub fn handle_action(&mut self, action: Action) -> Result<(), ShellError> {
        let drawer_open = self.shell.is_drawer_open();

        match action {
            Action::Quit => self.should_quit = true,
            Action::Back => {
                if drawer_open {
                    self.shell.dismiss_drawer();
                } else {
                    self.should_quit = true;
                }
            }
            Action::Menu => {
                self.drawer_cursor = self.shell.active_index();
                if !self.shell.toggle_drawer() {
                    debug!(layout = ?self.shell.layout(), "Menu ignored");
                }
            }
            Action::Tab(index) => match self.screen_id(index) {
                Some(id) if drawer_open => {
                    self.shell.select_from_drawer(&id)?;
                }
                Some(id) => {
                    self.shell.select_tab(&id)?;
                }
                None => debug!(index, "No screen at position"),
            },
            Action::NextTab => self.step(true)?,
            Action::PrevTab => self.step(false)?,
            Action::Down if drawer_open => self.move_cursor(true),
            Action::Up if drawer_open => self.move_cursor(false),
            Action::Select if drawer_open => {
                if let Some(id) = self.screen_id(self.drawer_cursor) {
                    self.shell.select_from_drawer(&id)?;
                }
            }
            Action::Up | Action::Down | Action::Select | Action::None => {}
        }

        Ok(())
    }

    /// Whether a redraw is pending; clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Render the current presentation.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let chrome = Chrome {
            theme: &self.theme,
            icons: &self.icons,
            borders: &self.borders,
            drawer_cursor: self.drawer_cursor,
        };

        buf.set_style(area, Style::default().bg(self.theme.canvas));

        match self.shell.compose() {
            Some(presentation) => render_presentation(&presentation, &chrome, area, buf),
            None => Paragraph::new("Initializing...")
                .style(Style::default().fg(self.theme.quiet))
                .render(area, buf),
        }
    }

    fn screen_id(&self, index: usize) -> Option<String> {
        self.shell
            .screens()
            .get(index)
            .map(|screen| screen.id().to_string())
    }

    /// Cycle the selection, or the drawer cursor while the drawer is open.
    fn step(&mut self, forward: bool) -> Result<(), ShellError> {
        if self.shell.is_drawer_open() {
            self.move_cursor(forward);
            return Ok(());
        }

        let next = wrap(self.shell.active_index(), self.shell.screens().len(), forward);
        if let Some(id) = self.screen_id(next) {
            self.shell.select_tab(&id)?;
        }
        Ok(())
    }

    fn move_cursor(&mut self, forward: bool) {
        self.drawer_cursor = wrap(self.drawer_cursor, self.shell.screens().len(), forward);
        self.dirty.set(true);
    }
}

fn wrap(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}
