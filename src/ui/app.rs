//! Main TUI application state and logic

use crate::board::{Placement, Session};
use crate::surface::BoundaryRule;
use crate::ui::input::to_surface_local;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The marking session being played
    pub session: Session,

    /// Terminal rectangle the board surface occupied on the last render
    pub surface_area: Rect,

    /// Number of releases that placed at least one mark
    pub placements: u64,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app playing under the given boundary rule
    pub fn new(edges: BoundaryRule) -> Self {
        App {
            session: Session::new(edges),
            surface_area: Rect::default(),
            placements: 0,
            should_quit: false,
            status_message: String::from("Click a cell to place a mark"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so resizes repaint promptly
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) => {
                        if key.kind == KeyEventKind::Press {
                            self.handle_key_event(key);
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: board pane plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        self.surface_area = super::panes::render_board_pane(frame, main_chunks[0], &self.session);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.session.turn().other(),
            self.placements,
            self.session.edges(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Handle mouse events; only left-button releases place marks
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Up(MouseButton::Left) {
            return;
        }

        let point = match to_surface_local(
            mouse.column,
            mouse.row,
            self.surface_area,
            self.session.geometry(),
        ) {
            Some(point) => point,
            None => return,
        };

        let placement = self.session.pointer_release(point);
        self.apply_placement(&placement);
    }

    fn apply_placement(&mut self, placement: &Placement) {
        match placement.cells.as_slice() {
            [] => {
                self.status_message = format!("{} fell outside the board", placement.mark);
            }
            [cell] => {
                self.placements += 1;
                self.status_message = format!("{} placed at {}", placement.mark, cell);
            }
            cells => {
                self.placements += 1;
                self.status_message = format!(
                    "{} placed on {} cells (shared edge)",
                    placement.mark,
                    cells.len()
                );
            }
        }
    }
}
