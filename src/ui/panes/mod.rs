//! TUI pane rendering modules
//!
//! This module provides the rendering logic for the visible panes,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`board`]: The playing surface, drawn as a braille canvas with
//!   separator lines and the placed marks
//! - [`status`]: Status bar with the next mark, the last event, and
//!   keybindings
//!
//! Each pane module exports a primary `render_*` function taking the
//! frame and the area to draw into.

pub mod board;
pub mod status;

// Re-export render functions for convenience
pub use board::render_board_pane;
pub use status::render_status_bar;
