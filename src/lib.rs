//! # Introduction
//!
//! Gridmark is a mouse-driven tic-tac-toe marking board for the terminal.
//! Left-click releases place alternating crosses and noughts on a 3x3
//! grid drawn as a braille canvas with a terminal UI built on
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Placement pipeline
//!
//! ```text
//! Mouse release → Surface point → Cell match → Grid → Canvas
//! ```
//!
//! 1. [`ui::input`] — translates the terminal click position into a point
//!    on the logical playing surface.
//! 2. [`surface`] — the surface geometry: cell bounds, boundary rules,
//!    and point-to-cell resolution.
//! 3. [`board`] — the grid of squares, the alternating turn, and the
//!    [`board::Session`] that applies each pointer release.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Rules of the board
//!
//! There is no referee: marks alternate strictly with each release,
//! occupied cells are overwritten, and nobody wins. A release on a shared
//! cell edge can mark every adjacent cell when the legacy boundary rule
//! is enabled.

pub mod board;
pub mod surface;
pub mod ui;
