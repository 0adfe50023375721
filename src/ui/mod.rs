//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into five layers:
//!
//! - **[`app`]** — application state and the keyboard/mouse event loop
//! - **[`panes`]** — stateless render functions for the board and status bar
//! - **[`renderer`]** — canvas drawing for separator lines, crosses, and noughts
//! - **[`input`]** — terminal mouse position to surface point mapping
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`BoundaryRule`] and call [`App::run`] to start the event loop.
//!
//! [`BoundaryRule`]: crate::surface::BoundaryRule
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod panes;
pub mod renderer;
pub mod theme;

pub use app::App;
