//! Board state: the grid of squares, the two players, and the session
//! that applies pointer releases to them.
//!
//! Nothing in this module knows about terminals or pixels. The
//! [`Session`] consumes surface-local points (see [`crate::surface`]) and
//! the UI layer re-reads the [`Grid`] every frame to draw.

pub mod grid;
pub mod player;
pub mod session;

pub use grid::{Cell, Grid, Square};
pub use player::Player;
pub use session::{Placement, Session};
