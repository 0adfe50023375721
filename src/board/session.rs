//! A marking session: the grid, whose turn it is, and the geometry used
//! to resolve pointer positions into cells.

use tracing::debug;

use crate::board::{Cell, Grid, Player, Square};
use crate::surface::{BoundaryRule, SurfaceGeometry, SurfacePoint};

/// The outcome of one pointer release: which mark was played and which
/// cells received it. `cells` is empty when the release landed outside
/// every cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub mark: Player,
    pub cells: Vec<Cell>,
}

/// Tracks one game of placing alternating marks on the grid.
///
/// The session does not judge legality: releasing over an occupied cell
/// overwrites it, and no win or draw detection runs.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    turn: Player,
    geometry: SurfaceGeometry,
    edges: BoundaryRule,
}

impl Session {
    /// A fresh session over the default surface geometry.
    pub fn new(edges: BoundaryRule) -> Self {
        Session::with_geometry(SurfaceGeometry::default(), edges)
    }

    /// A fresh session over a custom geometry.
    pub fn with_geometry(geometry: SurfaceGeometry, edges: BoundaryRule) -> Self {
        let cells_per_side = geometry.cells_per_side();
        Session {
            grid: Grid::new(cells_per_side, Square::Empty),
            // The turn flips before each placement resolves, so the
            // opening release places a cross.
            turn: Player::O,
            geometry,
            edges,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The mark most recently played, or the pre-game value before any
    /// release. The next release plays `turn().other()`.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    pub fn edges(&self) -> BoundaryRule {
        self.edges
    }

    /// Handles a pointer release at `point` (surface units).
    ///
    /// The turn flips first, then every cell matching `point` under the
    /// session's boundary rule receives the new mark. The flip happens
    /// even when the release matches no cell, so a wasted click still
    /// passes the turn.
    pub fn pointer_release(&mut self, point: SurfacePoint) -> Placement {
        self.turn = self.turn.other();
        let cells = self.geometry.cells_at(point, self.edges);
        for &cell in &cells {
            self.grid.place(cell, self.turn);
        }
        debug!(mark = %self.turn, cells = ?cells, "placement resolved");
        Placement {
            mark: self.turn,
            cells,
        }
    }
}
