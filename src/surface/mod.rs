//! Surface geometry: the logical coordinate space of the drawable board
//! and the mapping from points in that space to grid cells.
//!
//! The surface is a square, `SURFACE_SIDE` units on each edge, with the
//! origin at the top-left corner and y growing downward. It is divided into
//! `CELLS_PER_SIDE` x `CELLS_PER_SIDE` equally sized cells. Everything here
//! is pure arithmetic; rendering and terminal coordinates live in
//! [`crate::ui`].

use crate::board::Cell;

/// Logical side length of the drawable surface, in surface units.
pub const SURFACE_SIDE: f64 = 700.0;

/// Number of cells along each axis of the grid.
///
/// `SURFACE_SIDE` must divide evenly into cells for the separator lines to
/// land on exact cell boundaries; this holds by configuration rather than
/// by any runtime check.
pub const CELLS_PER_SIDE: usize = 3;

/// A surface-local point, top-left origin, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    pub fn new(x: f64, y: f64) -> Self {
        SurfacePoint { x, y }
    }
}

/// How a cell's bounding box treats points on its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryRule {
    /// Lower bound inclusive, upper bound exclusive. A point matches at
    /// most one cell.
    #[default]
    HalfOpen,
    /// Both bounds inclusive. A point on a shared edge matches every
    /// adjacent cell (two on an edge, four on a corner), and every match
    /// is processed.
    InclusiveEdges,
}

/// Dimensions of the drawable surface and its grid subdivision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    side: f64,
    cells_per_side: usize,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        SurfaceGeometry::new(SURFACE_SIDE, CELLS_PER_SIDE)
    }
}

impl SurfaceGeometry {
    /// Geometry for a `side` x `side` surface split into `cells_per_side`
    /// cells per axis. `side` should divide evenly by `cells_per_side`.
    pub fn new(side: f64, cells_per_side: usize) -> Self {
        SurfaceGeometry {
            side,
            cells_per_side,
        }
    }

    /// Side length of the whole surface, in surface units.
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Number of cells along each axis.
    pub fn cells_per_side(&self) -> usize {
        self.cells_per_side
    }

    /// Side length of a single cell, in surface units.
    pub fn cell_side(&self) -> f64 {
        self.side / self.cells_per_side as f64
    }

    /// Top-left corner of `cell`, in surface units.
    pub fn cell_origin(&self, cell: Cell) -> SurfacePoint {
        let cell_side = self.cell_side();
        SurfacePoint::new(cell.col as f64 * cell_side, cell.row as f64 * cell_side)
    }

    /// Center of `cell`, in surface units.
    pub fn cell_center(&self, cell: Cell) -> SurfacePoint {
        let origin = self.cell_origin(cell);
        let half = self.cell_side() / 2.0;
        SurfacePoint::new(origin.x + half, origin.y + half)
    }

    /// Every cell whose bounding box contains `point` under `rule`,
    /// scanning all cells column by column.
    ///
    /// Under [`BoundaryRule::HalfOpen`] the result holds at most one cell.
    /// Under [`BoundaryRule::InclusiveEdges`] a point on a shared edge
    /// matches each adjacent cell. A point outside the surface matches
    /// nothing.
    pub fn cells_at(&self, point: SurfacePoint, rule: BoundaryRule) -> Vec<Cell> {
        let cell_side = self.cell_side();
        let mut matches = Vec::new();

        for col in 0..self.cells_per_side {
            for row in 0..self.cells_per_side {
                let x0 = col as f64 * cell_side;
                let y0 = row as f64 * cell_side;
                let hit = match rule {
                    BoundaryRule::HalfOpen => {
                        point.x >= x0
                            && point.x < x0 + cell_side
                            && point.y >= y0
                            && point.y < y0 + cell_side
                    }
                    BoundaryRule::InclusiveEdges => {
                        point.x >= x0
                            && point.x <= x0 + cell_side
                            && point.y >= y0
                            && point.y <= y0 + cell_side
                    }
                };
                if hit {
                    matches.push(Cell::new(col, row));
                }
            }
        }

        matches
    }

    /// The single cell containing `point` under the half-open rule, or
    /// `None` when the point is outside every cell.
    pub fn cell_at(&self, point: SurfacePoint) -> Option<Cell> {
        self.cells_at(point, BoundaryRule::HalfOpen).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_side_divides_surface() {
        let geometry = SurfaceGeometry::default();
        assert_eq!(geometry.cell_side(), SURFACE_SIDE / 3.0);
    }

    #[test]
    fn test_cell_origin_steps_by_cell_side() {
        let geometry = SurfaceGeometry::default();
        let cell_side = geometry.cell_side();

        let origin = geometry.cell_origin(Cell::new(2, 1));
        assert_eq!(origin.x, 2.0 * cell_side);
        assert_eq!(origin.y, cell_side);
    }

    #[test]
    fn test_near_corner_point_resolves_to_first_cell() {
        let geometry = SurfaceGeometry::default();
        assert_eq!(
            geometry.cell_at(SurfacePoint::new(10.0, 10.0)),
            Some(Cell::new(0, 0))
        );
    }

    #[test]
    fn test_point_in_second_column_resolves_there() {
        // 400 falls within [233.3.., 466.6..), the second column.
        let geometry = SurfaceGeometry::default();
        assert_eq!(
            geometry.cell_at(SurfacePoint::new(400.0, 50.0)),
            Some(Cell::new(1, 0))
        );
    }

    #[test]
    fn test_every_cell_center_resolves_to_its_own_cell() {
        let geometry = SurfaceGeometry::default();
        for col in 0..CELLS_PER_SIDE {
            for row in 0..CELLS_PER_SIDE {
                let cell = Cell::new(col, row);
                let center = geometry.cell_center(cell);
                for rule in [BoundaryRule::HalfOpen, BoundaryRule::InclusiveEdges] {
                    assert_eq!(
                        geometry.cells_at(center, rule),
                        vec![cell],
                        "center of {cell} under {rule:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_shared_edge_matches_two_cells_inclusive_one_half_open() {
        let geometry = SurfaceGeometry::default();
        let boundary = SurfacePoint::new(geometry.cell_side(), 10.0);

        assert_eq!(
            geometry.cells_at(boundary, BoundaryRule::InclusiveEdges),
            vec![Cell::new(0, 0), Cell::new(1, 0)]
        );
        assert_eq!(
            geometry.cells_at(boundary, BoundaryRule::HalfOpen),
            vec![Cell::new(1, 0)]
        );
    }

    #[test]
    fn test_shared_corner_matches_four_cells_inclusive() {
        let geometry = SurfaceGeometry::default();
        let corner = SurfacePoint::new(geometry.cell_side(), geometry.cell_side());

        assert_eq!(
            geometry.cells_at(corner, BoundaryRule::InclusiveEdges),
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
            ]
        );
        assert_eq!(
            geometry.cells_at(corner, BoundaryRule::HalfOpen),
            vec![Cell::new(1, 1)]
        );
    }

    #[test]
    fn test_point_outside_surface_matches_nothing() {
        let geometry = SurfaceGeometry::default();
        for point in [
            SurfacePoint::new(750.0, 10.0),
            SurfacePoint::new(10.0, -1.0),
            SurfacePoint::new(-0.5, 350.0),
        ] {
            assert_eq!(geometry.cells_at(point, BoundaryRule::HalfOpen), vec![]);
            assert_eq!(
                geometry.cells_at(point, BoundaryRule::InclusiveEdges),
                vec![]
            );
            assert_eq!(geometry.cell_at(point), None);
        }
    }

    #[test]
    fn test_far_edge_stays_inside_last_cell() {
        let geometry = SurfaceGeometry::default();
        let near_edge = SurfacePoint::new(699.5, 699.5);
        assert_eq!(geometry.cell_at(near_edge), Some(Cell::new(2, 2)));
    }
}
