//! Maps terminal mouse coordinates into surface-local points.

use ratatui::layout::{Position, Rect};

use crate::surface::{SurfaceGeometry, SurfacePoint};

/// Converts a terminal mouse position into a surface-local point.
///
/// `surface_area` is the terminal rectangle the board canvas was last
/// rendered into. Positions outside it, and degenerate areas, map to
/// `None`. A position inside maps to the center of its terminal cell in
/// surface units, so a click resolves to the board cell rendered under
/// the cursor.
pub fn to_surface_local(
    column: u16,
    row: u16,
    surface_area: Rect,
    geometry: &SurfaceGeometry,
) -> Option<SurfacePoint> {
    if surface_area.width == 0 || surface_area.height == 0 {
        return None;
    }
    if !surface_area.contains(Position::new(column, row)) {
        return None;
    }

    let local_x = (column - surface_area.x) as f64 + 0.5;
    let local_y = (row - surface_area.y) as f64 + 0.5;

    Some(SurfacePoint::new(
        local_x * geometry.side() / surface_area.width as f64,
        local_y * geometry.side() / surface_area.height as f64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn area() -> Rect {
        Rect::new(2, 1, 30, 15)
    }

    #[test]
    fn test_position_outside_the_area_maps_to_none() {
        let geometry = SurfaceGeometry::default();
        for (column, row) in [(0, 0), (1, 5), (32, 5), (10, 0), (10, 16)] {
            assert_eq!(to_surface_local(column, row, area(), &geometry), None);
        }
    }

    #[test]
    fn test_degenerate_area_maps_to_none() {
        let geometry = SurfaceGeometry::default();
        assert_eq!(
            to_surface_local(0, 0, Rect::new(0, 0, 0, 5), &geometry),
            None
        );
        assert_eq!(
            to_surface_local(0, 0, Rect::new(0, 0, 5, 0), &geometry),
            None
        );
    }

    #[test]
    fn test_first_terminal_cell_lands_in_the_first_board_cell() {
        let geometry = SurfaceGeometry::default();
        let point = to_surface_local(2, 1, area(), &geometry).unwrap();
        assert_eq!(geometry.cell_at(point), Some(Cell::new(0, 0)));
    }

    #[test]
    fn test_center_terminal_cell_lands_in_the_center_board_cell() {
        let geometry = SurfaceGeometry::default();
        let point = to_surface_local(17, 8, area(), &geometry).unwrap();
        assert_eq!(geometry.cell_at(point), Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_last_terminal_cell_lands_in_the_last_board_cell() {
        let geometry = SurfaceGeometry::default();
        let point = to_surface_local(31, 15, area(), &geometry).unwrap();
        assert_eq!(geometry.cell_at(point), Some(Cell::new(2, 2)));
    }

    #[test]
    fn test_mapped_points_stay_inside_the_surface() {
        let geometry = SurfaceGeometry::default();
        let rect = area();
        for column in rect.x..rect.x + rect.width {
            for row in rect.y..rect.y + rect.height {
                let point = to_surface_local(column, row, rect, &geometry).unwrap();
                assert!(point.x > 0.0 && point.x < geometry.side());
                assert!(point.y > 0.0 && point.y < geometry.side());
            }
        }
    }
}
