//! Draws board content onto a ratatui canvas: separator lines, cell
//! clears, and the cross and nought glyphs.
//!
//! All public operations take surface coordinates (top-left origin, y
//! growing downward). The canvas y axis grows upward, so every y value
//! passes through a single flip here and nowhere else.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Context, Line, Painter, Shape};

use crate::board::Cell;
use crate::surface::{SurfaceGeometry, CELLS_PER_SIDE, SURFACE_SIDE};
use crate::ui::theme::DEFAULT_THEME;

/// Width of the separator lines between cells, in reference surface units.
pub const GRID_LINE_THICKNESS: f64 = 10.0;

/// Cell side length the glyph offsets below were chosen for.
const REFERENCE_CELL_SIDE: f64 = SURFACE_SIDE / CELLS_PER_SIDE as f64;

// Separator lines start 4 units in from one surface edge and stop 5
// units short of the other.
const LINE_INSET_START: f64 = 4.0;
const LINE_INSET_END: f64 = 5.0;

/// Distance from a cell corner to the nearest arm tip of the cross.
const CROSS_INSET: f64 = 50.0;

/// Total margin left around the nought inside its cell.
const NOUGHT_MARGIN: f64 = 100.0;

/// Paints board content for one [`SurfaceGeometry`] onto a canvas
/// context.
pub struct BoardRenderer {
    geometry: SurfaceGeometry,
}

impl BoardRenderer {
    pub fn new(geometry: SurfaceGeometry) -> Self {
        BoardRenderer { geometry }
    }

    /// Draws the separator lines between cells, `thickness` reference
    /// units wide, in `color`.
    pub fn draw_grid_lines(&self, ctx: &mut Context, thickness: f64, color: Color) {
        let cell_side = self.geometry.cell_side();
        let scale = self.surface_scale();
        let start = LINE_INSET_START * scale;
        let end = self.geometry.side() - LINE_INSET_END * scale;

        for boundary in 1..self.geometry.cells_per_side() {
            let at = boundary as f64 * cell_side;
            for offset in stroke_offsets(thickness * scale) {
                // Horizontal separator.
                ctx.draw(&Line {
                    x1: start,
                    y1: self.flip(at + offset),
                    x2: end,
                    y2: self.flip(at + offset),
                    color,
                });
                // Vertical separator.
                ctx.draw(&Line {
                    x1: at + offset,
                    y1: self.flip(start),
                    x2: at + offset,
                    y2: self.flip(end),
                    color,
                });
            }
        }
    }

    /// Repaints the interior of `cell` with the surface background,
    /// erasing anything previously drawn there.
    pub fn clear_cell(&self, ctx: &mut Context, cell: Cell) {
        let side = self.geometry.side();
        let cell_side = self.geometry.cell_side();
        let origin = self.geometry.cell_origin(cell);

        // The far edge of the last cell can land a hair past `side` in
        // floating point, and out-of-bounds points are not paintable.
        let left = origin.x.clamp(0.0, side);
        let right = (origin.x + cell_side).clamp(0.0, side);
        let top = origin.y.clamp(0.0, side);
        let bottom = (origin.y + cell_side).clamp(0.0, side);

        ctx.draw(&FilledRect {
            x: left,
            y: self.flip(bottom),
            width: right - left,
            height: bottom - top,
            color: DEFAULT_THEME.surface_bg,
        });
    }

    /// Draws a cross spanning `cell`, its arms inset from the corners.
    pub fn draw_cross(&self, ctx: &mut Context, cell: Cell) {
        let cell_side = self.geometry.cell_side();
        let origin = self.geometry.cell_origin(cell);
        let inset = CROSS_INSET * self.glyph_scale();

        let left = origin.x + inset;
        let right = origin.x + cell_side - inset;
        let top = origin.y + inset;
        let bottom = origin.y + cell_side - inset;

        ctx.draw(&Line {
            x1: left,
            y1: self.flip(top),
            x2: right,
            y2: self.flip(bottom),
            color: DEFAULT_THEME.cross,
        });
        ctx.draw(&Line {
            x1: left,
            y1: self.flip(bottom),
            x2: right,
            y2: self.flip(top),
            color: DEFAULT_THEME.cross,
        });
    }

    /// Draws a nought centered in `cell`.
    pub fn draw_nought(&self, ctx: &mut Context, cell: Cell) {
        let cell_side = self.geometry.cell_side();
        let center = self.geometry.cell_center(cell);
        let radius = (cell_side - NOUGHT_MARGIN * self.glyph_scale()) / 2.0;

        ctx.draw(&Circle {
            x: center.x,
            y: self.flip(center.y),
            radius,
            color: DEFAULT_THEME.nought,
        });
    }

    // Glyph offsets are fixed distances chosen for the reference cell
    // size; scaling keeps glyph proportions on other geometries.
    fn glyph_scale(&self) -> f64 {
        self.geometry.cell_side() / REFERENCE_CELL_SIDE
    }

    fn surface_scale(&self) -> f64 {
        self.geometry.side() / SURFACE_SIDE
    }

    fn flip(&self, y: f64) -> f64 {
        self.geometry.side() - y
    }
}

/// Perpendicular offsets for rendering a stroke of `thickness` units as
/// parallel unit-spaced lines centered on the stroke's axis.
fn stroke_offsets(thickness: f64) -> impl Iterator<Item = f64> {
    let strokes = thickness.round().max(1.0) as usize;
    let half = strokes as f64 / 2.0;
    (0..strokes).map(move |i| i as f64 + 0.5 - half)
}

/// An axis-aligned filled rectangle in canvas coordinates, anchored at
/// its lower-left corner.
struct FilledRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: Color,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let near = match painter.get_point(self.x, self.y) {
            Some(point) => point,
            None => return,
        };
        let far = match painter.get_point(self.x + self.width, self.y + self.height) {
            Some(point) => point,
            None => return,
        };

        // get_point inverts the y axis, so normalize both axes before
        // sweeping.
        let (x_min, x_max) = (near.0.min(far.0), near.0.max(far.0));
        let (y_min, y_max) = (near.1.min(far.1), near.1.max(far.1));

        for x in x_min..=x_max {
            for y in y_min..=y_max {
                painter.paint(x, y, self.color);
            }
        }
    }
}
