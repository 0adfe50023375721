//! Board pane: renders the playing surface as a braille canvas

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{canvas::Canvas, Block, Borders},
    Frame,
};

use crate::board::{Player, Session, Square};
use crate::ui::renderer::{BoardRenderer, GRID_LINE_THICKNESS};
use crate::ui::theme::DEFAULT_THEME;

/// Render the board pane, centered and roughly square within `area`.
///
/// Returns the terminal rectangle the surface itself occupies (the
/// canvas interior, inside the border), which mouse handling needs to
/// translate click positions.
pub fn render_board_pane(frame: &mut Frame, area: Rect, session: &Session) -> Rect {
    let board_area = square_area(area);

    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let surface_area = block.inner(board_area);

    let geometry = *session.geometry();
    let renderer = BoardRenderer::new(geometry);
    let side = geometry.side();

    let canvas = Canvas::default()
        .block(block)
        .background_color(DEFAULT_THEME.surface_bg)
        .marker(Marker::Braille)
        .x_bounds([0.0, side])
        .y_bounds([0.0, side])
        .paint(|ctx| {
            renderer.draw_grid_lines(ctx, GRID_LINE_THICKNESS, DEFAULT_THEME.grid_line);

            // Clears and glyphs go on separate layers so a glyph's
            // braille cells keep their own color instead of blending
            // with the clear underneath.
            ctx.layer();
            for (cell, square) in session.grid().cells() {
                if square != Square::Empty {
                    renderer.clear_cell(ctx, cell);
                }
            }

            ctx.layer();
            for (cell, square) in session.grid().cells() {
                if let Square::Marked(player) = square {
                    match player {
                        Player::X => renderer.draw_cross(ctx, cell),
                        Player::O => renderer.draw_nought(ctx, cell),
                    }
                }
            }
        });

    frame.render_widget(canvas, board_area);

    surface_area
}

/// A centered sub-rectangle of `area` that renders roughly square,
/// assuming terminal cells about twice as tall as they are wide.
fn square_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2).max(1);
    let width = (height * 2).min(area.width).max(1);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}
