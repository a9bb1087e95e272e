// render.rs - Draws a grid onto an explicitly supplied painter

use conway::{Cell, Grid};
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// Colours used to draw the grid.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
    pub lines: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color32::from_rgb(200, 200, 200),
            dead: Color32::from_rgb(0, 0, 0),
            lines: Color32::from_rgb(40, 40, 40),
        }
    }
}

impl Palette {
    pub fn colour_of(&self, cell: Cell) -> Color32 {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }
}

/// Screen rectangle covered by cell `(x, y)`.
pub fn cell_rect(origin: Pos2, cell_size: f32, x: usize, y: usize) -> Rect {
    Rect::from_min_size(
        origin + Vec2::new(x as f32 * cell_size, y as f32 * cell_size),
        Vec2::splat(cell_size),
    )
}

/// Cell under the screen position `pos`, if any.
pub fn cell_at(origin: Pos2, cell_size: f32, grid: &Grid, pos: Pos2) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let (x, y) = ((offset.x / cell_size) as usize, (offset.y / cell_size) as usize);
    grid.contains(x, y).then_some((x, y))
}

/// Fills every cell with its state's colour, then draws the grid lines.
pub fn draw_grid(painter: &Painter, origin: Pos2, cell_size: f32, grid: &Grid, palette: &Palette) {
    for (x, y, cell) in grid.iter() {
        painter.rect_filled(cell_rect(origin, cell_size, x, y), 0.0, palette.colour_of(cell));
    }

    let width = grid.width() as f32 * cell_size;
    let height = grid.height() as f32 * cell_size;
    let stroke = Stroke::new(1.0, palette.lines);

    // Vertical lines
    for x in 0..grid.width() {
        let left = origin.x + x as f32 * cell_size;
        painter.line_segment([Pos2::new(left, origin.y), Pos2::new(left, origin.y + height)], stroke);
    }
    // Horizontal lines
    for y in 0..grid.height() {
        let top = origin.y + y as f32 * cell_size;
        painter.line_segment([Pos2::new(origin.x, top), Pos2::new(origin.x + width, top)], stroke);
    }
}
