use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Stylize, style};

use crate::config::CELL_DELIMITER;
use crate::grid::{Cell, Grid};

/// Draws the board after every turn.
pub trait Renderer {
    fn render<W: Write>(&self, grid: &Grid, out: &mut W) -> io::Result<()>;
}

/// Plain glyph renderer: one row per line, cells separated by a space, and a
/// blank line after the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    /// Creates a renderer. With `color` set, glyphs carry ANSI styling.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn write_cell<W: Write>(&self, cell: Cell, out: &mut W) -> io::Result<()> {
        let glyph = cell.glyph();
        if !self.color {
            return write!(out, "{glyph}{CELL_DELIMITER}");
        }

        let styled = match cell {
            Cell::Empty => style(glyph).with(Color::DarkGrey),
            Cell::Body => style(glyph).with(Color::Blue),
            Cell::Food => style(glyph).with(Color::Red),
            _ => style(glyph)
                .with(Color::White)
                .attribute(Attribute::Bold),
        };
        write!(out, "{styled}{CELL_DELIMITER}")
    }
}

impl Renderer for TextRenderer {
    fn render<W: Write>(&self, grid: &Grid, out: &mut W) -> io::Result<()> {
        for row in grid.rows() {
            for cell in row {
                self.write_cell(*cell, out)?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
        out.flush()
    }
}

/// Renders `grid` without colour into a string.
#[must_use]
pub fn render_to_string(grid: &Grid) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = TextRenderer::new(false).render(grid, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::grid::{Cell, Grid};
    use crate::snake::Position;

    use super::{Renderer, TextRenderer, render_to_string};

    #[test]
    fn every_marker_maps_to_its_glyph() {
        let mut grid = Grid::new(GridSize { rows: 2, cols: 4 });
        grid.set(Position::new(0, 0), Cell::Body);
        grid.set(Position::new(0, 1), Cell::HeadUp);
        grid.set(Position::new(0, 2), Cell::HeadDown);
        grid.set(Position::new(0, 3), Cell::HeadLeft);
        grid.set(Position::new(1, 0), Cell::HeadRight);
        grid.set(Position::new(1, 1), Cell::Food);

        assert_eq!(render_to_string(&grid), ". ^ v < \n> X ■ ■ \n\n");
    }

    #[test]
    fn colored_output_keeps_glyphs_and_layout() {
        let mut grid = Grid::new(GridSize { rows: 1, cols: 2 });
        grid.set(Position::new(0, 0), Cell::HeadRight);
        grid.set(Position::new(0, 1), Cell::Food);
        let mut buffer = Vec::new();

        TextRenderer::new(true)
            .render(&grid, &mut buffer)
            .expect("rendering into memory succeeds");
        let output = String::from_utf8(buffer).expect("output is utf-8");

        assert!(output.contains('\u{1b}'));
        assert!(output.contains('>'));
        assert!(output.contains('X'));
        assert!(output.ends_with("\n\n"));
    }
}
