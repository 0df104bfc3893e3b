//! Frame content: fixed-width text rows with per-character colors.
//!
//! A frame must fill the tile grid exactly. Row builders validate character
//! counts up front so a typo in a literal table fails loudly instead of
//! producing a shifted preview.

use crate::canvas::Canvas;
use crate::color::{Rgb, BLACK};
use crate::layout::TileLayout;
use crate::Error;

/// Width of one normal UI column cell (`5.000V`, `ERROR `, ...).
pub const CELL_WIDTH: usize = 6;

/// One tile: a character and its foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
}

impl Cell {
    /// A cell drawing `ch` in `fg`.
    pub const fn new(ch: char, fg: Rgb) -> Self {
        Self { ch, fg }
    }
}

/// One row of tiles.
pub type Line = Vec<Cell>;

/// A named frame, rendered to `<name>` inside an asset set's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Output file name (e.g. `gc9307-network-toast-connected.png`)
    pub name: String,
    /// Exactly `tiles_y` lines of `tiles_x` cells
    pub lines: Vec<Line>,
}

impl Frame {
    /// Wrap prebuilt lines; shape is checked when rendering.
    pub fn new(name: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Build a single-color frame from text rows.
    pub fn from_rows<S: AsRef<str>>(
        name: impl Into<String>,
        rows: &[S],
        fg: Rgb,
        layout: &TileLayout,
    ) -> Result<Self, Error> {
        let lines = rows
            .iter()
            .map(|row| line_text(row.as_ref(), fg, layout))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, lines))
    }

    /// Rasterize onto a fresh canvas.
    pub fn render(&self, layout: &TileLayout, bg: Rgb) -> Result<Canvas, Error> {
        render(layout, &self.lines, bg)
    }
}

/// A full-width row in a single color.
///
/// # Errors
///
/// [`Error::RowLength`] unless `text` has exactly `layout.tiles_x` characters.
pub fn line_text(text: &str, fg: Rgb, layout: &TileLayout) -> Result<Line, Error> {
    let got = text.chars().count();
    let expected = layout.tiles_x as usize;
    if got != expected {
        return Err(Error::RowLength {
            expected,
            got,
            text: text.to_string(),
        });
    }
    Ok(text.chars().map(|ch| Cell::new(ch, fg)).collect())
}

/// A normal UI row: `left(6) + ' ' + right(6)`.
///
/// The separator tile carries the background color, as in the firmware.
///
/// # Example
///
/// ```
/// use gc9307_preview::{color, frame::line_2col};
///
/// let line = line_2col("5.000V", "20.00V", color::OK_VOLTAGE, color::OK_VOLTAGE).unwrap();
/// assert_eq!(line.len(), 13);
/// assert_eq!(line[6].ch, ' ');
/// ```
pub fn line_2col(left: &str, right: &str, left_fg: Rgb, right_fg: Rgb) -> Result<Line, Error> {
    for cell in [left, right] {
        let got = cell.chars().count();
        if got != CELL_WIDTH {
            return Err(Error::CellLength {
                expected: CELL_WIDTH,
                got,
                text: cell.to_string(),
            });
        }
    }

    let mut out = Vec::with_capacity(CELL_WIDTH * 2 + 1);
    out.extend(left.chars().map(|ch| Cell::new(ch, left_fg)));
    out.push(Cell::new(' ', BLACK));
    out.extend(right.chars().map(|ch| Cell::new(ch, right_fg)));
    Ok(out)
}

/// Truncate to `width` characters, then right-pad with spaces.
pub fn pad(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Rasterize `lines` onto a `bg`-filled canvas.
///
/// # Errors
///
/// - [`Error::InvalidLayout`] if the grid does not fit the canvas
/// - [`Error::RowCount`] unless there are exactly `tiles_y` lines
/// - [`Error::RowLength`] unless every line has exactly `tiles_x` cells
pub fn render(layout: &TileLayout, lines: &[Line], bg: Rgb) -> Result<Canvas, Error> {
    layout.validate()?;

    let rows = layout.tiles_y as usize;
    let cols = layout.tiles_x as usize;
    if lines.len() != rows {
        return Err(Error::RowCount {
            expected: rows,
            got: lines.len(),
        });
    }
    if let Some(line) = lines.iter().find(|line| line.len() != cols) {
        return Err(Error::RowLength {
            expected: cols,
            got: line.len(),
            text: line.iter().map(|c| c.ch).collect(),
        });
    }

    let mut canvas = Canvas::new(layout.width, layout.height, bg);
    for (y, line) in lines.iter().enumerate() {
        for (x, cell) in line.iter().enumerate() {
            canvas.draw_char(layout, x as u32, y as u32, cell.ch, cell.fg);
        }
    }
    tracing::debug!(
        "Rendered {}x{} tiles onto {}x{} canvas",
        cols,
        rows,
        layout.width,
        layout.height
    );
    Ok(canvas)
}
