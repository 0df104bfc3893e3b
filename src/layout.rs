//! Tile grid geometry.
//!
//! The firmware never draws free-form text: the panel is split into a fixed
//! grid of tiles, centered on the screen, and every tile holds one 6×8 glyph
//! scaled by integer factors and centered inside it.

use serde::{Deserialize, Serialize};

use crate::glyph::{GLYPH_SRC_H, GLYPH_SRC_W};
use crate::{Error, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Canvas size, tile grid and glyph scale.
///
/// # Example
///
/// ```
/// use gc9307_preview::TileLayout;
///
/// let layout = TileLayout::NORMAL_UI;
/// assert_eq!(layout.x_offset(), 4);
/// assert_eq!(layout.y_offset(), 14);
/// assert_eq!(layout.glyph_origin(), (3, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayout {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Tile width in pixels
    pub tile_w: u32,
    /// Tile height in pixels
    pub tile_h: u32,
    /// Tiles per row
    pub tiles_x: u32,
    /// Rows of tiles
    pub tiles_y: u32,
    /// Horizontal glyph scale
    pub glyph_sx: u32,
    /// Vertical glyph scale
    pub glyph_sy: u32,
}

impl TileLayout {
    /// The 3×13 "normal UI": 24×48 tiles, glyphs scaled 3×4.
    pub const NORMAL_UI: Self = Self {
        width: DISPLAY_WIDTH,
        height: DISPLAY_HEIGHT,
        tile_w: 24,
        tile_h: 48,
        tiles_x: 13,
        tiles_y: 3,
        glyph_sx: 3,
        glyph_sy: 4,
    };

    /// The 3×20 compact toast overlay: 16×32 tiles, glyphs scaled 2×3.
    pub const COMPACT_TOAST: Self = Self {
        width: DISPLAY_WIDTH,
        height: DISPLAY_HEIGHT,
        tile_w: 16,
        tile_h: 32,
        tiles_x: 20,
        tiles_y: 3,
        glyph_sx: 2,
        glyph_sy: 3,
    };

    /// Look up a preset by name (`normal-ui` or `compact-toast`).
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "normal-ui" | "normal" => Some(Self::NORMAL_UI),
            "compact-toast" | "toast" => Some(Self::COMPACT_TOAST),
            _ => None,
        }
    }

    /// Check that the grid fits the canvas and the scaled glyph fits a tile.
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("tile_w", self.tile_w),
            ("tile_h", self.tile_h),
            ("tiles_x", self.tiles_x),
            ("tiles_y", self.tiles_y),
            ("glyph_sx", self.glyph_sx),
            ("glyph_sy", self.glyph_sy),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| *v == 0) {
            return Err(Error::InvalidLayout(format!("{name} must be non-zero")));
        }

        let grid_w = self.tile_w.checked_mul(self.tiles_x);
        let grid_h = self.tile_h.checked_mul(self.tiles_y);
        match (grid_w, grid_h) {
            (Some(w), Some(h)) if w <= self.width && h <= self.height => {}
            _ => {
                return Err(Error::InvalidLayout(format!(
                    "{}x{} tiles of {}x{} do not fit a {}x{} canvas",
                    self.tiles_x, self.tiles_y, self.tile_w, self.tile_h, self.width, self.height
                )))
            }
        }

        let glyph_w = GLYPH_SRC_W.checked_mul(self.glyph_sx);
        let glyph_h = GLYPH_SRC_H.checked_mul(self.glyph_sy);
        match (glyph_w, glyph_h) {
            (Some(w), Some(h)) if w <= self.tile_w && h <= self.tile_h => Ok(()),
            _ => Err(Error::InvalidLayout(format!(
                "glyph scaled {}x{} does not fit a {}x{} tile",
                self.glyph_sx, self.glyph_sy, self.tile_w, self.tile_h
            ))),
        }
    }

    /// Left edge of the tile grid.
    ///
    /// Zero when the grid is wider than the canvas.
    pub fn x_offset(&self) -> u32 {
        self.width.saturating_sub(self.tile_w.saturating_mul(self.tiles_x)) / 2
    }

    /// Top edge of the tile grid.
    ///
    /// Zero when the grid is taller than the canvas.
    pub fn y_offset(&self) -> u32 {
        self.height.saturating_sub(self.tile_h.saturating_mul(self.tiles_y)) / 2
    }

    /// Scaled glyph width.
    pub fn glyph_w(&self) -> u32 {
        GLYPH_SRC_W.saturating_mul(self.glyph_sx)
    }

    /// Scaled glyph height.
    pub fn glyph_h(&self) -> u32 {
        GLYPH_SRC_H.saturating_mul(self.glyph_sy)
    }

    /// Glyph position inside its tile.
    pub fn glyph_origin(&self) -> (u32, u32) {
        (
            self.tile_w.saturating_sub(self.glyph_w()) / 2,
            self.tile_h.saturating_sub(self.glyph_h()) / 2,
        )
    }

    /// Canvas position of the top-left pixel of the glyph in tile `(tile_x, tile_y)`.
    pub fn glyph_position(&self, tile_x: u32, tile_y: u32) -> (i64, i64) {
        let (gx0, gy0) = self.glyph_origin();
        (
            i64::from(self.x_offset()) + i64::from(tile_x) * i64::from(self.tile_w) + i64::from(gx0),
            i64::from(self.y_offset()) + i64::from(tile_y) * i64::from(self.tile_h) + i64::from(gy0),
        )
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::NORMAL_UI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_ui_geometry() {
        let layout = TileLayout::NORMAL_UI;
        layout.validate().unwrap();
        assert_eq!(layout.x_offset(), 4);
        assert_eq!(layout.y_offset(), 14);
        assert_eq!((layout.glyph_w(), layout.glyph_h()), (18, 32));
        assert_eq!(layout.glyph_origin(), (3, 8));
        assert_eq!(layout.glyph_position(0, 0), (7, 22));
        assert_eq!(layout.glyph_position(12, 2), (4 + 12 * 24 + 3, 14 + 2 * 48 + 8));
    }

    #[test]
    fn test_compact_toast_geometry() {
        let layout = TileLayout::COMPACT_TOAST;
        layout.validate().unwrap();
        assert_eq!(layout.x_offset(), 0);
        assert_eq!(layout.y_offset(), 38);
        assert_eq!(layout.glyph_origin(), (2, 4));
    }

    #[test]
    fn test_presets() {
        assert_eq!(TileLayout::preset("normal-ui"), Some(TileLayout::NORMAL_UI));
        assert_eq!(TileLayout::preset("Compact_Toast"), Some(TileLayout::COMPACT_TOAST));
        assert_eq!(TileLayout::preset("huge"), None);
    }

    #[test]
    fn test_validate_rejects_overflowing_grid() {
        let layout = TileLayout {
            tiles_x: 14,
            ..TileLayout::NORMAL_UI
        };
        assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));

        let layout = TileLayout {
            glyph_sx: 5,
            ..TileLayout::NORMAL_UI
        };
        assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));

        let layout = TileLayout {
            tile_h: 0,
            ..TileLayout::NORMAL_UI
        };
        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("tile_h"));
    }

    #[test]
    fn test_offsets_clamp_for_oversized_grid() {
        let layout = TileLayout {
            tiles_x: 20,
            tile_h: 80,
            ..TileLayout::NORMAL_UI
        };
        assert!(layout.validate().is_err());
        assert_eq!(layout.x_offset(), 0);
        assert_eq!(layout.y_offset(), 0);
        assert_eq!(layout.glyph_position(1, 1), (24 + 3, 80 + 24));

        // 18px glyph in a 4px tile
        let layout = TileLayout {
            tile_w: 4,
            ..TileLayout::NORMAL_UI
        };
        assert_eq!(layout.glyph_origin(), (0, 8));
    }
}
