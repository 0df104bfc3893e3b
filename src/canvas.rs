//! RGB raster the previews are drawn into.

use crate::color::Rgb;
use crate::glyph::{glyph_6x8, is_on, GLYPH_SRC_H, GLYPH_SRC_W};
use crate::layout::TileLayout;
use crate::Error;

/// A `width × height` RGB buffer, three bytes per pixel, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with `bg`.
    pub fn new(width: u32, height: u32, bg: Rgb) -> Self {
        let pixels = width as usize * height as usize;
        let rgb = bg.to_bytes().repeat(pixels);
        Self { width, height, rgb }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.rgb
    }

    /// Take the raw RGB bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.rgb
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb::new(self.rgb[idx], self.rgb[idx + 1], self.rgb[idx + 2]))
    }

    /// Paint one pixel. Coordinates outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.rgb[idx..idx + 3].copy_from_slice(&color.to_bytes());
    }

    /// Rasterize `ch` into tile `(tile_x, tile_y)` of `layout`.
    ///
    /// Only lit glyph pixels are written; everything else keeps its color.
    /// The layout is not validated here: a grid or glyph that overflows the
    /// canvas is clipped at its edges.
    pub fn draw_char(&mut self, layout: &TileLayout, tile_x: u32, tile_y: u32, ch: char, fg: Rgb) {
        let (ox, oy) = layout.glyph_position(tile_x, tile_y);
        let sx = i64::from(layout.glyph_sx);
        let sy = i64::from(layout.glyph_sy);
        let glyph = glyph_6x8(ch);

        for src_y in 0..GLYPH_SRC_H {
            for src_x in 0..GLYPH_SRC_W {
                if !is_on(&glyph, src_x, src_y) {
                    continue;
                }
                for ry in 0..sy {
                    for rx in 0..sx {
                        self.set_pixel(
                            ox + i64::from(src_x) * sx + rx,
                            oy + i64::from(src_y) * sy + ry,
                            fg,
                        );
                    }
                }
            }
        }
    }

    /// Encode as an 8-bit truecolor PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, Error> {
        crate::png::encode_png_rgb(&self.rgb, self.width, self.height)
    }
}
