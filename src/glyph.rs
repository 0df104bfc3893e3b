//! The firmware's 6×8 bitmap font.
//!
//! Each glyph is eight row bitmasks, top row first. Within a row, bit 5 is the
//! leftmost pixel. The bottom row is always blank so adjacent tiles keep a
//! visual gap.

/// Source glyph width in pixels.
pub const GLYPH_SRC_W: u32 = 6;

/// Source glyph height in pixels.
pub const GLYPH_SRC_H: u32 = 8;

/// A single glyph, one bitmask per source row.
pub type Glyph = [u8; GLYPH_SRC_H as usize];

const QUESTION: Glyph = [
    0b011110, 0b110011, 0b000011, 0b000110, 0b001100, 0, 0b001100, 0,
];

/// Look up the glyph for `ch`.
///
/// Characters outside the table (including lowercase letters) render as `?`,
/// the same fallback the firmware uses.
///
/// # Example
///
/// ```
/// use gc9307_preview::glyph::glyph_6x8;
///
/// assert_eq!(glyph_6x8('-'), [0, 0, 0, 0b111111, 0, 0, 0, 0]);
/// assert_eq!(glyph_6x8('a'), glyph_6x8('?'));
/// ```
#[rustfmt::skip]
pub fn glyph_6x8(ch: char) -> Glyph {
    match ch {
        '0' => [0b011110, 0b110011, 0b110111, 0b111011, 0b110011, 0b110011, 0b011110, 0],
        '1' => [0b001100, 0b011100, 0b001100, 0b001100, 0b001100, 0b001100, 0b111111, 0],
        '2' => [0b011110, 0b110011, 0b000011, 0b000110, 0b001100, 0b011000, 0b111111, 0],
        '3' => [0b011110, 0b110011, 0b000011, 0b001110, 0b000011, 0b110011, 0b011110, 0],
        '4' => [0b000110, 0b001110, 0b011110, 0b110110, 0b111111, 0b000110, 0b000110, 0],
        '5' => [0b111111, 0b110000, 0b111110, 0b000011, 0b000011, 0b110011, 0b011110, 0],
        '6' => [0b011110, 0b110011, 0b110000, 0b111110, 0b110011, 0b110011, 0b011110, 0],
        '7' => [0b111111, 0b000011, 0b000110, 0b001100, 0b011000, 0b011000, 0b011000, 0],
        '8' => [0b011110, 0b110011, 0b110011, 0b011110, 0b110011, 0b110011, 0b011110, 0],
        '9' => [0b011110, 0b110011, 0b110011, 0b011111, 0b000011, 0b110011, 0b011110, 0],

        '.' => [0, 0, 0, 0, 0, 0, 0b001100, 0],
        ':' => [0, 0b001100, 0b001100, 0, 0b001100, 0b001100, 0, 0],
        '-' => [0, 0, 0, 0b111111, 0, 0, 0, 0],
        '/' => [0b000011, 0b000110, 0b001100, 0b011000, 0b110000, 0, 0, 0],
        '_' => [0, 0, 0, 0, 0, 0, 0b111111, 0],
        ' ' => [0; 8],

        'A' => [0b011110, 0b110011, 0b110011, 0b111111, 0b110011, 0b110011, 0b110011, 0],
        'B' => [0b111110, 0b110011, 0b110011, 0b111110, 0b110011, 0b110011, 0b111110, 0],
        'C' => [0b011110, 0b110011, 0b110000, 0b110000, 0b110000, 0b110011, 0b011110, 0],
        'D' => [0b111100, 0b110110, 0b110011, 0b110011, 0b110011, 0b110110, 0b111100, 0],
        'E' => [0b111111, 0b110000, 0b110000, 0b111110, 0b110000, 0b110000, 0b111111, 0],
        'F' => [0b111111, 0b110000, 0b110000, 0b111110, 0b110000, 0b110000, 0b110000, 0],
        'G' => [0b011110, 0b110011, 0b110000, 0b110111, 0b110011, 0b110011, 0b011110, 0],
        'H' => [0b110011, 0b110011, 0b110011, 0b111111, 0b110011, 0b110011, 0b110011, 0],
        'I' => [0b111111, 0b001100, 0b001100, 0b001100, 0b001100, 0b001100, 0b111111, 0],
        'J' => [0b111111, 0b001100, 0b001100, 0b001100, 0b001100, 0b110011, 0b011110, 0],
        'K' => [0b110011, 0b110110, 0b111100, 0b111000, 0b111100, 0b110110, 0b110011, 0],
        'L' => [0b110000, 0b110000, 0b110000, 0b110000, 0b110000, 0b110000, 0b111111, 0],
        'M' => [0b110011, 0b111111, 0b111111, 0b110011, 0b110011, 0b110011, 0b110011, 0],
        'N' => [0b110011, 0b111011, 0b111011, 0b110111, 0b110111, 0b110011, 0b110011, 0],
        'O' => [0b011110, 0b110011, 0b110011, 0b110011, 0b110011, 0b110011, 0b011110, 0],
        'P' => [0b111110, 0b110011, 0b110011, 0b111110, 0b110000, 0b110000, 0b110000, 0],
        'Q' => [0b011110, 0b110011, 0b110011, 0b110011, 0b110011, 0b110111, 0b011111, 0],
        'R' => [0b111110, 0b110011, 0b110011, 0b111110, 0b110110, 0b110011, 0b110011, 0],
        'S' => [0b011111, 0b110000, 0b110000, 0b011110, 0b000011, 0b000011, 0b111110, 0],
        'T' => [0b111111, 0b001100, 0b001100, 0b001100, 0b001100, 0b001100, 0b001100, 0],
        'U' => [0b110011, 0b110011, 0b110011, 0b110011, 0b110011, 0b110011, 0b011110, 0],
        'V' => [0b110011, 0b110011, 0b110011, 0b110011, 0b110011, 0b011110, 0b001100, 0],
        'W' => [0b110011, 0b110011, 0b110011, 0b110011, 0b110011, 0b110111, 0b011110, 0],
        'X' => [0b110011, 0b011110, 0b001100, 0b001100, 0b001100, 0b011110, 0b110011, 0],
        'Y' => [0b110011, 0b110011, 0b011110, 0b001100, 0b001100, 0b001100, 0b001100, 0],
        'Z' => [0b111111, 0b000011, 0b000110, 0b001100, 0b011000, 0b110000, 0b111111, 0],

        _ => QUESTION,
    }
}

/// Whether source pixel `(x, y)` of `glyph` is lit.
pub fn is_on(glyph: &Glyph, x: u32, y: u32) -> bool {
    glyph
        .get(y as usize)
        .is_some_and(|row| x < GLYPH_SRC_W && row & (1 << (GLYPH_SRC_W - 1 - x)) != 0)
}
