//! RGB colors and the palette shared by the firmware UI and the docs.
//!
//! Values are the 8-bit triples used in the design documents (for example
//! `#FFCA28` for the voltage row), not the RGB565 words the panel receives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// An 8-bit RGB triple.
///
/// Deserializes from either `"#RRGGBB"` or `[r, g, b]`.
///
/// # Example
///
/// ```
/// use gc9307_preview::Rgb;
///
/// let c: Rgb = "#FF9800".parse().unwrap();
/// assert_eq!(c, Rgb::new(255, 152, 0));
/// assert_eq!(c.to_string(), "#FF9800");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Bytes in buffer order.
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Panel background.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Port not present (`--.--V`).
pub const NOT_PRESENT: Rgb = Rgb::new(128, 128, 128);
/// Measurement error, rejected action.
pub const ERROR: Rgb = Rgb::new(255, 0, 0);
/// Value above the displayable range, power-off warning.
pub const OVER: Rgb = Rgb::new(255, 152, 0);

/// Voltage row, informational toasts (`#FFCA28`).
pub const OK_VOLTAGE: Rgb = Rgb::new(255, 202, 40);
/// Current row (`#F44336`).
pub const OK_CURRENT: Rgb = Rgb::new(244, 67, 54);
/// Power row, completed actions (`#4CAF50`).
pub const OK_POWER: Rgb = Rgb::new(76, 175, 80);

pub const INFO: Rgb = OK_VOLTAGE;
pub const OK: Rgb = OK_POWER;
pub const WARN: Rgb = OVER;

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(Error::Config(format!("invalid color {s:?}, expected #RRGGBB")));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| Error::Config(format!("invalid color {s:?}, expected #RRGGBB")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Triple([u8; 3]),
}

impl TryFrom<ColorRepr> for Rgb {
    type Error = Error;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(s) => s.parse(),
            ColorRepr::Triple([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#FFCA28".parse::<Rgb>().unwrap(), OK_VOLTAGE);
        assert_eq!("f44336".parse::<Rgb>().unwrap(), OK_CURRENT);
        assert!("#FFF".parse::<Rgb>().is_err());
        assert!("#GG0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_serde_forms() {
        let from_hex: Rgb = serde_json::from_str("\"#4CAF50\"").unwrap();
        let from_triple: Rgb = serde_json::from_str("[76, 175, 80]").unwrap();
        assert_eq!(from_hex, OK_POWER);
        assert_eq!(from_triple, OK_POWER);
        assert_eq!(serde_json::to_string(&OK_POWER).unwrap(), "\"#4CAF50\"");
    }

    #[test]
    fn test_palette_aliases() {
        assert_eq!(INFO, Rgb::new(255, 202, 40));
        assert_eq!(WARN, Rgb::new(255, 152, 0));
        assert_eq!(OK, Rgb::new(76, 175, 80));
    }
}
