//! The firmware's "normal UI": three rows (V / A / W) by two columns
//! (USB-A left, USB-C right).
//!
//! Values are formatted exactly as the firmware does so previews can be built
//! from measurements rather than hand-typed strings.
//!
//! # Example
//!
//! ```
//! use gc9307_preview::normal_ui::{NormalUiField, NormalUiPort, NormalUiSnapshot};
//!
//! let snapshot = NormalUiSnapshot {
//!     usb_a: NormalUiPort::present(5_000_000, 500_000, 2_500_000),
//!     usb_c: NormalUiPort::not_present(),
//! };
//! let lines = snapshot.lines().unwrap();
//! let row0: String = lines[0].iter().map(|c| c.ch).collect();
//! assert_eq!(row0, "5.000V --.--V");
//! ```

use crate::color::{self, Rgb};
use crate::frame::{line_2col, Line};
use crate::Error;

/// One measurement as reported to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalUiField {
    /// Value in micro-units (µV, µA or µW)
    Ok(u32),
    /// The sensor read failed
    Err,
}

/// One column of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalUiPort {
    pub present: bool,
    pub voltage_uv: NormalUiField,
    pub current_ua: NormalUiField,
    pub power_uw: NormalUiField,
}

impl NormalUiPort {
    /// A connected port with valid readings.
    pub const fn present(voltage_uv: u32, current_ua: u32, power_uw: u32) -> Self {
        Self {
            present: true,
            voltage_uv: NormalUiField::Ok(voltage_uv),
            current_ua: NormalUiField::Ok(current_ua),
            power_uw: NormalUiField::Ok(power_uw),
        }
    }

    /// A disconnected port; readings are ignored.
    pub const fn not_present() -> Self {
        Self {
            present: false,
            voltage_uv: NormalUiField::Ok(0),
            current_ua: NormalUiField::Ok(0),
            power_uw: NormalUiField::Ok(0),
        }
    }
}

/// Both columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalUiSnapshot {
    /// Left column
    pub usb_a: NormalUiPort,
    /// Right column
    pub usb_c: NormalUiPort,
}

impl NormalUiSnapshot {
    /// The three rows, ready for [`crate::frame::render`] with
    /// [`crate::TileLayout::NORMAL_UI`].
    pub fn lines(&self) -> Result<Vec<Line>, Error> {
        let rows = [
            ('V', color::OK_VOLTAGE, self.usb_a.voltage_uv, self.usb_c.voltage_uv),
            ('A', color::OK_CURRENT, self.usb_a.current_ua, self.usb_c.current_ua),
            ('W', color::OK_POWER, self.usb_a.power_uw, self.usb_c.power_uw),
        ];

        rows.into_iter()
            .map(|(unit, ok, left, right)| {
                let (ls, lfg) = format_cell(self.usb_a.present, left, unit, ok);
                let (rs, rfg) = format_cell(self.usb_c.present, right, unit, ok);
                line_2col(&ls, &rs, lfg, rfg)
            })
            .collect()
    }
}

/// Returned by [`format_ok_value_6`] when a value needs more than six tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Over;

/// Format a micro-unit value into six characters including `unit`.
///
/// Picks the first of `D.ddd`, `DD.dd`, `DDD.d` that fits, rounding half up
/// at each precision.
pub fn format_ok_value_6(micros: u32, unit: char) -> Result<String, Over> {
    let micros = u64::from(micros);

    let milli = (micros + 500) / 1_000;
    if milli < 10_000 {
        return Ok(format!("{}.{:03}{unit}", milli / 1_000, milli % 1_000));
    }

    let centi = (micros + 5_000) / 10_000;
    if centi < 10_000 {
        return Ok(format!("{:02}.{:02}{unit}", centi / 100, centi % 100));
    }

    let deci = (micros + 50_000) / 100_000;
    if deci < 10_000 {
        return Ok(format!("{:03}.{}{unit}", deci / 10, deci % 10));
    }

    Err(Over)
}

/// Text and color for one cell.
pub fn format_cell(present: bool, value: NormalUiField, unit: char, ok_color: Rgb) -> (String, Rgb) {
    if !present {
        return (format!("--.--{unit}"), color::NOT_PRESENT);
    }
    match value {
        NormalUiField::Err => ("ERROR ".to_string(), color::ERROR),
        NormalUiField::Ok(micros) => match format_ok_value_6(micros, unit) {
            Ok(s) => (s, ok_color),
            Err(Over) => ("OVER  ".to_string(), color::OVER),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ok_value_precisions() {
        assert_eq!(format_ok_value_6(5_000_000, 'V').unwrap(), "5.000V");
        assert_eq!(format_ok_value_6(500_000, 'A').unwrap(), "0.500A");
        assert_eq!(format_ok_value_6(3_250_000, 'A').unwrap(), "3.250A");
        assert_eq!(format_ok_value_6(20_000_000, 'V').unwrap(), "20.00V");
        assert_eq!(format_ok_value_6(100_000_000, 'W').unwrap(), "100.0W");
        assert_eq!(format_ok_value_6(0, 'W').unwrap(), "0.000W");
    }

    #[test]
    fn test_format_ok_value_rounding_boundaries() {
        // 9.9995 rounds to 10.000 which no longer fits D.ddd
        assert_eq!(format_ok_value_6(9_999_500, 'V').unwrap(), "10.00V");
        assert_eq!(format_ok_value_6(9_999_499, 'V').unwrap(), "9.999V");
        assert_eq!(format_ok_value_6(99_995_000, 'W').unwrap(), "100.0W");
        assert_eq!(format_ok_value_6(999_949_999, 'W').unwrap(), "999.9W");
        assert_eq!(format_ok_value_6(999_950_000, 'W'), Err(Over));
        assert_eq!(format_ok_value_6(u32::MAX, 'W'), Err(Over));
    }

    #[test]
    fn test_format_cell_status() {
        let ok = color::OK_CURRENT;
        assert_eq!(
            format_cell(false, NormalUiField::Ok(1), 'A', ok),
            ("--.--A".to_string(), color::NOT_PRESENT)
        );
        assert_eq!(
            format_cell(true, NormalUiField::Err, 'A', ok),
            ("ERROR ".to_string(), color::ERROR)
        );
        assert_eq!(
            format_cell(true, NormalUiField::Ok(u32::MAX), 'A', ok),
            ("OVER  ".to_string(), color::OVER)
        );
        assert_eq!(
            format_cell(true, NormalUiField::Ok(500_000), 'A', ok),
            ("0.500A".to_string(), ok)
        );
    }

    #[test]
    fn test_snapshot_lines() {
        let snapshot = NormalUiSnapshot {
            usb_a: NormalUiPort {
                voltage_uv: NormalUiField::Err,
                ..NormalUiPort::present(5_000_000, 500_000, 2_500_000)
            },
            usb_c: NormalUiPort::present(20_000_000, 3_250_000, 100_000_000),
        };
        let lines = snapshot.lines().unwrap();
        let text: Vec<String> = lines
            .iter()
            .map(|line| line.iter().map(|c| c.ch).collect())
            .collect();
        assert_eq!(text, ["ERROR  20.00V", "0.500A 3.250A", "2.500W 100.0W"]);
        assert_eq!(lines[0][0].fg, color::ERROR);
        assert_eq!(lines[0][7].fg, color::OK_VOLTAGE);
        assert_eq!(lines[2][12].fg, color::OK_POWER);
    }
}
