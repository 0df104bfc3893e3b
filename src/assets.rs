//! Built-in documentation asset sets.
//!
//! Each set reproduces one design document's figures: a fixed output
//! directory (relative to the repository root), a tile layout and a literal
//! table of frames or buzzer patterns.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::{self, Rgb, BLACK};
use crate::frame::{pad, Frame};
use crate::layout::TileLayout;
use crate::normal_ui::{NormalUiField, NormalUiPort, NormalUiSnapshot};
use crate::render::{render_auditions, render_previews, GeneratedAsset, RenderConfig};
use crate::tones::{self, Pattern};
use crate::Error;

/// Normal UI previews for the display design doc.
pub const NORMAL_UI_DIR: &str = "docs/spec/images";

/// Network toast previews for the Wi-Fi / mDNS / HTTP plan.
pub const NETWORK_TOAST_DIR: &str = "docs/plan/0003:wifi-mdns-http/images";

/// Action toast previews for the USB replug / power-cut plan.
pub const ACTION_IMAGES_DIR: &str = "docs/plan/0002:usb-replug-power-cut/images";

/// Buzzer auditions for the USB replug / power-cut plan.
pub const ACTION_AUDIO_DIR: &str = "docs/plan/0002:usb-replug-power-cut/audio";

/// Frames sharing one layout and output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSet {
    /// Output directory, relative to [`RenderConfig::root`]
    pub out_dir: PathBuf,
    pub layout: TileLayout,
    pub background: Rgb,
    pub frames: Vec<Frame>,
}

/// Buzzer patterns written as `<name>.wav` into one directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditionSet {
    /// Output directory, relative to [`RenderConfig::root`]
    pub out_dir: PathBuf,
    pub patterns: Vec<Pattern>,
}

/// The named groups the command-line driver can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinSet {
    /// Normal UI previews
    NormalUi,
    /// Network toast previews
    NetworkToast,
    /// Action toast previews and action click auditions
    Actions,
    /// Firmware prompt tone auditions
    Tones,
}

impl BuiltinSet {
    pub const ALL: [BuiltinSet; 4] = [
        BuiltinSet::NormalUi,
        BuiltinSet::NetworkToast,
        BuiltinSet::Actions,
        BuiltinSet::Tones,
    ];

    /// Render every file in this group.
    pub fn generate(self, config: &RenderConfig) -> Result<Vec<GeneratedAsset>, Error> {
        tracing::info!("Generating {:?} assets", self);
        match self {
            BuiltinSet::NormalUi => render_previews(&normal_ui_previews()?, config),
            BuiltinSet::NetworkToast => render_previews(&network_toast_previews()?, config),
            BuiltinSet::Actions => {
                let mut out = render_previews(&action_previews()?, config)?;
                out.extend(render_auditions(&action_auditions(), config)?);
                Ok(out)
            }
            BuiltinSet::Tones => render_auditions(&prompt_auditions(), config),
        }
    }
}

/// Render every built-in group.
pub fn generate_all(config: &RenderConfig) -> Result<Vec<GeneratedAsset>, Error> {
    let mut out = Vec::new();
    for set in BuiltinSet::ALL {
        out.extend(set.generate(config)?);
    }
    Ok(out)
}

/// The three normal UI states shown in the display design doc.
pub fn normal_ui_previews() -> Result<PreviewSet, Error> {
    let normal = NormalUiSnapshot {
        usb_a: NormalUiPort::present(5_000_000, 500_000, 2_500_000),
        usb_c: NormalUiPort::present(20_000_000, 3_250_000, 100_000_000),
    };
    let not_present = NormalUiSnapshot {
        usb_a: NormalUiPort::not_present(),
        usb_c: NormalUiPort::not_present(),
    };
    let error_over = NormalUiSnapshot {
        usb_a: NormalUiPort {
            voltage_uv: NormalUiField::Err,
            ..normal.usb_a
        },
        usb_c: NormalUiPort {
            current_ua: NormalUiField::Err,
            // 1.2 kW does not fit DDD.d
            power_uw: NormalUiField::Ok(1_200_000_000),
            ..normal.usb_c
        },
    };

    Ok(PreviewSet {
        out_dir: PathBuf::from(NORMAL_UI_DIR),
        layout: TileLayout::NORMAL_UI,
        background: BLACK,
        frames: vec![
            Frame::new("gc9307-normal-ui-preview-normal.png", normal.lines()?),
            Frame::new("gc9307-normal-ui-preview-not-present.png", not_present.lines()?),
            Frame::new("gc9307-normal-ui-preview-error-over.png", error_over.lines()?),
        ],
    })
}

/// The compact toast shown after Wi-Fi association.
pub fn network_toast_previews() -> Result<PreviewSet, Error> {
    let layout = TileLayout::COMPACT_TOAST;
    let width = layout.tiles_x as usize;
    let frames: [(&str, [&str; 3]); 2] = [
        (
            "gc9307-network-toast-connected.png",
            ["ID F293CC", "IP 192.168.31.224", ""],
        ),
        ("gc9307-network-toast-no-wifi.png", ["NO WIFI", "NO IP", ""]),
    ];

    let frames = frames
        .iter()
        .map(|(name, rows)| {
            let rows = rows.map(|r| pad(r, width));
            Frame::from_rows(*name, &rows, color::INFO, &layout)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PreviewSet {
        out_dir: PathBuf::from(NETWORK_TOAST_DIR),
        layout,
        background: BLACK,
        frames,
    })
}

#[rustfmt::skip]
const ACTION_FRAMES: [(&str, [&str; 3]); 12] = [
    // USB-A: data replug
    ("gc9307-action-usb-a-dataoff.png", ["USB-A DATAOFF", "250MS        ", "             "]),
    ("gc9307-action-usb-a-dataon.png", ["USB-A DATAON ", "DONE         ", "             "]),
    // USB-A: power toggle
    ("gc9307-action-usb-a-pwroff.png", ["USB-A PWROFF ", "DONE         ", "             "]),
    ("gc9307-action-usb-a-pwron.png", ["USB-A PWRON  ", "DONE         ", "             "]),
    // USB-A: rejected
    ("gc9307-action-usb-a-busy.png", ["USB-A BUSY   ", "REJECT       ", "             "]),
    ("gc9307-action-usb-a-badtime.png", ["USB-A BADTIME", "REJECT       ", "             "]),
    // USB-C
    ("gc9307-action-usb-c-dataoff.png", ["USB-C DATAOFF", "250MS        ", "             "]),
    ("gc9307-action-usb-c-dataon.png", ["USB-C DATAON ", "DONE         ", "             "]),
    ("gc9307-action-usb-c-pwroff.png", ["USB-C PWROFF ", "DONE         ", "             "]),
    ("gc9307-action-usb-c-pwron.png", ["USB-C PWRON  ", "DONE         ", "             "]),
    ("gc9307-action-usb-c-busy.png", ["USB-C BUSY   ", "REJECT       ", "             "]),
    ("gc9307-action-usb-c-badtime.png", ["USB-C BADTIME", "REJECT       ", "             "]),
];

/// Toast color for an action frame, chosen by the first matching name key.
pub fn action_color(name: &str) -> Rgb {
    const KEYS: [(&str, Rgb); 6] = [
        ("dataoff", color::INFO),
        ("dataon", color::OK),
        ("pwroff", color::WARN),
        ("pwron", color::OK),
        ("busy", color::ERROR),
        ("badtime", color::ERROR),
    ];
    KEYS.iter()
        .find(|(key, _)| name.contains(*key))
        .map_or(color::INFO, |(_, c)| *c)
}

/// Action toasts: one monochrome frame per port and outcome.
pub fn action_previews() -> Result<PreviewSet, Error> {
    let layout = TileLayout::NORMAL_UI;
    let frames = ACTION_FRAMES
        .iter()
        .map(|(name, rows)| Frame::from_rows(*name, rows, action_color(name), &layout))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PreviewSet {
        out_dir: PathBuf::from(ACTION_IMAGES_DIR),
        layout,
        background: BLACK,
        frames,
    })
}

/// Confirm / deny clicks.
pub fn action_auditions() -> AuditionSet {
    AuditionSet {
        out_dir: PathBuf::from(ACTION_AUDIO_DIR),
        patterns: tones::action_patterns(),
    }
}

/// Firmware prompt tones, next to the action clicks.
pub fn prompt_auditions() -> AuditionSet {
    AuditionSet {
        out_dir: PathBuf::from(ACTION_AUDIO_DIR),
        patterns: tones::prompt_patterns(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(frame: &Frame, row: usize) -> String {
        frame.lines[row].iter().map(|c| c.ch).collect()
    }

    #[test]
    fn test_normal_ui_frames() {
        let set = normal_ui_previews().unwrap();
        assert_eq!(set.frames.len(), 3);

        let normal = &set.frames[0];
        assert_eq!(row_text(normal, 0), "5.000V 20.00V");
        assert_eq!(row_text(normal, 1), "0.500A 3.250A");
        assert_eq!(row_text(normal, 2), "2.500W 100.0W");

        let absent = &set.frames[1];
        assert_eq!(row_text(absent, 2), "--.--W --.--W");
        assert_eq!(absent.lines[0][0].fg, color::NOT_PRESENT);

        let error_over = &set.frames[2];
        assert_eq!(row_text(error_over, 0), "ERROR  20.00V");
        assert_eq!(row_text(error_over, 1), "0.500A ERROR ");
        assert_eq!(row_text(error_over, 2), "2.500W OVER  ");
        assert_eq!(error_over.lines[2][7].fg, color::OVER);
    }

    #[test]
    fn test_network_toast_rows_are_padded() {
        let set = network_toast_previews().unwrap();
        assert_eq!(set.layout, TileLayout::COMPACT_TOAST);
        let connected = &set.frames[0];
        assert_eq!(row_text(connected, 1), "IP 192.168.31.224   ");
        assert_eq!(row_text(connected, 2), " ".repeat(20));
    }

    #[test]
    fn test_action_colors() {
        assert_eq!(action_color("gc9307-action-usb-a-dataoff.png"), color::INFO);
        assert_eq!(action_color("gc9307-action-usb-a-dataon.png"), color::OK);
        assert_eq!(action_color("gc9307-action-usb-c-pwroff.png"), color::WARN);
        assert_eq!(action_color("gc9307-action-usb-c-pwron.png"), color::OK);
        assert_eq!(action_color("gc9307-action-usb-a-busy.png"), color::ERROR);
        assert_eq!(action_color("gc9307-action-usb-c-badtime.png"), color::ERROR);
        assert_eq!(action_color("unrelated.png"), color::INFO);
    }

    #[test]
    fn test_action_previews_build() {
        let set = action_previews().unwrap();
        assert_eq!(set.frames.len(), 12);
        assert!(set
            .frames
            .iter()
            .all(|f| f.lines.iter().all(|l| l.len() == 13)));
    }

    #[test]
    fn test_builtin_set_names() {
        assert_eq!(
            serde_json::to_string(&BuiltinSet::NetworkToast).unwrap(),
            "\"network-toast\""
        );
    }
}
