//! # gc9307-preview
//!
//! Pixel-accurate documentation assets for the GC9307 320x172 status display
//! and its buzzer.
//!
//! Design docs show what the firmware draws and plays. This crate renders
//! those figures deterministically so they can be regenerated and diffed:
//! - PNG previews of tile-grid text frames, drawn with the firmware's 6x8 font
//! - WAV auditions of the buzzer's square-wave patterns
//! - The firmware's normal UI value formatting (`5.000V`, `20.00V`, `OVER`)
//! - Built-in sets for the normal UI, network toast and action toast docs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gc9307_preview::{generate_all, RenderConfig};
//!
//! let written = generate_all(&RenderConfig::default().with_root("."))?;
//! for asset in &written {
//!     println!("{}", asset.path.display());
//! }
//! # Ok::<(), gc9307_preview::Error>(())
//! ```
//!
//! ## Rendering a Frame
//!
//! ```
//! use gc9307_preview::{color, Frame, TileLayout};
//!
//! let layout = TileLayout::NORMAL_UI;
//! let frame = Frame::from_rows(
//!     "hello.png",
//!     &["HELLO WORLD  ", "             ", "             "],
//!     color::INFO,
//!     &layout,
//! )?;
//! let png = frame.render(&layout, color::BLACK)?.to_png()?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), gc9307_preview::Error>(())
//! ```
//!
//! ## Layouts
//!
//! | Preset | Tile | Grid | Glyph scale |
//! |--------|------|------|-------------|
//! | `normal-ui` | 24x48 | 13x3 | 3x4 |
//! | `compact-toast` | 16x32 | 20x3 | 2x3 |
//!
//! The grid is centered on the panel; each glyph is centered in its tile.
//!
//! ## Feature Flags
//!
//! - `config` - Custom preview and audition sets from YAML
//! - `cli` - The `gc9307-preview` command-line driver
//! - `full` - All features

pub mod assets;
pub mod canvas;
pub mod color;
mod error;
pub mod frame;
pub mod glyph;
pub mod layout;
pub mod normal_ui;
pub mod png;
pub mod render;
pub mod tones;
pub mod wav;

pub use assets::{generate_all, AuditionSet, BuiltinSet, PreviewSet};
pub use canvas::Canvas;
pub use color::Rgb;
pub use error::Error;
pub use frame::{Cell, Frame, Line};
pub use layout::TileLayout;
pub use render::{manifest_json, AssetKind, GeneratedAsset, RenderConfig};
pub use tones::{Pattern, Repeat};
pub use wav::{Segment, SegmentKind, ToneSpec};

/// GC9307 panel width in pixels (landscape)
pub const DISPLAY_WIDTH: u32 = 320;

/// GC9307 panel height in pixels (landscape)
pub const DISPLAY_HEIGHT: u32 = 172;

// Optional modules
#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "config")]
pub use config::PreviewConfig;
