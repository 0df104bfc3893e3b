//! Custom preview and audition sets described in YAML.
//!
//! Useful for one-off figures in a new design doc without touching the
//! built-in tables.
//!
//! # Example (YAML)
//!
//! ```yaml
//! out_dir: "docs/plan/0004:ota/images"
//! layout: compact-toast        # or normal-ui, or explicit fields
//! background: "#000000"
//!
//! frames:
//!   - name: gc9307-ota-progress.png
//!     color: "#FFCA28"
//!     pad: true                 # right-pad short rows with spaces
//!     rows:
//!       - "OTA 42/100"
//!       - text: "DO NOT UNPLUG"
//!         color: "#FF9800"
//!       - ""
//!
//! audio_dir: "docs/plan/0004:ota/audio"
//! tone:
//!   duty_pct: 8
//! clips:
//!   - name: ota-done
//!     segments:
//!       - { kind: tone, ms: 100 }
//!       - { kind: silence, ms: 120 }
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use gc9307_preview::config::PreviewConfig;
//! use gc9307_preview::RenderConfig;
//!
//! let config = PreviewConfig::load("docs/plan/0004:ota/previews.yaml")?;
//! let written = config.generate(&RenderConfig::default())?;
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::assets::{AuditionSet, PreviewSet};
use crate::color::{Rgb, BLACK, INFO};
use crate::frame::{line_text, pad, Frame, Line};
use crate::layout::TileLayout;
use crate::render::{encode_auditions, encode_previews, write_encoded, GeneratedAsset, RenderConfig};
use crate::tones::{Pattern, Repeat};
use crate::wav::{Segment, ToneSpec};
use crate::Error;

/// A custom asset set.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    /// Directory for PNG output (relative to the render root)
    pub out_dir: PathBuf,
    /// Tile layout (default: normal UI)
    #[serde(default)]
    pub layout: LayoutSpec,
    /// Background color (default: black)
    #[serde(default)]
    pub background: Option<Rgb>,
    /// Frames to render
    #[serde(default)]
    pub frames: Vec<FrameSpec>,
    /// Directory for WAV output (default: `out_dir`)
    #[serde(default)]
    pub audio_dir: Option<PathBuf>,
    /// Tone parameters shared by all clips
    #[serde(default)]
    pub tone: ToneSpec,
    /// Clips to synthesize
    #[serde(default)]
    pub clips: Vec<ClipSpec>,
}

/// Layout by preset name or explicit geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LayoutSpec {
    /// `normal-ui` or `compact-toast`
    Preset(String),
    /// All eight [`TileLayout`] fields
    Custom(TileLayout),
}

impl Default for LayoutSpec {
    fn default() -> Self {
        LayoutSpec::Custom(TileLayout::NORMAL_UI)
    }
}

impl LayoutSpec {
    /// Resolve to a validated layout.
    pub fn resolve(&self) -> Result<TileLayout, Error> {
        let layout = match self {
            LayoutSpec::Preset(name) => TileLayout::preset(name)
                .ok_or_else(|| Error::Config(format!("Unknown layout preset '{}'", name)))?,
            LayoutSpec::Custom(layout) => *layout,
        };
        layout.validate()?;
        Ok(layout)
    }
}

/// One frame.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameSpec {
    /// Output file name
    pub name: String,
    /// Default row color (default: info yellow)
    #[serde(default)]
    pub color: Option<Rgb>,
    /// Pad or truncate rows to the grid width instead of rejecting them
    #[serde(default)]
    pub pad: bool,
    /// One entry per tile row
    pub rows: Vec<RowSpec>,
}

/// A row as plain text or text with its own color.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RowSpec {
    Text(String),
    Colored { text: String, color: Rgb },
}

/// One audio clip.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipSpec {
    /// Output file stem
    pub name: String,
    pub segments: Vec<SegmentSpec>,
    /// Per-clip duty override
    #[serde(default)]
    pub duty_pct: Option<u8>,
    /// Per-clip frequency override
    #[serde(default)]
    pub freq_hz: Option<u32>,
}

/// A segment with its kind still unparsed, so bad kinds surface as
/// [`Error::UnknownSegmentKind`].
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentSpec {
    pub kind: String,
    pub ms: u32,
}

impl PreviewConfig {
    /// Load a custom set from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read preview config '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a custom set from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::Config(format!("Invalid preview config YAML: {}", e)))
    }

    /// Build the frames, validating row count and width against the layout.
    pub fn preview_set(&self) -> Result<PreviewSet, Error> {
        let layout = self.layout.resolve()?;
        let frames = self
            .frames
            .iter()
            .map(|spec| spec.to_frame(&layout))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PreviewSet {
            out_dir: self.out_dir.clone(),
            layout,
            background: self.background.unwrap_or(BLACK),
            frames,
        })
    }

    /// Build the clips, validating every segment kind and tone.
    pub fn audition_set(&self) -> Result<AuditionSet, Error> {
        let patterns = self
            .clips
            .iter()
            .map(|clip| clip.to_pattern(&self.tone))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AuditionSet {
            out_dir: self.audio_dir.clone().unwrap_or_else(|| self.out_dir.clone()),
            patterns,
        })
    }

    /// Render all frames and clips.
    ///
    /// Every file is encoded in memory before the first one is written, so a
    /// failing set leaves the output directories untouched.
    pub fn generate(&self, config: &RenderConfig) -> Result<Vec<GeneratedAsset>, Error> {
        let previews = self.preview_set()?;
        let auditions = self.audition_set()?;
        tracing::info!(
            "Loaded custom set with {} frames, {} clips",
            previews.frames.len(),
            auditions.patterns.len()
        );

        let mut encoded = encode_previews(&previews, config)?;
        encoded.extend(encode_auditions(&auditions, config)?);
        write_encoded(config, encoded)
    }
}

impl FrameSpec {
    fn to_frame(&self, layout: &TileLayout) -> Result<Frame, Error> {
        let default_fg = self.color.unwrap_or(INFO);
        let width = layout.tiles_x as usize;
        let rows = layout.tiles_y as usize;
        if self.rows.len() != rows {
            return Err(Error::RowCount {
                expected: rows,
                got: self.rows.len(),
            });
        }

        let lines = self
            .rows
            .iter()
            .map(|row| {
                let (text, fg) = match row {
                    RowSpec::Text(text) => (text.as_str(), default_fg),
                    RowSpec::Colored { text, color } => (text.as_str(), *color),
                };
                if self.pad {
                    line_text(&pad(text, width), fg, layout)
                } else {
                    line_text(text, fg, layout)
                }
            })
            .collect::<Result<Vec<Line>, _>>()?;

        Ok(Frame::new(self.name.clone(), lines))
    }
}

impl ClipSpec {
    fn to_pattern(&self, base: &ToneSpec) -> Result<Pattern, Error> {
        let segments = self
            .segments
            .iter()
            .map(|seg| {
                Ok(Segment {
                    kind: seg.kind.parse()?,
                    ms: seg.ms,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let mut spec = *base;
        if let Some(duty) = self.duty_pct {
            spec = spec.with_duty(duty);
        }
        if let Some(freq) = self.freq_hz {
            spec = spec.with_freq(freq);
        }
        spec.validate()?;

        Ok(Pattern {
            name: self.name.clone(),
            segments,
            repeat: Repeat::Once,
            spec,
        })
    }
}
