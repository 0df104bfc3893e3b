//! Writing preview and audition sets to disk.
//!
//! Output directories are created as needed. Every written file is reported
//! back as a [`GeneratedAsset`] so callers can print a manifest.
//!
//! # Example
//!
//! ```rust,no_run
//! use gc9307_preview::assets::normal_ui_previews;
//! use gc9307_preview::render::{render_previews, RenderConfig};
//!
//! let config = RenderConfig::default().with_root("/path/to/repo");
//! let written = render_previews(&normal_ui_previews()?, &config)?;
//! assert_eq!(written.len(), 3);
//! # Ok::<(), gc9307_preview::Error>(())
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::assets::{AuditionSet, PreviewSet};
use crate::error::Error;
use crate::wav::encode_clip;

/// Configuration for writing asset sets.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory set output paths are resolved against (default: ".")
    pub root: PathBuf,

    /// Encode everything but skip writing files (default: false)
    pub dry_run: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
        }
    }
}

impl RenderConfig {
    /// Resolve output directories against `root`.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Validate and encode without touching the file system.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// What kind of file an asset is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Png,
    Wav,
}

/// One written (or, in dry-run mode, encoded) file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    /// Encoded size in bytes
    pub bytes: usize,
}

/// Render each frame of `set` and write it as PNG.
///
/// Every frame is encoded before the output directory is created, so a bad
/// frame leaves the file system untouched.
///
/// # Errors
///
/// Returns error if:
/// - a frame does not match the set's tile grid
/// - the output directory cannot be created or a file cannot be written
pub fn render_previews(
    set: &PreviewSet,
    config: &RenderConfig,
) -> Result<Vec<GeneratedAsset>, Error> {
    write_encoded(config, encode_previews(set, config)?)
}

/// Synthesize each pattern of `set` and write it as `<name>.wav`.
///
/// As with [`render_previews`], nothing is written unless every pattern
/// encodes.
pub fn render_auditions(
    set: &AuditionSet,
    config: &RenderConfig,
) -> Result<Vec<GeneratedAsset>, Error> {
    write_encoded(config, encode_auditions(set, config)?)
}

/// Serialize a list of assets as pretty JSON.
pub fn manifest_json(assets: &[GeneratedAsset]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(assets)?)
}

/// A fully encoded file waiting to be written.
#[derive(Debug)]
pub(crate) struct EncodedAsset {
    kind: AssetKind,
    path: PathBuf,
    data: Vec<u8>,
}

pub(crate) fn encode_previews(
    set: &PreviewSet,
    config: &RenderConfig,
) -> Result<Vec<EncodedAsset>, Error> {
    let dir = config.root.join(&set.out_dir);
    tracing::debug!(
        "Layout {}x{} tiles of {}x{} (glyph x{}/x{}) -> {}",
        set.layout.tiles_x,
        set.layout.tiles_y,
        set.layout.tile_w,
        set.layout.tile_h,
        set.layout.glyph_sx,
        set.layout.glyph_sy,
        dir.display()
    );

    set.frames
        .iter()
        .map(|frame| {
            Ok(EncodedAsset {
                kind: AssetKind::Png,
                path: dir.join(&frame.name),
                data: frame.render(&set.layout, set.background)?.to_png()?,
            })
        })
        .collect()
}

pub(crate) fn encode_auditions(
    set: &AuditionSet,
    config: &RenderConfig,
) -> Result<Vec<EncodedAsset>, Error> {
    let dir = config.root.join(&set.out_dir);

    set.patterns
        .iter()
        .map(|pattern| {
            Ok(EncodedAsset {
                kind: AssetKind::Wav,
                path: dir.join(format!("{}.wav", pattern.name)),
                data: encode_clip(&pattern.audition(), &pattern.spec)?,
            })
        })
        .collect()
}

/// Write already-encoded files, creating their directories as needed.
pub(crate) fn write_encoded(
    config: &RenderConfig,
    encoded: Vec<EncodedAsset>,
) -> Result<Vec<GeneratedAsset>, Error> {
    encoded
        .into_iter()
        .map(|asset| {
            if config.dry_run {
                tracing::info!(
                    "Would write {} ({} bytes)",
                    asset.path.display(),
                    asset.data.len()
                );
            } else {
                if let Some(dir) = asset.path.parent() {
                    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
                }
                write_asset(&asset.path, &asset.data)?;
            }
            Ok(GeneratedAsset {
                kind: asset.kind,
                path: asset.path,
                bytes: asset.data.len(),
            })
        })
        .collect()
}

/// Write one file and log it.
pub(crate) fn write_asset(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    std::fs::write(path, bytes).map_err(|e| Error::io(path, e))?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
