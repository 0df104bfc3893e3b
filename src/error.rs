//! Error types for preview and audition generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or writing documentation assets.
#[derive(Debug, Error)]
pub enum Error {
    /// A text row does not have exactly one character per tile column
    #[error("expected {expected} chars, got {got}: {text:?}")]
    RowLength {
        /// Required character count (tiles per row)
        expected: usize,
        /// Actual character count
        got: usize,
        /// The offending row
        text: String,
    },

    /// A frame does not have exactly one line per tile row
    #[error("expected exactly {expected} lines, got {got}")]
    RowCount {
        /// Required line count (tile rows)
        expected: usize,
        /// Actual line count
        got: usize,
    },

    /// A normal UI column cell has the wrong width
    #[error("expected {expected}-char cells for left/right, got {got}: {text:?}")]
    CellLength {
        /// Required cell width
        expected: usize,
        /// Actual cell width
        got: usize,
        /// The offending cell
        text: String,
    },

    /// Audio segment kind is neither `tone` nor `silence`
    #[error("unknown segment kind: {0:?}")]
    UnknownSegmentKind(String),

    /// Tile grid or glyph scale does not fit the canvas
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// RGB buffer length does not match the declared dimensions
    #[error("RGB buffer holds {got} bytes, expected {expected}")]
    BufferSize {
        /// `width * height * 3`
        expected: usize,
        /// Actual buffer length
        got: usize,
    },

    /// Tone parameters or clip length cannot be expressed as a WAV file
    #[error("invalid tone: {0}")]
    InvalidTone(String),

    /// Scanline data could not be deflated
    #[error("zlib compression failed: {0}")]
    Compress(#[source] std::io::Error),

    /// File system failure while writing an asset
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Manifest serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(String),

    /// Custom set configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
