//! Error types for generation and payload decoding

use std::path::PathBuf;

use thiserror::Error;

use crate::palette::PaletteError;

/// Errors that abort a generation run
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load palette '{}': {source}", .path.display())]
    Palette {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a palette loading failure with the file it came from
    pub fn palette(path: impl Into<PathBuf>, source: PaletteError) -> Self {
        GenerateError::Palette {
            path: path.into(),
            source,
        }
    }
}

/// Errors from decoding a `data:` URI payload back into SVG text
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
