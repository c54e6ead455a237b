//! Error types for scatterscope.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::measurement::Tool;

/// Result type alias for scatterscope operations.
pub type Result<T> = std::result::Result<T, ScatterError>;

/// Errors surfaced to the user. None of them is fatal: the session state is
/// left untouched whenever one is returned.
#[derive(Debug, Error)]
pub enum ScatterError {
    /// File content is not a JSON array of `{"X": number, "Y": number}` objects.
    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    /// A measurement side has zero length, so the angle is undefined.
    #[error("{tool} measurement is undefined: picked points coincide")]
    DegenerateMeasurement { tool: Tool },

    /// The input file could not be read.
    #[error("Failed to read file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A screenshot could not be encoded or written.
    #[error("Failed to export image: {}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ScatterError {
    /// Create a MalformedInput error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Create an Io error.
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }
}

impl From<serde_json::Error> for ScatterError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
