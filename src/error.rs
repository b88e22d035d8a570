use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the I/O shell around the engine.
///
/// The query pipeline itself is total and never returns one of these.
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load records from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<ScoutError>,
    },
}

impl ScoutError {
    /// Wrap an error with the path it came from.
    pub fn at_path(self, path: impl Into<PathBuf>) -> Self {
        ScoutError::Load {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
