//! Error types for tileset analysis and tile export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tileset operations
#[derive(Debug)]
pub enum TilesetError {
    /// Source image could not be opened or decoded
    FileOpen {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// No column of the image is a single color
    ///
    /// Also reported for an image made entirely of one color, where there is
    /// nothing for a grid line to separate.
    GridNotFound {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// Failed to save a tile to disk
    TileExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOpen { path, source } => {
                write!(
                    f,
                    "Error opening the image file: {} ({source})",
                    path.display()
                )
            }
            Self::GridNotFound { width, height } => {
                write!(f, "Unable to find grid lines in {width}x{height} image.")
            }
            Self::TileExport { path, source } => {
                write!(f, "Failed to save tile to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilesetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen { source, .. } | Self::TileExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::GridNotFound { .. } => None,
        }
    }
}

/// Convenience type alias for tileset results
pub type Result<T> = std::result::Result<T, TilesetError>;

/// Create a file system error for `operation` on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> TilesetError {
    TilesetError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
