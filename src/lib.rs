//! Sprite-sheet grid inference and tile slicing
//!
//! Detects the solid color drawing the separator lines of a sprite sheet,
//! measures the first tile against it, derives the tile counts assuming a
//! fixed 1-pixel spacing, and optionally writes every tile to its own PNG.

#![forbid(unsafe_code)]

/// Tileset geometry derived from detection results
pub mod analysis;
/// Grid line color and tile dimension detection over pixel views
pub mod detection;
/// Input/output operations, command-line handling and error types
pub mod io;

pub use analysis::tileset::{TilesetGeometry, analyze_image, analyze_tileset};
pub use io::error::{Result, TilesetError};
