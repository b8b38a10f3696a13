//! Pixel scans that locate the grid lines of a sprite sheet
//!
//! Both detectors work on any [`image::GenericImageView`] whose pixels can be
//! compared for equality, so detection happens in the decoded pixel mode
//! without lossy conversion.

/// Tile width and height measured against the grid color
pub mod dimensions;
/// First fully uniform column as the grid line color
pub mod grid_color;

pub use dimensions::detect_tile_dimensions;
pub use grid_color::find_grid_color;
