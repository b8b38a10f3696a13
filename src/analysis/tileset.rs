//! Tileset geometry inference
//!
//! Combines grid color and tile dimension detection into a [`TilesetGeometry`]
//! record. Tile counts assume exactly one pixel of spacing on both axes and
//! never include a partial tile at the right or bottom edge.

use crate::detection::grid_color::is_single_color;
use crate::detection::{detect_tile_dimensions, find_grid_color};
use crate::io::configuration::GRID_SPACING;
use crate::io::error::{Result, TilesetError};
use image::{DynamicImage, GenericImageView};
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// Geometry of a sprite sheet with uniform tiles and 1-pixel grid lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilesetGeometry {
    /// Width of a single tile in pixels
    pub tile_width: u32,
    /// Height of a single tile in pixels
    pub tile_height: u32,
    /// Horizontal gap between tiles in pixels
    pub spacing_x: u32,
    /// Vertical gap between tiles in pixels
    pub spacing_y: u32,
    /// Number of complete tiles per row
    pub tiles_x: u32,
    /// Number of complete tiles per column
    pub tiles_y: u32,
}

/// Position of one tile inside the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Zero-based tile row
    pub row: u32,
    /// Zero-based tile column
    pub col: u32,
    /// Left edge in sheet pixels
    pub x: u32,
    /// Top edge in sheet pixels
    pub y: u32,
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
}

impl TilesetGeometry {
    /// Derive tile counts from image and tile dimensions
    ///
    /// `tiles = (image + spacing) / (tile + spacing)` on each axis, computed in
    /// 64-bit so the largest `u32` images cannot overflow.
    pub const fn from_dimensions(image: (u32, u32), tile: (u32, u32)) -> Self {
        let (image_width, image_height) = image;
        let (tile_width, tile_height) = tile;

        Self {
            tile_width,
            tile_height,
            spacing_x: GRID_SPACING,
            spacing_y: GRID_SPACING,
            tiles_x: count_tiles(image_width, tile_width, GRID_SPACING),
            tiles_y: count_tiles(image_height, tile_height, GRID_SPACING),
        }
    }

    /// Total number of complete tiles in the sheet
    pub const fn tile_count(&self) -> u64 {
        self.tiles_x as u64 * self.tiles_y as u64
    }

    /// Iterate over every tile in row-major order
    pub fn tile_rects(&self) -> impl Iterator<Item = TileRect> {
        let geometry = *self;
        (0..geometry.tiles_y).flat_map(move |row| {
            (0..geometry.tiles_x).map(move |col| TileRect {
                row,
                col,
                x: col * (geometry.tile_width + geometry.spacing_x),
                y: row * (geometry.tile_height + geometry.spacing_y),
                width: geometry.tile_width,
                height: geometry.tile_height,
            })
        })
    }
}

impl fmt::Display for TilesetGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} tiles of {}x{} px",
            self.tiles_x, self.tiles_y, self.tile_width, self.tile_height
        )
    }
}

const fn count_tiles(image_extent: u32, tile_extent: u32, spacing: u32) -> u32 {
    let stride = tile_extent as u64 + spacing as u64;
    if stride == 0 {
        return 0;
    }
    ((image_extent as u64 + spacing as u64) / stride) as u32
}

/// Decoded sprite sheet together with its detected geometry
#[derive(Debug)]
pub struct TilesetAnalysis {
    source: PathBuf,
    image: DynamicImage,
    geometry: TilesetGeometry,
}

impl TilesetAnalysis {
    /// Open an image file and analyze its grid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or decoded
    /// - No grid line color can be found in the image
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = path.as_ref().to_path_buf();
        let image = open_image(&source)?;
        let geometry = analyze_image(&image)?;

        Ok(Self {
            source,
            image,
            geometry,
        })
    }

    /// Path the sheet was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The decoded sheet
    pub const fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Detected geometry
    pub const fn geometry(&self) -> &TilesetGeometry {
        &self.geometry
    }
}

/// Decode an image file in whatever format the `image` crate recognizes
///
/// # Errors
///
/// Returns [`TilesetError::FileOpen`] if the file is missing, unreadable or
/// not a decodable image
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| TilesetError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Open an image file and infer its tileset geometry
///
/// # Errors
///
/// Returns [`TilesetError::FileOpen`] if the image cannot be opened and
/// [`TilesetError::GridNotFound`] if no grid line is detected
pub fn analyze_tileset<P: AsRef<Path>>(path: P) -> Result<TilesetGeometry> {
    TilesetAnalysis::from_path(path).map(|analysis| analysis.geometry)
}

/// Infer the geometry of an already decoded image
///
/// Pixels are compared in the image's own color type, so 16-bit and float
/// sheets are not quantized before detection.
///
/// # Errors
///
/// Returns [`TilesetError::GridNotFound`] if no grid line is detected
pub fn analyze_image(image: &DynamicImage) -> Result<TilesetGeometry> {
    match image {
        DynamicImage::ImageLuma8(buffer) => analyze_view(buffer),
        DynamicImage::ImageLumaA8(buffer) => analyze_view(buffer),
        DynamicImage::ImageRgb8(buffer) => analyze_view(buffer),
        DynamicImage::ImageRgba8(buffer) => analyze_view(buffer),
        DynamicImage::ImageLuma16(buffer) => analyze_view(buffer),
        DynamicImage::ImageLumaA16(buffer) => analyze_view(buffer),
        DynamicImage::ImageRgb16(buffer) => analyze_view(buffer),
        DynamicImage::ImageRgba16(buffer) => analyze_view(buffer),
        DynamicImage::ImageRgb32F(buffer) => analyze_view(buffer),
        DynamicImage::ImageRgba32F(buffer) => analyze_view(buffer),
        other => analyze_view(&other.to_rgba32f()),
    }
}

/// Infer the geometry of any pixel view with comparable pixels
///
/// # Errors
///
/// Returns [`TilesetError::GridNotFound`] if no column is a single color, or
/// if the whole image is that one color
pub fn analyze_view<I>(view: &I) -> Result<TilesetGeometry>
where
    I: GenericImageView,
    I::Pixel: PartialEq + fmt::Debug,
{
    let (width, height) = view.dimensions();
    let grid_not_found = || TilesetError::GridNotFound { width, height };

    let grid_color = find_grid_color(view).ok_or_else(grid_not_found)?;
    if is_single_color(view, &grid_color) {
        debug!("Image is a single color {grid_color:?}, no grid lines to separate tiles");
        return Err(grid_not_found());
    }
    debug!("Detected grid color {grid_color:?}");

    let tile = detect_tile_dimensions(view, &grid_color);
    let geometry = TilesetGeometry::from_dimensions((width, height), tile);
    debug!("Detected {geometry} in {width}x{height} image");

    Ok(geometry)
}
