//! Cropping a sheet into tiles and saving each as PNG

use crate::analysis::tileset::TilesetGeometry;
use crate::io::configuration::{TILE_EXTENSION, TILE_NAME_INFIX};
use crate::io::error::{Result, TilesetError, file_system_error};
use crate::io::progress::SliceProgress;
use image::{DynamicImage, ImageFormat};
use log::debug;
use std::path::{Path, PathBuf};

/// Writes the tiles of one source sheet into an output directory
#[derive(Debug, Clone)]
pub struct TileSlicer {
    output_dir: PathBuf,
    base_name: String,
}

impl TileSlicer {
    /// Slice tiles of `source` into `output_dir`, or beside the source when `None`
    pub fn new(source: &Path, output_dir: Option<&Path>) -> Self {
        let output_dir = output_dir.map_or_else(
            || source.parent().map(Path::to_path_buf).unwrap_or_default(),
            Path::to_path_buf,
        );
        let base_name = source
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        Self {
            output_dir,
            base_name,
        }
    }

    /// Directory tiles are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Output path of the tile at `(row, col)`
    pub fn tile_path(&self, row: u32, col: u32) -> PathBuf {
        self.output_dir.join(format!(
            "{}{TILE_NAME_INFIX}{row}_{col}.{TILE_EXTENSION}",
            self.base_name
        ))
    }

    /// Crop every complete tile and save it as PNG
    ///
    /// Returns the written paths in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output directory cannot be created
    /// - A tile cannot be encoded or written
    pub fn slice(
        &self,
        image: &DynamicImage,
        geometry: &TilesetGeometry,
        progress: &SliceProgress,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| file_system_error(&self.output_dir, "create directory", e))?;

        let mut written =
            Vec::with_capacity(usize::try_from(geometry.tile_count()).unwrap_or_default());
        for rect in geometry.tile_rects() {
            let tile = encodable(image.crop_imm(rect.x, rect.y, rect.width, rect.height));
            let path = self.tile_path(rect.row, rect.col);

            tile.save_with_format(&path, ImageFormat::Png)
                .map_err(|source| TilesetError::TileExport {
                    path: path.clone(),
                    source,
                })?;
            debug!("Saved tile ({}, {}) to {}", rect.row, rect.col, path.display());

            progress.tile_saved(&path);
            written.push(path);
        }

        Ok(written)
    }
}

// PNG has no float color types
fn encodable(tile: DynamicImage) -> DynamicImage {
    if matches!(
        tile,
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_)
    ) {
        DynamicImage::ImageRgba16(tile.to_rgba16())
    } else {
        tile
    }
}

/// Save every tile of `image` beside `source` without progress output
///
/// # Errors
///
/// Returns an error if a tile cannot be written
pub fn save_individual_tiles(
    source: &Path,
    image: &DynamicImage,
    geometry: &TilesetGeometry,
) -> Result<Vec<PathBuf>> {
    let progress = SliceProgress::hidden(geometry.tile_count());
    TileSlicer::new(source, None).slice(image, geometry, &progress)
}
