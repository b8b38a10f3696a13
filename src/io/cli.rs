//! Command-line interface for analyzing and slicing one sprite sheet

use crate::analysis::tileset::TilesetAnalysis;
use crate::io::configuration::TILES_SAVED_MESSAGE;
use crate::io::error::{Result, file_system_error};
use crate::io::progress::SliceProgress;
use crate::io::report::write_geometry;
use crate::io::slicer::TileSlicer;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tilegrid")]
#[command(
    author,
    version,
    about = "Detect the tile grid of a sprite sheet and save each tile as PNG"
)]
/// Command-line arguments for the tileset analyzer
pub struct Cli {
    /// Sprite sheet image to analyze
    #[arg(value_name = "IMAGE_PATH")]
    pub image_path: PathBuf,

    /// Only report the detected geometry, do not write tiles
    #[arg(short, long)]
    pub no_slice: bool,

    /// Directory for tile images (defaults to the image's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if tiles should be written
    pub const fn should_slice(&self) -> bool {
        !self.no_slice
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs analysis, reporting and slicing for one sheet
pub struct TilesetRunner {
    cli: Cli,
}

impl TilesetRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Analyze the sheet, write the report to `out`, then save the tiles
    ///
    /// Returns the paths of the written tiles, empty when slicing is disabled.
    /// Nothing is written to disk if the analysis fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image cannot be opened
    /// - No grid line is detected
    /// - The report or a tile cannot be written
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<PathBuf>> {
        let analysis = TilesetAnalysis::from_path(&self.cli.image_path)?;
        let geometry = analysis.geometry();

        write_geometry(out, geometry)
            .map_err(|e| file_system_error("<stdout>", "write report", e))?;

        if !self.cli.should_slice() {
            return Ok(Vec::new());
        }

        let slicer = TileSlicer::new(analysis.source(), self.cli.output_dir.as_deref());
        let progress = SliceProgress::new(geometry.tile_count(), self.cli.should_show_progress());
        let written = slicer.slice(analysis.image(), geometry, &progress)?;
        progress.finish();

        writeln!(out, "{TILES_SAVED_MESSAGE}")
            .map_err(|e| file_system_error("<stdout>", "write report", e))?;

        Ok(written)
    }
}
