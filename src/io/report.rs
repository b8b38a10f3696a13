//! Plain-text geometry report

use crate::analysis::tileset::TilesetGeometry;
use std::io::Write;

/// Render the six report lines, each terminated by a newline
pub fn format_geometry(geometry: &TilesetGeometry) -> String {
    format!(
        "Tile width: {}\n\
         Tile height: {}\n\
         Spacing in X: {}\n\
         Spacing in Y: {}\n\
         Number of tiles in X: {}\n\
         Number of tiles in Y: {}\n",
        geometry.tile_width,
        geometry.tile_height,
        geometry.spacing_x,
        geometry.spacing_y,
        geometry.tiles_x,
        geometry.tiles_y,
    )
}

/// Write the geometry report to `out`
///
/// # Errors
///
/// Returns the underlying I/O error if writing fails
pub fn write_geometry<W: Write>(out: &mut W, geometry: &TilesetGeometry) -> std::io::Result<()> {
    out.write_all(format_geometry(geometry).as_bytes())
}
