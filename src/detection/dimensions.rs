//! Tile dimension detection from the top-left tile

use image::GenericImageView;

/// Measure `(tile_width, tile_height)` of the top-left tile
///
/// Width is walked along row 0 and height along column 0, each starting at
/// offset 1 and stopping at the first grid-colored pixel or the image edge.
/// Only the first row and column are inspected, so sheets whose later tiles
/// differ in size are not detected as irregular.
pub fn detect_tile_dimensions<I>(view: &I, grid_color: &I::Pixel) -> (u32, u32)
where
    I: GenericImageView,
    I::Pixel: PartialEq,
{
    let (width, height) = view.dimensions();

    let tile_width = measure_run(width, |x| view.get_pixel(x, 0) != *grid_color);
    let tile_height = measure_run(height, |y| view.get_pixel(0, y) != *grid_color);

    (tile_width, tile_height)
}

// Offset 0 is never inspected, so a run is at least one pixel long
fn measure_run(extent: u32, mut is_tile: impl FnMut(u32) -> bool) -> u32 {
    let mut size = 1;
    while size < extent && is_tile(size) {
        size += 1;
    }
    size
}
