//! Synthetic sprite sheets with known geometry
//!
//! Used by tests and benchmarks to build sheets whose tile size, tile counts
//! and grid color are known up front.

use image::{Rgba, RgbaImage};

/// Layout of a generated sheet: uniform tiles separated by 1-pixel lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Width of each tile in pixels
    pub tile_width: u32,
    /// Height of each tile in pixels
    pub tile_height: u32,
    /// Tiles per row
    pub tiles_x: u32,
    /// Tiles per column
    pub tiles_y: u32,
    /// Extra grid-colored columns appended on the right
    pub trailing_x: u32,
    /// Extra grid-colored rows appended at the bottom
    pub trailing_y: u32,
    /// Color of the separator lines
    pub grid_color: Rgba<u8>,
}

impl SheetLayout {
    /// Opaque black, the usual separator color
    pub const DEFAULT_GRID_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

    /// Layout of `tiles_x` by `tiles_y` tiles with black grid lines
    pub const fn new(tile_width: u32, tile_height: u32, tiles_x: u32, tiles_y: u32) -> Self {
        Self {
            tile_width,
            tile_height,
            tiles_x,
            tiles_y,
            trailing_x: 0,
            trailing_y: 0,
            grid_color: Self::DEFAULT_GRID_COLOR,
        }
    }

    /// Append grid-colored columns and rows after the last tile
    pub const fn with_trailing(mut self, trailing_x: u32, trailing_y: u32) -> Self {
        self.trailing_x = trailing_x;
        self.trailing_y = trailing_y;
        self
    }

    /// Use a different separator color
    pub const fn with_grid_color(mut self, grid_color: Rgba<u8>) -> Self {
        self.grid_color = grid_color;
        self
    }

    /// Sheet size in pixels
    pub const fn dimensions(&self) -> (u32, u32) {
        (
            span(self.tiles_x, self.tile_width) + self.trailing_x,
            span(self.tiles_y, self.tile_height) + self.trailing_y,
        )
    }

    /// Color of pixel `(x, y)` inside the tile at `(row, col)`
    ///
    /// Every tile is a gradient that never matches the grid color, so no
    /// column crossing a tile is uniform unless the tile is one pixel tall.
    pub const fn tile_color(&self, row: u32, col: u32, x: u32, y: u32) -> Rgba<u8> {
        Rgba([
            ((x * 17 + col * 53) % 256) as u8,
            ((y * 29 + row * 71) % 256) as u8,
            self.grid_color.0[2] ^ 0x80,
            255,
        ])
    }

    /// Render the sheet
    pub fn render(&self) -> RgbaImage {
        let (width, height) = self.dimensions();
        let mut sheet = RgbaImage::from_pixel(width, height, self.grid_color);

        for row in 0..self.tiles_y {
            for col in 0..self.tiles_x {
                let left = col * (self.tile_width + 1);
                let top = row * (self.tile_height + 1);
                for y in 0..self.tile_height {
                    for x in 0..self.tile_width {
                        sheet.put_pixel(left + x, top + y, self.tile_color(row, col, x, y));
                    }
                }
            }
        }

        sheet
    }
}

// Tiles plus the single-pixel lines between them
const fn span(count: u32, extent: u32) -> u32 {
    if count == 0 {
        0
    } else {
        count * extent + (count - 1)
    }
}
