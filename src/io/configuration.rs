//! Fixed constants for grid geometry, output naming and progress display

/// Pixel gap between adjacent tiles on both axes
pub const GRID_SPACING: u32 = 1;

// Output naming: `<stem><TILE_NAME_INFIX><row>_<col>.<TILE_EXTENSION>`
/// Text placed between the source file stem and the tile coordinates
pub const TILE_NAME_INFIX: &str = "_tile_";
/// Extension of written tile files
pub const TILE_EXTENSION: &str = "png";

/// Final line printed once every tile has been written
pub const TILES_SAVED_MESSAGE: &str = "Tiles saved successfully.";

// Progress bar display settings
/// Template for the tile export progress bar
pub const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] Tiles: [{bar:40.cyan/blue}] {pos}/{len} {msg}";
/// Characters used to draw the progress bar
pub const PROGRESS_CHARS: &str = "█▉▊▋▌▍▎▏ ";
