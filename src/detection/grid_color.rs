//! Grid line color detection

use image::GenericImageView;

/// Find the color of the first column that is a single color from top to bottom
///
/// Columns are tried left to right using the pixel in row 0 as the candidate.
/// A one-row image accepts its first column immediately. Returns `None` for an
/// empty image or when every column contains more than one color.
pub fn find_grid_color<I>(view: &I) -> Option<I::Pixel>
where
    I: GenericImageView,
    I::Pixel: PartialEq,
{
    let (width, height) = view.dimensions();
    if height == 0 {
        return None;
    }

    (0..width).find_map(|x| {
        let color = view.get_pixel(x, 0);
        (1..height)
            .all(|y| view.get_pixel(x, y) == color)
            .then_some(color)
    })
}

/// Check whether every pixel of the view equals `color`
///
/// An image made of one color has a uniform first column but no line
/// separating anything from it.
pub fn is_single_color<I>(view: &I, color: &I::Pixel) -> bool
where
    I: GenericImageView,
    I::Pixel: PartialEq,
{
    view.pixels().all(|(_, _, pixel)| pixel == *color)
}
