//! Tests for cropping sheets into tiles and saving them as PNG

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, RgbaImage};
    use std::path::{Path, PathBuf};
    use tilegrid::TilesetError;
    use tilegrid::analysis::synthetic::SheetLayout;
    use tilegrid::analysis::tileset::analyze_image;
    use tilegrid::io::progress::SliceProgress;
    use tilegrid::io::slicer::{TileSlicer, save_individual_tiles};

    fn example_layout() -> SheetLayout {
        SheetLayout::new(8, 4, 2, 2).with_trailing(1, 1)
    }

    fn png_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".png"))
            .collect();
        names.sort();
        names
    }

    // Tests tile names follow basename_tile_row_col.png beside the source
    // Verified by swapping row and column in the name
    #[test]
    fn test_tile_path_beside_source() {
        let slicer = TileSlicer::new(Path::new("assets/hero.sheet.png"), None);

        assert_eq!(slicer.output_dir(), Path::new("assets"));
        assert_eq!(
            slicer.tile_path(2, 5),
            PathBuf::from("assets/hero.sheet_tile_2_5.png")
        );
    }

    // Tests an explicit output directory replaces the source directory
    // Verified by ignoring the output directory argument
    #[test]
    fn test_tile_path_in_output_dir() {
        let slicer = TileSlicer::new(Path::new("assets/hero.png"), Some(Path::new("out")));

        assert_eq!(slicer.tile_path(0, 1), PathBuf::from("out/hero_tile_0_1.png"));
    }

    // Tests a bare file name writes into the current directory
    // Verified by defaulting the output directory to the root
    #[test]
    fn test_tile_path_without_parent() {
        let slicer = TileSlicer::new(Path::new("hero.png"), None);

        assert_eq!(slicer.tile_path(1, 0), PathBuf::from("hero_tile_1_0.png"));
    }

    // Tests slicing writes one correctly sized file per tile with tile pixels
    // Verified by cropping at a stride without spacing
    #[test]
    fn test_slice_writes_every_tile() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("sheet.png");
        let layout = example_layout();
        let image = DynamicImage::ImageRgba8(layout.render());
        image.save(&source).unwrap();
        let geometry = analyze_image(&image).unwrap();

        let progress = SliceProgress::hidden(geometry.tile_count());
        let written = TileSlicer::new(&source, None)
            .slice(&image, &geometry, &progress)
            .unwrap();

        assert_eq!(written.len(), 4);
        assert_eq!(progress.position(), 4);
        assert_eq!(
            png_names(dir.path()),
            vec![
                "sheet.png",
                "sheet_tile_0_0.png",
                "sheet_tile_0_1.png",
                "sheet_tile_1_0.png",
                "sheet_tile_1_1.png",
            ]
        );

        for row in 0..2 {
            for col in 0..2 {
                let path = dir.path().join(format!("sheet_tile_{row}_{col}.png"));
                let tile = image::open(&path).unwrap().to_rgba8();
                assert_eq!(tile.dimensions(), (8, 4));

                let expected =
                    RgbaImage::from_fn(8, 4, |x, y| layout.tile_color(row, col, x, y));
                assert_eq!(tile, expected, "tile ({row}, {col})");
            }
        }
    }

    // Tests written paths come back in row-major order
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_slice_returns_row_major_paths() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("grid.png");
        let image = DynamicImage::ImageRgba8(SheetLayout::new(2, 2, 3, 2).render());
        let geometry = analyze_image(&image).unwrap();

        let written = save_individual_tiles(&source, &image, &geometry).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "grid_tile_0_0.png",
                "grid_tile_0_1.png",
                "grid_tile_0_2.png",
                "grid_tile_1_0.png",
                "grid_tile_1_1.png",
                "grid_tile_1_2.png",
            ]
        );
    }

    // Tests a missing output directory is created
    // Verified by skipping directory creation
    #[test]
    fn test_slice_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("tiles");
        let image = DynamicImage::ImageRgba8(example_layout().render());
        let geometry = analyze_image(&image).unwrap();

        let written = TileSlicer::new(Path::new("sheet.png"), Some(output_dir.as_path()))
            .slice(&image, &geometry, &SliceProgress::hidden(4))
            .unwrap();

        assert_eq!(written.len(), 4);
        assert_eq!(png_names(&output_dir).len(), 4);
    }

    // Tests float images are written as 16-bit PNG tiles
    // Verified by saving float tiles unconverted
    #[test]
    fn test_slice_float_image() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("float.exr");
        let rgba = DynamicImage::ImageRgba8(example_layout().render());
        let image = DynamicImage::ImageRgba32F(rgba.to_rgba32f());
        let geometry = analyze_image(&image).unwrap();

        let written = save_individual_tiles(&source, &image, &geometry).unwrap();

        let tile = image::open(&written[0]).unwrap();
        assert_eq!(tile.color(), image::ColorType::Rgba16);
        assert_eq!(tile.dimensions(), (8, 4));
    }

    // Tests a file standing in for the output directory fails cleanly
    // Verified by ignoring directory creation errors
    #[test]
    fn test_slice_output_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let image = DynamicImage::ImageRgba8(example_layout().render());
        let geometry = analyze_image(&image).unwrap();

        let result = TileSlicer::new(Path::new("sheet.png"), Some(blocker.as_path())).slice(
            &image,
            &geometry,
            &SliceProgress::hidden(4),
        );

        assert!(matches!(result, Err(TilesetError::FileSystem { .. })));
    }
}
