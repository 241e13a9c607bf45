//! Tests for the mosaic pass: cardinality, geometry, inversion, and
//! lock-step equivalence of the two sinks

#[cfg(test)]
mod tests {
    use barmosaic::raster::Raster;
    use barmosaic::render::{
        Direction, DrawSurface, GridSpec, RasterSurface, Rgb, StyleParams, render, render_pass,
    };
    use image::Rgba;

    fn gray(level: u8) -> Rgba<u8> {
        Rgba([level, level, level, 255])
    }

    fn checker_2x2() -> Raster {
        Raster::from_fn(2, 2, |x, y| {
            if x == y {
                gray(0)
            } else {
                gray(255)
            }
        })
        .expect("valid dimensions")
    }

    fn transparent_style(min_height: f64, max_height: f64) -> StyleParams {
        let mut style = StyleParams::with_heights(min_height, max_height).expect("valid heights");
        style.transparent_background = true;
        style
    }

    #[test]
    fn test_draws_exactly_one_primitive_per_cell() {
        let source = Raster::from_fn(32, 20, |x, y| gray((x * 7 + y * 11) as u8))
            .expect("valid dimensions");

        for (tiles_x, tiles_y) in [(1, 1), (3, 5), (16, 9), (32, 20)] {
            let grid = GridSpec::new(tiles_x, tiles_y).expect("valid grid");
            let (_, vector) =
                render_pass(&source, &grid, &transparent_style(0.0, 100.0)).expect("pass runs");
            assert_eq!(
                vector.primitives().len(),
                (tiles_x * tiles_y) as usize,
                "grid {tiles_x}x{tiles_y}"
            );
        }
    }

    #[test]
    fn test_background_fill_adds_one_leading_primitive() {
        let source = checker_2x2();
        let grid = GridSpec::new(2, 2).expect("valid grid");
        let style = StyleParams::with_heights(0.0, 100.0).expect("valid heights");

        let (_, vector) = render_pass(&source, &grid, &style).expect("pass runs");
        assert_eq!(vector.primitives().len(), 5);

        let background = vector.primitives().first().expect("background rect");
        assert!(background.x.abs() < f64::EPSILON);
        assert!(background.y.abs() < f64::EPSILON);
        assert!((background.width - 2.0).abs() < f64::EPSILON);
        assert!((background.height - 2.0).abs() < f64::EPSILON);
        assert_eq!(background.fill, style.background);
    }

    #[test]
    fn test_checkerboard_brightness_drives_bar_length() {
        // Dark cells get the longest bar, bright cells a zero-length one
        let source = checker_2x2();
        let grid = GridSpec::new(2, 2).expect("valid grid");
        let (_, vector) =
            render_pass(&source, &grid, &transparent_style(0.0, 100.0)).expect("pass runs");

        // Cells arrive x-outer, y-inner: (0,0), (0,1), (1,0), (1,1)
        let heights: Vec<f64> = vector.primitives().iter().map(|r| r.height).collect();
        assert!((heights.first().expect("cell 0,0") - 50.0).abs() < 1e-9);
        assert!(heights.get(1).expect("cell 0,1").abs() < 1e-9);
        assert!(heights.get(2).expect("cell 1,0").abs() < 1e-9);
        assert!((heights.get(3).expect("cell 1,1") - 50.0).abs() < 1e-9);

        // Horizontal bars span the full tile width
        for rect in vector.primitives() {
            assert!((rect.width - 1.0).abs() < f64::EPSILON);
        }

        // The dark cell's bar is anchored half a bar above its center
        let first = vector.primitives().first().expect("cell 0,0");
        assert!(first.x.abs() < f64::EPSILON);
        assert!((first.y + 24.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_tile_grid_degenerates_to_one_full_span_bar() {
        let source = Raster::from_fn(10, 6, |_, _| gray(0)).expect("valid dimensions");
        let grid = GridSpec::new(1, 1).expect("valid grid");
        let (_, vector) =
            render_pass(&source, &grid, &transparent_style(0.0, 100.0)).expect("pass runs");

        assert_eq!(vector.primitives().len(), 1);
        let bar = vector.primitives().first().expect("single bar");
        // Full source width; brightness 0 maps to the maximum bar length
        assert!(bar.x.abs() < f64::EPSILON);
        assert!((bar.width - 10.0).abs() < f64::EPSILON);
        assert!((bar.height - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_direction_swaps_the_varying_axis() {
        let source = Raster::from_fn(1, 1, |_, _| gray(0)).expect("valid dimensions");
        let grid = GridSpec::new(1, 1).expect("valid grid");
        let mut style = transparent_style(0.0, 10.0);
        style.direction = Direction::Vertical;

        let (_, vector) = render_pass(&source, &grid, &style).expect("pass runs");
        let bar = vector.primitives().first().expect("single bar");
        assert!((bar.width - 5.0).abs() < 1e-9);
        assert!((bar.height - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invert_swaps_bar_lengths_across_complementary_brightness() {
        let grid = GridSpec::new(1, 1).expect("valid grid");
        for level in [0_u8, 17, 60, 127, 200, 255] {
            let plain_source = Raster::from_fn(1, 1, |_, _| gray(level)).expect("valid");
            let mirror_source = Raster::from_fn(1, 1, |_, _| gray(255 - level)).expect("valid");

            let plain = transparent_style(10.0, 80.0);
            let mut inverted = transparent_style(10.0, 80.0);
            inverted.invert = true;

            let (_, plain_vec) = render_pass(&plain_source, &grid, &plain).expect("pass runs");
            let (_, mirror_vec) =
                render_pass(&mirror_source, &grid, &inverted).expect("pass runs");

            let plain_bar = plain_vec.primitives().first().expect("bar").height;
            let mirror_bar = mirror_vec.primitives().first().expect("bar").height;
            assert!(
                (plain_bar - mirror_bar).abs() < 1e-9,
                "level {level}: {plain_bar} vs {mirror_bar}"
            );
        }
    }

    #[test]
    fn test_equal_min_and_max_flatten_every_bar() {
        let source = Raster::from_fn(8, 8, |x, y| gray((x * 31 + y * 17) as u8))
            .expect("valid dimensions");
        let grid = GridSpec::new(4, 4).expect("valid grid");
        let (_, vector) =
            render_pass(&source, &grid, &transparent_style(40.0, 40.0)).expect("pass runs");

        for rect in vector.primitives() {
            assert!((rect.height - 20.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_source_coloring_fills_bars_with_sampled_pixels() {
        let source = Raster::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        })
        .expect("valid dimensions");

        let grid = GridSpec::new(2, 1).expect("valid grid");
        let mut style = transparent_style(0.0, 100.0);
        style.use_source_color = true;

        let (_, vector) = render_pass(&source, &grid, &style).expect("pass runs");
        let fills: Vec<Rgb> = vector.primitives().iter().map(|r| r.fill).collect();
        assert_eq!(fills, vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);
    }

    #[test]
    fn test_replaying_the_vector_sink_reproduces_the_raster_sink() {
        // The retained primitives must be a lossless description of the
        // bitmap: replaying them pixel-for-pixel recreates it
        let source = Raster::from_fn(24, 16, |x, y| {
            Rgba([(x * 10) as u8, (y * 15) as u8, ((x + y) * 6) as u8, 255])
        })
        .expect("valid dimensions");

        let grid = GridSpec::new(6, 4).expect("valid grid");
        let mut style = StyleParams::with_heights(5.0, 60.0).expect("valid heights");
        style.use_source_color = true;

        let (raster_sink, vector_sink) = render_pass(&source, &grid, &style).expect("pass runs");

        let mut replay = RasterSurface::new(source.width(), source.height()).expect("valid");
        for rect in vector_sink.primitives() {
            replay.set_fill(rect.fill);
            replay.fill_rect(rect.x, rect.y, rect.width, rect.height);
        }

        assert_eq!(
            raster_sink.raster().as_image().as_raw(),
            replay.raster().as_image().as_raw()
        );
    }

    #[test]
    fn test_render_reuses_supplied_sinks_in_lock_step() {
        let source = checker_2x2();
        let grid = GridSpec::new(2, 2).expect("valid grid");
        let style = transparent_style(0.0, 100.0);

        let mut raster_sink = RasterSurface::new(2, 2).expect("valid");
        let mut vector_sink = barmosaic::render::VectorSurface::new(2, 2).expect("valid");

        // Pre-existing state must not leak into the new pass
        raster_sink.set_fill(Rgb::new(1, 2, 3));
        raster_sink.fill_rect(0.0, 0.0, 2.0, 2.0);
        vector_sink.set_fill(Rgb::new(1, 2, 3));
        vector_sink.fill_rect(0.0, 0.0, 2.0, 2.0);

        render(&source, &grid, &style, &mut raster_sink, &mut vector_sink);

        assert_eq!(vector_sink.primitives().len(), 4);
        assert_eq!(raster_sink.raster().pixel(0, 0), Some(&style.tile_color.to_rgba()));

        // Nothing of the pre-existing fill survives the pass
        for y in 0..2 {
            for x in 0..2 {
                assert_ne!(raster_sink.raster().pixel(x, y), Some(&Rgba([1, 2, 3, 255])));
            }
        }
    }

    #[test]
    fn test_render_pass_sizes_sinks_to_the_source() {
        let source = Raster::new(30, 12).expect("valid dimensions");
        let grid = GridSpec::new(3, 3).expect("valid grid");
        let style = StyleParams::default();

        let (raster_sink, vector_sink) = render_pass(&source, &grid, &style).expect("pass runs");
        assert_eq!(raster_sink.raster().width(), 30);
        assert_eq!(raster_sink.raster().height(), 12);
        assert_eq!(vector_sink.width(), 30);
        assert_eq!(vector_sink.height(), 12);
    }
}
