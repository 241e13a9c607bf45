//! Tests for the owned RGBA pixel grid

#[cfg(test)]
mod tests {
    use barmosaic::raster::Raster;
    use image::Rgba;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(Raster::new(0, 10).is_err());
        assert!(Raster::new(10, 0).is_err());
        assert!(Raster::new(0, 0).is_err());
    }

    #[test]
    fn test_new_is_fully_transparent() {
        let raster = Raster::new(3, 2).expect("valid dimensions");
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(raster.pixel(x, y), Some(&Rgba([0, 0, 0, 0])));
            }
        }
    }

    #[test]
    fn test_pixel_out_of_bounds_is_none() {
        let raster = Raster::new(2, 2).expect("valid dimensions");
        assert!(raster.pixel(2, 0).is_none());
        assert!(raster.pixel(0, 2).is_none());
    }

    #[test]
    fn test_put_pixel_roundtrip_and_out_of_bounds_discard() {
        let mut raster = Raster::new(2, 2).expect("valid dimensions");
        raster.put_pixel(1, 1, Rgba([10, 20, 30, 255]));
        assert_eq!(raster.pixel(1, 1), Some(&Rgba([10, 20, 30, 255])));

        // Out-of-bounds writes must not panic or corrupt anything
        raster.put_pixel(5, 5, Rgba([1, 2, 3, 4]));
        assert_eq!(raster.pixel(0, 0), Some(&Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_fill_overwrites_every_pixel() {
        let mut raster = Raster::new(4, 4).expect("valid dimensions");
        raster.fill(Rgba([255, 0, 0, 255]));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(raster.pixel(x, y), Some(&Rgba([255, 0, 0, 255])));
            }
        }
    }

    #[test]
    fn test_from_fn_evaluates_each_coordinate() {
        let raster =
            Raster::from_fn(3, 3, |x, y| Rgba([x as u8, y as u8, 0, 255])).expect("valid");
        assert_eq!(raster.pixel(2, 1), Some(&Rgba([2, 1, 0, 255])));
        assert_eq!(raster.pixel(0, 2), Some(&Rgba([0, 2, 0, 255])));
    }

    #[test]
    fn test_from_rgba_validates_dimensions() {
        let empty = image::RgbaImage::new(0, 5);
        assert!(Raster::from_rgba(empty).is_err());

        let buffer = image::RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
        let raster = Raster::from_rgba(buffer).expect("valid buffer");
        assert_eq!(raster.as_image().width(), 2);
    }
}
