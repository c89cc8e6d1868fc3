use super::*;

#[test]
fn pixel_reads_row_major_and_bounds_checks() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 255, 4, 5, 6, 255],
    };
    assert_eq!(frame.pixel(1, 0), Some([4, 5, 6, 255]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 1), None);
}

#[test]
fn straight_conversion_undoes_premultiply() {
    let frame = FrameRGBA {
        width: 3,
        height: 1,
        data: vec![50, 25, 100, 128, 7, 8, 9, 255, 0, 0, 0, 0],
    };
    let straight = frame.to_straight_rgba8();
    assert_eq!(&straight[0..4], &[100, 50, 199, 128]);
    assert_eq!(&straight[4..8], &[7, 8, 9, 255]);
    assert_eq!(&straight[8..12], &[0, 0, 0, 0]);
}

#[test]
fn panel_helpers_size_frames_from_extent_and_golden_box() {
    let cfg = RenderConfig::default();
    let image = LoadedImage {
        rgba: image::RgbaImage::from_pixel(8, 4, image::Rgba([0, 0, 0, 255])),
    };
    let bounds = crate::layout::sizing::golden_box(crate::Orientation::Landscape, 300.0);
    let decomposition =
        crate::geometry::decompose::decompose(bounds, crate::Orientation::Landscape).unwrap();

    let plain = render_resized(&image, (300, 185), &cfg).unwrap();
    let golden = render_overlay(&image, bounds, &decomposition, &cfg).unwrap();

    assert_eq!((plain.width, plain.height), (300, 185));
    assert_eq!((golden.width, golden.height), (300, 185));
    assert_ne!(plain.data, golden.data);
    assert!(plain.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}
