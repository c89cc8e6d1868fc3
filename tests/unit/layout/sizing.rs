use super::*;

fn assert_size(s: Size, w: f64, h: f64) {
    assert!((s.width - w).abs() < 0.01, "width {} != {w}", s.width);
    assert!((s.height - h).abs() < 0.01, "height {} != {h}", s.height);
}

#[test]
fn landscape_display_and_golden_sizes() {
    let natural = Size::new(4000.0, 2000.0);
    assert_size(display_size(natural, 300.0), 300.0, 150.0);

    let orientation = Orientation::from_dimensions(natural.width, natural.height);
    assert_eq!(orientation, Orientation::Landscape);
    assert_size(golden_size(orientation, 300.0), 300.0, 185.41);
}

#[test]
fn portrait_display_and_golden_sizes() {
    let natural = Size::new(2000.0, 4000.0);
    assert_size(display_size(natural, 300.0), 150.0, 300.0);

    let orientation = Orientation::from_dimensions(natural.width, natural.height);
    assert_eq!(orientation, Orientation::Portrait);
    assert_size(golden_size(orientation, 300.0), 185.41, 300.0);
}

#[test]
fn square_image_fills_the_max_side() {
    assert_size(display_size(Size::new(100.0, 100.0), 300.0), 300.0, 300.0);
}

#[test]
fn golden_box_has_golden_aspect() {
    let b = golden_box(Orientation::Landscape, 300.0);
    assert_eq!(b.origin(), kurbo::Point::ORIGIN);
    assert!((b.width() / b.height() - GOLDEN_RATIO).abs() < 1e-12);
}

#[test]
fn pixel_extent_truncates_and_clamps() {
    assert_eq!(
        pixel_extent(Size::new(300.0, 185.41)).unwrap(),
        (300, 185)
    );
    assert_eq!(pixel_extent(Size::new(0.4, 12.9)).unwrap(), (1, 12));
    assert!(pixel_extent(Size::new(70000.0, 10.0)).is_err());
    assert!(pixel_extent(Size::new(f64::NAN, 10.0)).is_err());
}

#[test]
fn ratio_label_has_three_decimals() {
    assert_eq!(ratio_label(4000.0, 2000.0), "1:2.000");
    assert_eq!(ratio_label(2000.0, 3000.0), "1:0.667");
}
