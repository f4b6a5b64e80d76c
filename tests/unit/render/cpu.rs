use kurbo::Shape as _;

use super::*;

fn near(got: [u8; 4], want: [u8; 4], tol: u8) -> bool {
    got.iter().zip(want).all(|(g, w)| g.abs_diff(w) <= tol)
}

#[test]
fn icon_layers_land_where_designed() {
    let design = IconDesign::coachguru();
    let frame = render_icon(&design, None).unwrap();

    assert_eq!((frame.width, frame.height), (1024, 1024));
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 1024 * 1024 * 4);

    // Rounded corners are cut away.
    for (x, y) in [(0, 0), (1023, 0), (0, 1023), (1023, 1023), (20, 20)] {
        assert_eq!(frame.pixel(x, y).unwrap()[3], 0, "corner ({x},{y})");
    }

    // Edges between the corners are covered by the gradient.
    let top_mid = frame.pixel(512, 2).unwrap();
    assert_eq!(top_mid[3], 255);

    // Arrow shaft and circle are filled with the accent color.
    let accent = design.accent.to_array();
    assert!(near(frame.pixel(710, 320).unwrap(), accent, 2));
    assert!(near(frame.pixel(750, 308).unwrap(), accent, 2));
    assert!(near(frame.pixel(815, 320).unwrap(), accent, 2));
}

#[test]
fn gradient_darkens_towards_top_left() {
    let frame = render_icon(&IconDesign::coachguru(), None).unwrap();
    let upper = frame.pixel(300, 300).unwrap();
    let lower = frame.pixel(900, 900).unwrap();
    assert_eq!(upper[3], 255);
    assert!(upper[2] < lower[2]);
    assert!(upper[1] < lower[1]);
}

#[test]
fn rendering_is_deterministic() {
    let design = IconDesign::coachguru();
    let a = render_icon(&design, None).unwrap();
    let b = render_icon(&design, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn coverage_of_a_square_is_binary_inside_and_outside() {
    let path = kurbo::Rect::new(4.0, 4.0, 12.0, 12.0).to_path(0.1);
    let cov = rasterize_coverage(&path, Canvas::square(16)).unwrap();
    assert_eq!(cov.len(), 256);
    assert_eq!(cov[8 * 16 + 8], 255);
    assert_eq!(cov[0], 0);
    assert_eq!(cov[15 * 16 + 15], 0);
}

#[test]
fn oversized_surfaces_are_rejected() {
    let mut design = IconDesign::coachguru();
    design.canvas = Canvas::square(70_000);
    let err = render_icon(&design, None).unwrap_err();
    assert!(matches!(err, IconError::Render(_)));
}
