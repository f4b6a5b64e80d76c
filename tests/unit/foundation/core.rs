use super::*;

#[test]
fn hex_parses_brand_colors() {
    assert_eq!(
        Rgba8::from_hex("#0B2D5C").unwrap(),
        Rgba8::opaque(0x0B, 0x2D, 0x5C)
    );
    assert_eq!(
        Rgba8::from_hex("ffb000").unwrap(),
        Rgba8::opaque(0xFF, 0xB0, 0x00)
    );
    assert_eq!(Rgba8::from_hex("#00000080").unwrap().a, 0x80);
}

#[test]
fn hex_rejects_malformed_input() {
    for bad in ["", "#12345", "#GG0000", "#0B2D5C0", "#ééé", "#+F+F+F", "-1-1-1"] {
        let err = Rgba8::from_hex(bad).unwrap_err();
        assert!(matches!(err, IconError::Validation(_)), "{bad}");
    }
}

#[test]
fn premul_of_opaque_is_identity() {
    let c = Rgba8::opaque(12, 200, 99).premultiplied();
    assert_eq!([c.r, c.g, c.b, c.a], [12, 200, 99, 255]);
}

#[test]
fn unpremultiply_restores_half_alpha_within_one() {
    let straight = [200u8, 100, 50, 128];
    let mut px = straight;
    premultiply_rgba8_in_place(&mut px);
    assert!(px[0] < straight[0]);
    unpremultiply_rgba8_in_place(&mut px);
    for i in 0..3 {
        assert!(px[i].abs_diff(straight[i]) <= 1, "channel {i}: {px:?}");
    }
    assert_eq!(px[3], 128);
}

#[test]
fn transparent_pixels_are_zeroed() {
    let mut px = [9u8, 9, 9, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0]);
}

#[test]
fn canvas_sizes() {
    let c = Canvas::square(1024);
    assert_eq!(c.pixel_count(), 1024 * 1024);
    assert_eq!(c.byte_len(), 1024 * 1024 * 4);
}

#[test]
fn hex_formatting_round_trips_rgb() {
    let c = Rgba8::from_hex("#0a1d47").unwrap();
    assert_eq!(c.to_hex_rgb(), "#0A1D47");
    assert_eq!(Rgba8::from_hex(&c.to_hex_rgb()).unwrap(), c);
}
