use super::*;

fn navy() -> Rgba8 {
    Rgba8::from_hex(DEFAULT_LAUNCHER_BACKGROUND).unwrap()
}

fn wide_source() -> RgbaImage {
    RgbaImage::from_pixel(400, 200, image::Rgba([255, 176, 0, 255]))
}

#[test]
fn padding_keeps_aspect_and_fills_background() {
    let icon = resize_with_padding(&wide_source(), 100, Some(navy())).unwrap();
    assert_eq!(icon.dimensions(), (100, 100));
    // 400x200 -> 100x50 centred vertically: rows 0..25 and 75..100 are background.
    assert_eq!(icon.get_pixel(50, 5).0, [0x0A, 0x1D, 0x47, 255]);
    assert_eq!(icon.get_pixel(50, 95).0, [0x0A, 0x1D, 0x47, 255]);
    assert_eq!(icon.get_pixel(50, 50).0, [255, 176, 0, 255]);
}

#[test]
fn foreground_padding_is_transparent() {
    let fg = resize_with_padding(&wide_source(), 108, None).unwrap();
    assert_eq!(fg.get_pixel(54, 2).0[3], 0);
    assert_eq!(fg.get_pixel(54, 54).0[3], 255);
}

#[test]
fn small_sources_are_not_enlarged() {
    let src = RgbaImage::from_pixel(10, 10, image::Rgba([1, 2, 3, 255]));
    let icon = resize_with_padding(&src, 40, Some(navy())).unwrap();
    assert_eq!(icon.get_pixel(15, 15).0, [1, 2, 3, 255]);
    assert_eq!(icon.get_pixel(14, 14).0, [0x0A, 0x1D, 0x47, 255]);
}

#[test]
fn zero_target_is_rejected() {
    assert!(matches!(
        resize_with_padding(&wide_source(), 0, None),
        Err(IconError::Validation(_))
    ));
}

#[test]
fn contents_json_lists_every_ios_icon() {
    let json = ios_contents_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    let images = v["images"].as_array().unwrap();
    assert_eq!(images.len(), IOS_ICONS.len());
    assert_eq!(images[13]["size"], "83.5x83.5");
    assert_eq!(images[14]["idiom"], "ios-marketing");
    assert!(images[0].get("pixels").is_none());
    assert_eq!(v["info"]["author"], "xcode");
}

#[test]
fn colors_xml_carries_background_hex() {
    assert!(colors_xml(navy()).contains(">#0A1D47</color>"));
}

#[test]
fn writes_android_and_ios_sets() {
    let root = PathBuf::from("target").join("launcher_unit");
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    let source = root.join("icon.png");
    RgbaImage::from_pixel(256, 256, image::Rgba([14, 95, 216, 255]))
        .save(&source)
        .unwrap();

    let written = write_launcher_icons(&source, &root, navy()).unwrap();
    let expected = ANDROID_LAUNCHER_SIZES.len() * 2
        + ANDROID_FOREGROUND_SIZES.len()
        + 2
        + 3
        + IOS_ICONS.len()
        + 1;
    assert_eq!(written.len(), expected);
    assert!(written.iter().all(|p| p.exists()));

    let xxx = image::open(root.join(ANDROID_RES_DIR).join("mipmap-xxxhdpi/ic_launcher.png")).unwrap();
    assert_eq!((xxx.width(), xxx.height()), (192, 192));
    let ipad = image::open(root.join(IOS_APPICON_DIR).join("Icon-App-83.5x83.5@2x.png")).unwrap();
    assert_eq!((ipad.width(), ipad.height()), (167, 167));
    let bg = image::open(root.join(GENERATED_DIR).join("background.png")).unwrap();
    assert_eq!((bg.width(), bg.height()), (1080, 1080));
}
