use super::*;

fn checker(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            image::Rgba([11, 45, 92, 255])
        } else {
            image::Rgba([255, 176, 0, 255])
        }
    })
}

#[test]
fn favicon_sizes_are_fixed() {
    let (png, ico) = favicon_images(&checker(512));
    assert_eq!(png.dimensions(), (FAVICON_PNG_SIZE, FAVICON_PNG_SIZE));
    assert_eq!(ico.dimensions(), (FAVICON_ICO_SIZE, FAVICON_ICO_SIZE));
}

#[test]
fn writes_both_files_into_existing_dir() {
    let dir = PathBuf::from("target").join("favicon_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let source = dir.join("source.png");
    checker(300).save(&source).unwrap();

    let paths = write_favicons(&source, &dir).unwrap();
    let png = image::open(&paths.png).unwrap();
    assert_eq!((png.width(), png.height()), (256, 256));
    let ico = image::open(&paths.ico).unwrap();
    assert_eq!((ico.width(), ico.height()), (48, 48));
}

#[test]
fn missing_output_dir_is_a_validation_error() {
    let err = write_favicons(
        Path::new("target/favicon_unit/source.png"),
        Path::new("target/favicon_unit/absent"),
    )
    .unwrap_err();
    assert!(matches!(err, IconError::Validation(_)));
}

#[test]
fn missing_source_is_reported() {
    let dir = PathBuf::from("target").join("favicon_unit_missing");
    std::fs::create_dir_all(&dir).unwrap();
    let err = write_favicons(&dir.join("nope.png"), &dir).unwrap_err();
    assert!(err.to_string().contains("open source image"));
}
