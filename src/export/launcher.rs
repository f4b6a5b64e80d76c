//! Android and iOS launcher icon sets derived from a finished icon image.
//!
//! Layout mirrors a Flutter project: `android/app/src/main/res/...`,
//! `ios/Runner/Assets.xcassets/AppIcon.appiconset/...` and `assets/icon/generated/...`, all
//! relative to the chosen output root.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{RgbaImage, imageops::FilterType};

use crate::{
    foundation::core::Rgba8,
    foundation::error::{IconError, IconResult},
};

/// Solid launcher background (`ic_launcher_background`).
pub const DEFAULT_LAUNCHER_BACKGROUND: &str = "#0A1D47";

const ANDROID_RES_DIR: &str = "android/app/src/main/res";
const IOS_APPICON_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";
const GENERATED_DIR: &str = "assets/icon/generated";

/// Legacy launcher edge length per mipmap density.
pub const ANDROID_LAUNCHER_SIZES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Adaptive icon foreground edge length per mipmap density.
pub const ANDROID_FOREGROUND_SIZES: [(&str, u32); 5] = [
    ("mdpi", 108),
    ("hdpi", 162),
    ("xhdpi", 216),
    ("xxhdpi", 324),
    ("xxxhdpi", 432),
];

const ADAPTIVE_FOREGROUND_MASTER: u32 = 432;
const ADAPTIVE_BACKGROUND_MASTER: u32 = 1080;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// One entry of an `AppIcon.appiconset`.
pub struct IosIcon {
    pub filename: &'static str,
    pub idiom: &'static str,
    pub scale: &'static str,
    pub size: &'static str,
    #[serde(skip)]
    pub pixels: u32,
}

const fn ios(
    filename: &'static str,
    idiom: &'static str,
    scale: &'static str,
    size: &'static str,
    pixels: u32,
) -> IosIcon {
    IosIcon {
        filename,
        idiom,
        scale,
        size,
        pixels,
    }
}

pub const IOS_ICONS: [IosIcon; 15] = [
    ios("Icon-App-20x20@1x.png", "iphone", "1x", "20x20", 20),
    ios("Icon-App-20x20@2x.png", "iphone", "2x", "20x20", 40),
    ios("Icon-App-20x20@3x.png", "iphone", "3x", "20x20", 60),
    ios("Icon-App-29x29@1x.png", "iphone", "1x", "29x29", 29),
    ios("Icon-App-29x29@2x.png", "iphone", "2x", "29x29", 58),
    ios("Icon-App-29x29@3x.png", "iphone", "3x", "29x29", 87),
    ios("Icon-App-40x40@1x.png", "iphone", "1x", "40x40", 40),
    ios("Icon-App-40x40@2x.png", "iphone", "2x", "40x40", 80),
    ios("Icon-App-40x40@3x.png", "iphone", "3x", "40x40", 120),
    ios("Icon-App-60x60@2x.png", "iphone", "2x", "60x60", 120),
    ios("Icon-App-60x60@3x.png", "iphone", "3x", "60x60", 180),
    ios("Icon-App-76x76@1x.png", "ipad", "1x", "76x76", 76),
    ios("Icon-App-76x76@2x.png", "ipad", "2x", "76x76", 152),
    ios("Icon-App-83.5x83.5@2x.png", "ipad", "2x", "83.5x83.5", 167),
    ios("Icon-App-1024x1024@1x.png", "ios-marketing", "1x", "1024x1024", 1024),
];

const ADAPTIVE_ICON_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/ic_launcher_background"/>
    <foreground android:drawable="@mipmap/ic_launcher_foreground"/>
</adaptive-icon>
"#;

#[derive(serde::Serialize)]
struct ContentsJson<'a> {
    images: &'a [IosIcon],
    info: ContentsInfo,
}

#[derive(serde::Serialize)]
struct ContentsInfo {
    author: &'static str,
    version: u32,
}

/// Scale `source` to fit inside `target`×`target` (never enlarging) and centre it on a square
/// filled with `background`, or on a transparent square when `background` is `None`.
pub fn resize_with_padding(
    source: &RgbaImage,
    target: u32,
    background: Option<Rgba8>,
) -> IconResult<RgbaImage> {
    if target == 0 {
        return Err(IconError::validation("launcher icon size must be > 0"));
    }
    let (sw, sh) = source.dimensions();
    if sw == 0 || sh == 0 {
        return Err(IconError::validation("source image is empty"));
    }

    let scale = (f64::from(target) / f64::from(sw.max(sh))).min(1.0);
    let nw = ((f64::from(sw) * scale).round() as u32).clamp(1, target);
    let nh = ((f64::from(sh) * scale).round() as u32).clamp(1, target);
    let resized = if (nw, nh) == (sw, sh) {
        source.clone()
    } else {
        image::imageops::resize(source, nw, nh, FilterType::Lanczos3)
    };

    let fill = background.map_or(image::Rgba([0, 0, 0, 0]), |c| {
        image::Rgba([c.r, c.g, c.b, 255])
    });
    let mut out = RgbaImage::from_pixel(target, target, fill);
    image::imageops::overlay(
        &mut out,
        &resized,
        i64::from((target - nw) / 2),
        i64::from((target - nh) / 2),
    );
    Ok(out)
}

/// `Contents.json` for the iOS app icon set.
pub fn ios_contents_json() -> IconResult<String> {
    let contents = ContentsJson {
        images: &IOS_ICONS,
        info: ContentsInfo {
            author: "xcode",
            version: 1,
        },
    };
    serde_json::to_string_pretty(&contents)
        .map_err(|e| IconError::encode(format!("Contents.json: {e}")))
}

/// `values/colors.xml` declaring the adaptive icon background.
pub fn colors_xml(background: Rgba8) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n    \
         <color name=\"ic_launcher_background\">{}</color>\n</resources>\n",
        background.to_hex_rgb()
    )
}

/// Write the full Android + iOS launcher set below `out_root`, creating directories as needed.
///
/// Returns every file written, in write order.
#[tracing::instrument(skip_all, fields(source = %source.display(), out_root = %out_root.display()))]
pub fn write_launcher_icons(
    source: &Path,
    out_root: &Path,
    background: Rgba8,
) -> IconResult<Vec<PathBuf>> {
    let src = image::open(source)
        .with_context(|| format!("open source image '{}'", source.display()))?
        .to_rgba8();

    let mut written = Vec::new();
    let res = out_root.join(ANDROID_RES_DIR);

    for (density, size) in ANDROID_LAUNCHER_SIZES {
        let dir = ensure_dir(&res.join(format!("mipmap-{density}")))?;
        let icon = resize_with_padding(&src, size, Some(background))?;
        for name in ["ic_launcher.png", "ic_launcher_round.png"] {
            written.push(save_png(&icon, &dir.join(name))?);
        }
    }

    for (density, size) in ANDROID_FOREGROUND_SIZES {
        let dir = ensure_dir(&res.join(format!("mipmap-{density}")))?;
        let fg = resize_with_padding(&src, size, None)?;
        written.push(save_png(&fg, &dir.join("ic_launcher_foreground.png"))?);
    }

    let generated = ensure_dir(&out_root.join(GENERATED_DIR))?;
    let fg = resize_with_padding(&src, ADAPTIVE_FOREGROUND_MASTER, None)?;
    written.push(save_png(&fg, &generated.join("foreground.png"))?);
    let bg = RgbaImage::from_pixel(
        ADAPTIVE_BACKGROUND_MASTER,
        ADAPTIVE_BACKGROUND_MASTER,
        image::Rgba([background.r, background.g, background.b, 255]),
    );
    written.push(save_png(&bg, &generated.join("background.png"))?);

    let anydpi = ensure_dir(&res.join("mipmap-anydpi-v26"))?;
    for name in ["ic_launcher.xml", "ic_launcher_round.xml"] {
        written.push(write_text(&anydpi.join(name), ADAPTIVE_ICON_XML)?);
    }
    let values = ensure_dir(&res.join("values"))?;
    written.push(write_text(&values.join("colors.xml"), &colors_xml(background))?);

    let ios_dir = ensure_dir(&out_root.join(IOS_APPICON_DIR))?;
    for icon in &IOS_ICONS {
        let img = resize_with_padding(&src, icon.pixels, Some(background))?;
        written.push(save_png(&img, &ios_dir.join(icon.filename))?);
    }
    written.push(write_text(
        &ios_dir.join("Contents.json"),
        &ios_contents_json()?,
    )?);

    tracing::debug!(files = written.len(), "wrote launcher icon set");
    Ok(written)
}

fn ensure_dir(dir: &Path) -> IconResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(dir.to_path_buf())
}

fn save_png(img: &RgbaImage, path: &Path) -> IconResult<PathBuf> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(path.to_path_buf())
}

fn write_text(path: &Path, contents: &str) -> IconResult<PathBuf> {
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
#[path = "../../tests/unit/export/launcher.rs"]
mod tests;
