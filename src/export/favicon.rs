use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{RgbaImage, imageops::FilterType};

use crate::foundation::error::{IconError, IconResult};

/// Edge length of `favicon.png`.
pub const FAVICON_PNG_SIZE: u32 = 256;
/// Edge length of the single image inside `favicon.ico`.
pub const FAVICON_ICO_SIZE: u32 = 48;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaviconPaths {
    pub png: PathBuf,
    pub ico: PathBuf,
}

/// Downscale `source` to the PNG and ICO favicon sizes.
pub fn favicon_images(source: &RgbaImage) -> (RgbaImage, RgbaImage) {
    let png = image::imageops::resize(
        source,
        FAVICON_PNG_SIZE,
        FAVICON_PNG_SIZE,
        FilterType::Lanczos3,
    );
    let ico = image::imageops::resize(
        source,
        FAVICON_ICO_SIZE,
        FAVICON_ICO_SIZE,
        FilterType::Lanczos3,
    );
    (png, ico)
}

/// Write `favicon.png` and `favicon.ico` derived from `source` into `out_dir`.
#[tracing::instrument(skip_all, fields(source = %source.display(), out_dir = %out_dir.display()))]
pub fn write_favicons(source: &Path, out_dir: &Path) -> IconResult<FaviconPaths> {
    if !out_dir.is_dir() {
        return Err(IconError::validation(format!(
            "output directory '{}' does not exist",
            out_dir.display()
        )));
    }

    let src = image::open(source)
        .with_context(|| format!("open source image '{}'", source.display()))?
        .to_rgba8();
    tracing::debug!(
        width = src.width(),
        height = src.height(),
        "loaded favicon source"
    );

    let (png, ico) = favicon_images(&src);
    let paths = FaviconPaths {
        png: out_dir.join("favicon.png"),
        ico: out_dir.join("favicon.ico"),
    };

    png.save_with_format(&paths.png, image::ImageFormat::Png)
        .with_context(|| format!("write '{}'", paths.png.display()))?;
    ico.save_with_format(&paths.ico, image::ImageFormat::Ico)
        .with_context(|| format!("write '{}'", paths.ico.display()))?;

    Ok(paths)
}

#[cfg(test)]
#[path = "../../tests/unit/export/favicon.rs"]
mod tests;
