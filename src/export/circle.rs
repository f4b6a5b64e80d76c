use std::path::Path;

use anyhow::Context;
use image::{RgbaImage, imageops::FilterType};
use kurbo::Shape as _;

use crate::{
    design::PATH_TOLERANCE,
    foundation::core::{Canvas, Circle, Point},
    foundation::error::{IconError, IconResult},
    render::cpu::rasterize_coverage,
};

/// Default edge length of the circular logo.
pub const DEFAULT_CIRCLE_SIZE: u32 = 512;

/// Share of the circle's diameter taken by the source's shorter side.
const FILL_RATIO: f64 = 0.9;

/// Fit `source` into a `size`×`size` transparent square and cut it to the inscribed circle.
pub fn circular_logo(source: &RgbaImage, size: u32) -> IconResult<RgbaImage> {
    if size == 0 {
        return Err(IconError::validation("circle size must be > 0"));
    }
    let (sw, sh) = source.dimensions();
    let min_side = sw.min(sh);
    if min_side == 0 {
        return Err(IconError::validation("source image is empty"));
    }

    let scale = f64::from(size) * FILL_RATIO / f64::from(min_side);
    let nw = ((f64::from(sw) * scale) as u32).max(1);
    let nh = ((f64::from(sh) * scale) as u32).max(1);
    let resized = image::imageops::resize(source, nw, nh, FilterType::Lanczos3);

    let mut out = RgbaImage::new(size, size);
    let x = (i64::from(size) - i64::from(nw)).div_euclid(2);
    let y = (i64::from(size) - i64::from(nh)).div_euclid(2);
    image::imageops::overlay(&mut out, &resized, x, y);

    let half = f64::from(size) / 2.0;
    let mask = rasterize_coverage(
        &Circle::new(Point::new(half, half), half).to_path(PATH_TOLERANCE),
        Canvas::square(size),
    )?;
    for (px, &m) in out.pixels_mut().zip(&mask) {
        let a = u16::from(px.0[3]);
        px.0[3] = ((a * u16::from(m) + 127) / 255) as u8;
    }

    tracing::debug!(size, resized_w = nw, resized_h = nh, "built circular logo");
    Ok(out)
}

/// Load `source`, build the circular logo and save it as PNG to `out`.
#[tracing::instrument(skip_all, fields(source = %source.display(), out = %out.display(), size = size))]
pub fn write_circular_logo(source: &Path, out: &Path, size: u32) -> IconResult<()> {
    let src = image::open(source)
        .with_context(|| format!("open source image '{}'", source.display()))?
        .to_rgba8();
    let logo = circular_logo(&src, size)?;
    logo.save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/circle.rs"]
mod tests;
