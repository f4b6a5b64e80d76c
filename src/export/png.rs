use std::{io::Cursor, path::Path};

use anyhow::Context;

use crate::{
    foundation::error::{IconError, IconResult},
    render::FrameRGBA,
};

/// Encode a frame as an RGBA8 PNG with straight alpha.
pub fn encode_png(frame: &FrameRGBA) -> IconResult<Vec<u8>> {
    let straight = frame.clone().into_straight();
    let (width, height) = (straight.width, straight.height);
    let img = image::RgbaImage::from_raw(width, height, straight.data).ok_or_else(|| {
        IconError::encode(format!(
            "frame buffer does not match {width}x{height} RGBA8"
        ))
    })?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| IconError::encode(format!("png: {e}")))?;
    Ok(out.into_inner())
}

/// Encode `frame` and write it to `path`.
///
/// The parent directory must already exist.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> IconResult<()> {
    let bytes = encode_png(frame)?;
    std::fs::write(path, &bytes).with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
