use crate::{
    foundation::core::{Canvas, Point, Rgba8},
    foundation::error::{IconError, IconResult},
};

/// Rasterize a two-stop linear gradient into premultiplied RGBA8.
///
/// Each pixel centre is projected onto the `from -> to` axis; the resulting parameter is clamped
/// to `[0, 1]` (pad extend) and channels are interpolated in straight alpha before premultiplying.
pub fn linear_gradient_premul(
    canvas: Canvas,
    from: Point,
    to: Point,
    start: Rgba8,
    end: Rgba8,
) -> IconResult<Vec<u8>> {
    let axis = to - from;
    let len2 = axis.hypot2();
    if !len2.is_finite() || len2 <= f64::EPSILON {
        return Err(IconError::validation(
            "gradient axis must have non-zero length",
        ));
    }

    let mut bytes = vec![0u8; canvas.byte_len()];
    let (w, h) = (canvas.width as usize, canvas.height as usize);
    for y in 0..h {
        let py = (y as f64) + 0.5 - from.y;
        for x in 0..w {
            let px = (x as f64) + 0.5 - from.x;
            let t = ((px * axis.x + py * axis.y) / len2).clamp(0.0, 1.0);
            let c = lerp_rgba(start, end, t).premultiplied();
            let idx = (y * w + x) * 4;
            bytes[idx..idx + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }
    Ok(bytes)
}

fn lerp_rgba(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    let lerp = |a: u8, b: u8| -> u8 {
        let af = f64::from(a);
        let bf = f64::from(b);
        (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgba8 {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
        a: lerp(a.a, b.a),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
