use std::sync::Arc;

use crate::{
    assets::font::PreparedFont,
    assets::text::{MonogramLayout, TextLayoutEngine},
    design::IconDesign,
    foundation::core::{Affine, BezPath, Canvas, Point, Rgba8},
    foundation::error::{IconError, IconResult},
    render::FrameRGBA,
    render::gradient::linear_gradient_premul,
};

/// Outline stroke width, relative to the font size, used when a bold face has to be synthesized.
const FAUX_BOLD_STROKE: f64 = 1.0 / 32.0;

/// Render the icon into premultiplied RGBA8.
///
/// Without a font the monogram is skipped; every other layer is drawn.
#[tracing::instrument(skip_all, fields(width = design.canvas.width, height = design.canvas.height))]
pub fn render_icon(design: &IconDesign, font: Option<&PreparedFont>) -> IconResult<FrameRGBA> {
    let (w, h) = surface_size(design.canvas)?;
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    // Background: the gradient only exists inside the rounded rect, everything else stays clear.
    let (from, to) = design.gradient_axis;
    let gradient = linear_gradient_premul(
        design.canvas,
        from,
        to,
        design.gradient_start,
        design.gradient_end,
    )?;
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(premul_bytes_to_image(&gradient, design.canvas)?);
    ctx.fill_path(&bezpath_to_cpu(&design.background_path()));

    match font {
        Some(font) => {
            let mut engine = TextLayoutEngine::new();
            let m = &design.monogram;
            let shaped = engine.layout_line(&m.text, font, m.size_px, m.bold, m.color)?;
            draw_text(&mut ctx, &shaped, m.anchor);
        }
        None => tracing::warn!("no font available; rendering icon without monogram"),
    }

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(design.accent));
    ctx.fill_path(&bezpath_to_cpu(&design.arrow_path()));
    ctx.fill_path(&bezpath_to_cpu(&design.arrow_circle_path()));

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: design.canvas.width,
        height: design.canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

/// Anti-aliased coverage of `path` on `canvas`, one byte per pixel.
pub fn rasterize_coverage(path: &BezPath, canvas: Canvas) -> IconResult<Vec<u8>> {
    let (w, h) = surface_size(canvas)?;
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    ctx.fill_path(&bezpath_to_cpu(path));

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(pixmap
        .data_as_u8_slice()
        .chunks_exact(4)
        .map(|px| px[3])
        .collect())
}

fn draw_text(ctx: &mut vello_cpu::RenderContext, shaped: &MonogramLayout, anchor: Point) {
    let origin = affine_to_cpu(Affine::translate(shaped.offset_for_center(anchor)));

    for line in shaped.layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                continue;
            };

            // Glyph ids are only valid for the face parley shaped this run with.
            let run = glyph_run.run();
            let font_size = run.font_size();
            let synthesis = run.synthesis();
            let glyph_transform = synthesis
                .skew()
                .map(|deg| Affine::skew(-f64::from(deg.to_radians().tan()), 0.0))
                .unwrap_or(Affine::IDENTITY);
            let glyphs = || {
                glyph_run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                })
            };

            let brush = glyph_run.style().brush;
            ctx.set_transform(origin);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            ctx.glyph_run(run.font())
                .font_size(font_size)
                .glyph_transform(affine_to_cpu(glyph_transform))
                .fill_glyphs(glyphs());

            if synthesis.embolden() {
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(
                    f64::from(font_size) * FAUX_BOLD_STROKE,
                ));
                ctx.glyph_run(run.font())
                    .font_size(font_size)
                    .glyph_transform(affine_to_cpu(glyph_transform))
                    .stroke_glyphs(glyphs());
            }
        }
    }
}

fn surface_size(canvas: Canvas) -> IconResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| IconError::render("surface width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| IconError::render("surface height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(IconError::render("surface must be at least 1x1"));
    }
    Ok((w, h))
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premul_bytes_to_image(rgba8_premul: &[u8], canvas: Canvas) -> IconResult<vello_cpu::Image> {
    let (w, h) = surface_size(canvas)?;
    if rgba8_premul.len() != canvas.byte_len() {
        return Err(IconError::render("premultiplied byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(canvas.pixel_count());
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
