use std::borrow::Cow;

use crate::{
    assets::font::PreparedFont,
    foundation::core::{Point, Rgba8, Vec2},
    foundation::error::{IconError, IconResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// A single shaped line of text plus the metrics needed to anchor it.
pub struct MonogramLayout {
    /// Shaped Parley layout; glyph positions are relative to the layout origin.
    pub layout: parley::Layout<TextBrushRgba8>,
    /// Advance width of the line in pixels.
    pub width: f32,
    /// Distance from the baseline up to the top of the line box.
    pub ascent: f32,
    /// Distance from the baseline down to the bottom of the line box.
    pub descent: f32,
    /// Baseline position inside the layout.
    pub baseline: f32,
}

impl MonogramLayout {
    /// Translation that puts the line's horizontal centre and the middle of its ascent + descent
    /// box on `anchor`.
    ///
    /// Matches a canvas `fillText` with `textAlign = center` and `textBaseline = middle`.
    pub fn offset_for_center(&self, anchor: Point) -> Vec2 {
        let baseline_y = anchor.y + f64::from(self.ascent - self.descent) / 2.0;
        Vec2::new(
            anchor.x - f64::from(self.width) / 2.0,
            baseline_y - f64::from(self.baseline),
        )
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register `font` and return the Parley family name to request it by.
    fn register(&mut self, font: &PreparedFont) -> IconResult<String> {
        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.as_ref().clone()),
            None,
        );

        let mut names = Vec::with_capacity(families.len());
        for (id, _) in &families {
            if let Some(name) = self.font_ctx.collection.family_name(*id) {
                names.push(name.to_string());
            }
        }

        // A collection can carry several families; prefer the one the face was resolved under.
        let exact = names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(&font.family));
        match exact {
            Some(i) => Ok(names.swap_remove(i)),
            None => names
                .into_iter()
                .next()
                .ok_or_else(|| IconError::font("no font families registered from font bytes")),
        }
    }

    /// Shape `text` as a single unwrapped line.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &PreparedFont,
        size_px: f32,
        bold: bool,
        color: Rgba8,
    ) -> IconResult<MonogramLayout> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(IconError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        if text.is_empty() {
            return Err(IconError::validation("text must be non-empty"));
        }

        let family_name = self.register(font)?;
        let weight = if bold {
            parley::style::FontWeight::BOLD
        } else {
            parley::style::FontWeight::NORMAL
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(weight));
        builder.push_default(parley::style::StyleProperty::Brush(color.into()));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let (ascent, descent, baseline) = {
            let line = layout
                .lines()
                .next()
                .ok_or_else(|| IconError::font("text layout produced no lines"))?;
            let m = line.metrics();
            (m.ascent, m.descent, m.baseline)
        };
        let width = layout.width();

        tracing::debug!(text, width, ascent, descent, "shaped text line");
        Ok(MonogramLayout {
            layout,
            width,
            ascent,
            descent,
            baseline,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
