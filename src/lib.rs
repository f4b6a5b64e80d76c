//! Procedural renderer for the CoachGuru app icon.
//!
//! The icon is one fixed 1024×1024 graphic: a diagonal navy-to-blue gradient cut to a rounded
//! square, a white `CG` monogram in the centre and a small orange arrow with a circle. It is drawn
//! on the CPU with `vello_cpu` and written as a straight-alpha RGBA PNG.
//!
//! - [`IconDesign`] holds the numbers.
//! - [`render_icon`] turns them into a premultiplied [`FrameRGBA`].
//! - [`write_png`] stores a frame; [`write_favicons`], [`write_circular_logo`] and
//!   [`write_launcher_icons`] derive the secondary web, avatar and mobile launcher assets from an
//!   existing PNG.
#![forbid(unsafe_code)]

mod assets;
mod design;
mod export;
mod foundation;
mod render;

pub use assets::font::{
    FONT_ENV_VAR, FontSource, PreparedFont, load_font_bytes, load_font_file, pick_bold_sans,
    resolve_font,
};
pub use assets::text::{MonogramLayout, TextBrushRgba8, TextLayoutEngine};
pub use design::{DEFAULT_OUTPUT, IconDesign, Monogram, PATH_TOLERANCE};
pub use export::circle::{DEFAULT_CIRCLE_SIZE, circular_logo, write_circular_logo};
pub use export::favicon::{
    FAVICON_ICO_SIZE, FAVICON_PNG_SIZE, FaviconPaths, favicon_images, write_favicons,
};
pub use export::launcher::{
    ANDROID_FOREGROUND_SIZES, ANDROID_LAUNCHER_SIZES, DEFAULT_LAUNCHER_BACKGROUND, IOS_ICONS,
    IosIcon, colors_xml, ios_contents_json, resize_with_padding, write_launcher_icons,
};
pub use export::png::{encode_png, write_png};
pub use foundation::core::{
    Affine, BezPath, Canvas, Circle, Point, Rect, Rgba8, Rgba8Premul, RoundedRect, Vec2,
    premultiply_rgba8_in_place, unpremultiply_rgba8_in_place,
};
pub use foundation::error::{IconError, IconResult};
pub use render::FrameRGBA;
pub use render::cpu::{rasterize_coverage, render_icon};
pub use render::gradient::linear_gradient_premul;
