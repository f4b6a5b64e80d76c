use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use usvg::fontdb;

use crate::foundation::error::{IconError, IconResult};

/// Environment variable naming a font file to use for the monogram.
pub const FONT_ENV_VAR: &str = "COACHGURU_ICON_FONT";

/// Families tried, in order, before falling back to generic sans-serif.
const PREFERRED_FAMILIES: [&str; 4] = ["Arial", "Helvetica", "Liberation Sans", "DejaVu Sans"];

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where the monogram font comes from.
pub enum FontSource {
    /// A font file (TTF/OTF/TTC) on disk.
    Path(PathBuf),
    /// The host's installed fonts.
    System,
}

impl FontSource {
    /// Explicit path wins, then [`FONT_ENV_VAR`], then system fonts.
    pub fn resolve_config(explicit: Option<PathBuf>) -> Self {
        if let Some(p) = explicit {
            return Self::Path(p);
        }
        match std::env::var_os(FONT_ENV_VAR) {
            Some(v) if !v.is_empty() => Self::Path(PathBuf::from(v)),
            _ => Self::System,
        }
    }
}

impl std::fmt::Display for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(p) => write!(f, "file '{}'", p.display()),
            Self::System => f.write_str("system fonts"),
        }
    }
}

#[derive(Clone)]
/// A single font face ready for shaping and rasterization.
pub struct PreparedFont {
    /// Raw bytes of the whole font file (a collection may hold several faces).
    pub bytes: Arc<Vec<u8>>,
    /// Face index inside `bytes`.
    pub index: u32,
    /// Primary family name reported by the face.
    pub family: String,
    /// CSS-style weight of the face (400 regular, 700 bold).
    pub weight: u16,
}

impl std::fmt::Debug for PreparedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("family", &self.family)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Resolve the monogram font.
///
/// A `Path` source must yield a usable face. A `System` source returns `Ok(None)` when the host
/// has no fonts installed at all.
#[tracing::instrument]
pub fn resolve_font(source: &FontSource) -> IconResult<Option<PreparedFont>> {
    match source {
        FontSource::Path(p) => load_font_file(p).map(Some),
        FontSource::System => {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system font database");
            Ok(pick_bold_sans(&db).and_then(|id| prepare_face(&db, id)))
        }
    }
}

/// Load a font file from disk and pick its boldest face.
pub fn load_font_file(path: &Path) -> IconResult<PreparedFont> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read font file '{}'", path.display()))?;
    load_font_bytes(bytes)
        .map_err(|e| IconError::font(format!("font file '{}': {e}", path.display())))
}

/// Parse in-memory font data and pick its boldest face.
pub fn load_font_bytes(bytes: Vec<u8>) -> IconResult<PreparedFont> {
    let mut db = fontdb::Database::new();
    db.load_font_data(bytes);
    let id = db
        .faces()
        .min_by_key(|f| f.weight.0.abs_diff(fontdb::Weight::BOLD.0))
        .map(|f| f.id)
        .ok_or_else(|| IconError::font("no font faces found in data"))?;
    prepare_face(&db, id).ok_or_else(|| IconError::font("font face data is unavailable"))
}

/// Choose a bold sans-serif face from `db`.
///
/// Named families are preferred, then the generic sans-serif family, then any bold face, then any
/// face at all.
pub fn pick_bold_sans(db: &fontdb::Database) -> Option<fontdb::ID> {
    let bold = |family: fontdb::Family<'_>| {
        let families = [family];
        db.query(&fontdb::Query {
            families: &families,
            weight: fontdb::Weight::BOLD,
            ..fontdb::Query::default()
        })
    };

    PREFERRED_FAMILIES
        .iter()
        .find_map(|&name| bold(fontdb::Family::Name(name)))
        .or_else(|| bold(fontdb::Family::SansSerif))
        .or_else(|| {
            db.faces()
                .find(|f| f.weight.0 >= fontdb::Weight::BOLD.0)
                .map(|f| f.id)
        })
        .or_else(|| db.faces().next().map(|f| f.id))
}

fn prepare_face(db: &fontdb::Database, id: fontdb::ID) -> Option<PreparedFont> {
    let info = db.face(id)?;
    let family = info
        .families
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| info.post_script_name.clone());
    let weight = info.weight.0;
    let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;

    tracing::debug!(%family, weight, index, "resolved monogram font");
    Some(PreparedFont {
        bytes: Arc::new(bytes),
        index,
        family,
        weight,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
