use super::*;

#[test]
fn explicit_path_beats_env_and_system() {
    let src = FontSource::resolve_config(Some(PathBuf::from("fonts/Bold.ttf")));
    assert_eq!(src, FontSource::Path(PathBuf::from("fonts/Bold.ttf")));
}

#[test]
fn missing_font_file_is_an_error() {
    let err = resolve_font(&FontSource::Path(PathBuf::from(
        "target/does-not-exist/font.ttf",
    )))
    .unwrap_err();
    assert!(err.to_string().contains("read font file"));
}

#[test]
fn non_font_bytes_are_rejected() {
    let err = load_font_bytes(b"definitely not an sfnt".to_vec()).unwrap_err();
    assert!(matches!(err, IconError::Font(_)));
}

#[test]
fn empty_database_picks_nothing() {
    let db = fontdb::Database::new();
    assert!(pick_bold_sans(&db).is_none());
}

#[test]
fn system_font_when_present_is_loadable() {
    let Some(font) = resolve_font(&FontSource::System).unwrap() else {
        // Hosts without any installed fonts render the icon without a monogram.
        return;
    };
    assert!(!font.bytes.is_empty());
    assert!(!font.family.is_empty());

    let reloaded = load_font_bytes(font.bytes.as_ref().clone()).unwrap();
    assert!(!reloaded.bytes.is_empty());
}

#[test]
fn named_bold_family_wins_over_generic_fallbacks() {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let is_bold_of = |face: &fontdb::FaceInfo, name: &str| {
        face.weight.0 >= fontdb::Weight::BOLD.0
            && face.families.iter().any(|(n, _)| n == name)
    };
    let Some(expected) = PREFERRED_FAMILIES
        .iter()
        .find(|&&name| db.faces().any(|f| is_bold_of(f, name)))
    else {
        // None of the preferred families is installed with a bold face.
        return;
    };

    let id = pick_bold_sans(&db).unwrap();
    let face = db.face(id).unwrap();
    assert!(is_bold_of(face, expected), "picked {:?}", face.families);
}
