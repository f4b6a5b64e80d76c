use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IconError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(IconError::font("x").to_string().contains("font error:"));
    assert!(IconError::render("x").to_string().contains("render error:"));
    assert!(IconError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = IconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn anyhow_context_converts_with_question_mark() {
    fn open_missing() -> IconResult<()> {
        use anyhow::Context as _;
        std::fs::read("/definitely/not/here.png").context("read source png")?;
        Ok(())
    }

    let err = open_missing().unwrap_err();
    assert!(matches!(err, IconError::Other(_)));
    assert!(err.to_string().contains("read source png"));
}
