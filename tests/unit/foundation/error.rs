use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SplitError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SplitError::xml("x").to_string().contains("xml error:"));
    assert!(
        SplitError::document("x")
            .to_string()
            .contains("document error:")
    );
    assert!(
        SplitError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SplitError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn xml_parse_failures_convert() {
    let err: SplitError = roxmltree::Document::parse("<svg").unwrap_err().into();
    assert!(matches!(err, SplitError::Xml(_)));
}

#[test]
fn json_failures_convert() {
    let err: SplitError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(err.to_string().starts_with("serialization error:"));
}
