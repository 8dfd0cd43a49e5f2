use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VizError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        VizError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(VizError::render("x").to_string().contains("render error:"));
    assert!(
        VizError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_config_variant_reports_is_config() {
    assert!(VizError::config("no sources").is_config());
    assert!(!VizError::validation("x").is_config());
    assert!(!VizError::render("x").is_config());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VizError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
