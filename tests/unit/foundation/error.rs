use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ChartError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ChartError::render("x").to_string().contains("render error:"));
    assert!(
        ChartError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        ChartError::empty_palette("x")
            .to_string()
            .contains("empty palette:")
    );
}

#[test]
fn unknown_field_lists_available_columns() {
    let err = ChartError::unknown_field("sector", ["sectoren", "uitstroom"]);
    let msg = err.to_string();
    assert!(msg.contains("'sector'"));
    assert!(msg.contains("sectoren, uitstroom"));
}

#[test]
fn serde_json_errors_convert_to_serde_variant() {
    let err: ChartError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, ChartError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ChartError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
