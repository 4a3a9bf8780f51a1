use super::*;
use crate::foundation::table::Column;

#[derive(Debug)]
struct Fixed;

impl VisualHandle for Fixed {
    fn to_description(&self) -> ChartResult<serde_json::Value> {
        Ok(serde_json::json!({"fixed": true}))
    }
}

#[test]
fn image_bytes_are_unsupported_by_default() {
    let err = Fixed.to_image_bytes(ImageFormat::Png).unwrap_err();
    assert!(matches!(err, ChartError::Render(_)));
    assert!(err.to_string().contains("png"));
}

#[test]
fn figure_renderer_is_available() {
    let renderer = create_renderer(RendererKind::Figure).unwrap();
    let table = Table::new(vec![
        Column::new("x", [1, 2]),
        Column::new("y", [3, 4]),
    ])
    .unwrap();
    let selectors = FieldSelectors {
        x: Some("x".into()),
        y: Some("y".into()),
        ..FieldSelectors::default()
    };
    let colors = vec!["#CA005D".to_string()];
    let options = RenderOptions::default();
    let visual = renderer
        .render(&RenderRequest {
            kind: ChartKind::Scatter,
            data: &table,
            selectors: &selectors,
            colors: &colors,
            options: &options,
            pivot: None,
        })
        .unwrap();
    let desc = visual.to_description().unwrap();
    assert!(desc["data"].is_array());
    assert!(desc["layout"].is_object());
}
