use super::*;
use crate::{
    foundation::table::Column,
    render::backend::{FieldSelectors, RenderOptions},
};

fn table() -> Table {
    Table::new(vec![
        Column::new("land", ["NL", "BE", "NL"]),
        Column::new("jaar", [2020, 2020, 2021]),
        Column::new("waarde", [1, 2, 3]),
    ])
    .unwrap()
}

fn render(
    kind: ChartKind,
    table: &Table,
    selectors: &FieldSelectors,
    colors: &[String],
    options: &RenderOptions,
) -> Value {
    FigureRenderer::new()
        .render(&RenderRequest {
            kind,
            data: table,
            selectors,
            colors,
            options,
            pivot: None,
        })
        .unwrap()
        .to_description()
        .unwrap()
}

fn colors(n: usize) -> Vec<String> {
    crate::theme::allocate::government_colors(n).unwrap()
}

#[test]
fn bar_emits_one_trace_per_group_in_first_seen_order() {
    let t = table();
    let sel = FieldSelectors {
        x: Some("jaar".into()),
        y: Some("waarde".into()),
        color: Some("land".into()),
        ..FieldSelectors::default()
    };
    let fig = render(ChartKind::Bar, &t, &sel, &colors(3), &RenderOptions::default());
    let data = fig["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "NL");
    assert_eq!(data[0]["x"], json!([2020, 2021]));
    assert_eq!(data[0]["marker"]["color"], "#CA005D");
    assert_eq!(data[1]["marker"]["color"], "#76D2B6");
    assert_eq!(fig["layout"]["plot_bgcolor"], "white");
    assert_eq!(fig["layout"]["xaxis"]["title"]["text"], "jaar");
}

#[test]
fn line_traces_paint_the_line() {
    let t = table();
    let sel = FieldSelectors {
        x: Some("jaar".into()),
        y: Some("waarde".into()),
        color: Some("land".into()),
        ..FieldSelectors::default()
    };
    let fig = render(ChartKind::Line, &t, &sel, &colors(2), &RenderOptions::default());
    assert_eq!(fig["data"][0]["mode"], "lines");
    assert_eq!(fig["data"][1]["line"]["color"], "#76D2B6");
}

#[test]
fn pie_maps_slice_colors_by_name() {
    let t = table();
    let sel = FieldSelectors {
        names: Some("land".into()),
        value: Some("waarde".into()),
        ..FieldSelectors::default()
    };
    let fig = render(ChartKind::Pie, &t, &sel, &colors(2), &RenderOptions::default());
    assert_eq!(
        fig["data"][0]["marker"]["colors"],
        json!(["#CA005D", "#76D2B6", "#CA005D"])
    );
    assert!(fig["layout"].get("xaxis").is_none());
}

#[test]
fn histogram_defaults_y_axis_title_to_count() {
    let t = table();
    let sel = FieldSelectors {
        x: Some("waarde".into()),
        ..FieldSelectors::default()
    };
    let opts = RenderOptions {
        nbins: Some(10),
        ..RenderOptions::default()
    };
    let fig = render(ChartKind::Histogram, &t, &sel, &colors(1), &opts);
    assert_eq!(fig["data"][0]["nbinsx"], 10);
    assert_eq!(fig["layout"]["yaxis"]["title"]["text"], "count");
}

#[test]
fn heatmap_builds_colorscale_from_pivot() {
    let t = table();
    let pivot = t.pivot("jaar", "land", "waarde").unwrap();
    let sel = FieldSelectors {
        x: Some("jaar".into()),
        y: Some("land".into()),
        value: Some("waarde".into()),
        ..FieldSelectors::default()
    };
    let scale = vec!["#DCE3EA".to_string(), "#154273".to_string()];
    let opts = RenderOptions::default();
    let fig = FigureRenderer::new()
        .render(&RenderRequest {
            kind: ChartKind::Heatmap,
            data: &t,
            selectors: &sel,
            colors: &scale,
            options: &opts,
            pivot: Some(&pivot),
        })
        .unwrap()
        .to_description()
        .unwrap();
    let trace = &fig["data"][0];
    assert_eq!(trace["z"], json!([[1, 3], [2, null]]));
    assert_eq!(
        trace["colorscale"],
        json!([[0.0, "#DCE3EA"], [1.0, "#154273"]])
    );
}

#[test]
fn heatmap_without_pivot_is_a_render_error() {
    let t = table();
    let sel = FieldSelectors::default();
    let opts = RenderOptions::default();
    let scale = colors(1);
    let err = FigureRenderer::new()
        .render(&RenderRequest {
            kind: ChartKind::Heatmap,
            data: &t,
            selectors: &sel,
            colors: &scale,
            options: &opts,
            pivot: None,
        })
        .unwrap_err();
    assert!(matches!(err, ChartError::Render(_)));
}

#[test]
fn table_bands_rows_when_band_colors_given() {
    let t = table();
    let sel = FieldSelectors {
        columns: vec!["land".into(), "jaar".into()],
        ..FieldSelectors::default()
    };
    let opts = RenderOptions {
        headers: vec!["Land".into(), "Jaar".into()],
        band_colors: vec!["#FFFFFF".into(), "#DCE3EA".into()],
        ..RenderOptions::default()
    };
    let fig = render(ChartKind::Table, &t, &sel, &[], &opts);
    let trace = &fig["data"][0];
    assert_eq!(trace["header"]["values"], json!(["Land", "Jaar"]));
    assert_eq!(
        trace["cells"]["fill"]["color"][1],
        json!(["#FFFFFF", "#DCE3EA", "#FFFFFF"])
    );
}

#[test]
fn custom_kind_is_never_rendered() {
    let t = table();
    let sel = FieldSelectors::default();
    let opts = RenderOptions::default();
    let result = FigureRenderer::new().render(&RenderRequest {
        kind: ChartKind::Custom,
        data: &t,
        selectors: &sel,
        colors: &[],
        options: &opts,
        pivot: None,
    });
    assert!(result.is_err());
}

#[test]
fn rendering_is_deterministic() {
    let t = table();
    let sel = FieldSelectors {
        x: Some("jaar".into()),
        y: Some("waarde".into()),
        color: Some("land".into()),
        ..FieldSelectors::default()
    };
    let a = render(ChartKind::Box, &t, &sel, &colors(2), &RenderOptions::default());
    let b = render(ChartKind::Box, &t, &sel, &colors(2), &RenderOptions::default());
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn background_can_be_overridden() {
    let t = table();
    let sel = FieldSelectors {
        x: Some("jaar".into()),
        y: Some("waarde".into()),
        ..FieldSelectors::default()
    };
    let opts = RenderOptions::default();
    let fig = FigureRenderer::new()
        .with_background("#F3F3F3")
        .render(&RenderRequest {
            kind: ChartKind::Scatter,
            data: &t,
            selectors: &sel,
            colors: &colors(1),
            options: &opts,
            pivot: None,
        })
        .unwrap()
        .to_description()
        .unwrap();
    assert_eq!(fig["layout"]["plot_bgcolor"], "#F3F3F3");
}
