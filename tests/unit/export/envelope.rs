use super::*;
use crate::{
    chart::config::{ChartRequest, HistogramConfig, TableConfig},
    chart::tabular::CustomChart,
    foundation::table::{Column, Table},
    render::figure::{FigureRenderer, FigureVisual},
};
use serde_json::json;

fn table() -> Table {
    Table::new(vec![
        Column::new("waarde", [1.0, 2.5, 2.5, 4.0]),
        Column::new("label", ["a", "b", "c", "d"]),
    ])
    .unwrap()
}

#[test]
fn parameters_shape_for_charts() {
    let chart = Chart::build(
        table(),
        ChartRequest::Histogram(HistogramConfig::new("waarde")),
        &FigureRenderer::new(),
    )
    .unwrap();
    let env = serialize_chart(&chart).unwrap();
    assert_eq!(env.shape(), EnvelopeShape::Parameters);
    assert_eq!(env.chart_type(), Some("histogram"));
    assert_eq!(env.figure_contents(), &chart.visual().to_description().unwrap());

    let value = serde_json::to_value(&env).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["parameters", "figureContents"]);
}

#[test]
fn portal_data_shape_for_tables() {
    let chart = Chart::build(
        table(),
        ChartRequest::Table(TableConfig::new().alternate_row(true)),
        &FigureRenderer::new(),
    )
    .unwrap();
    let env = chart.export().unwrap();
    assert_eq!(env.shape(), EnvelopeShape::PortalData);

    let value = serde_json::to_value(&env).unwrap();
    assert!(value.get("parameters").is_none());
    assert_eq!(value["portalData"]["columns"], json!(["waarde", "label"]));
    assert!(value["portalData"].get("dataframe").is_none());
}

#[test]
fn figure_contents_are_forwarded_untouched() {
    let figure = json!({"data": [{"type": "custom", "nested": {"deep": [1, 2, 3]}}]});
    let chart = CustomChart::new(Box::new(FigureVisual::new(figure.clone())));
    let env = serialize_chart(&chart).unwrap();
    assert_eq!(env.figure_contents(), &figure);
    assert_eq!(env.params()["chartType"], "custom");
}

#[test]
fn json_parses_back_into_the_same_shape() {
    let chart = Chart::build(
        table(),
        ChartRequest::Table(TableConfig::new()),
        &FigureRenderer::new(),
    )
    .unwrap();
    let env = chart.export().unwrap();
    let parsed = ExportEnvelope::from_json(env.to_json_pretty().unwrap().as_bytes()).unwrap();
    assert_eq!(parsed, env);
    assert_eq!(parsed.shape(), EnvelopeShape::PortalData);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ExportEnvelope::from_json(br#"{"figureContents": {}}"#).unwrap_err();
    assert!(matches!(err, crate::foundation::error::ChartError::Serde(_)));
}
