use super::*;
use crate::{
    foundation::error::ChartError,
    foundation::table::Column,
    render::figure::FigureRenderer,
    theme::allocate::government_colors,
};

fn sectoren() -> Table {
    let letters: Vec<String> = ('A'..='U').map(|c| c.to_string()).collect();
    let uitstroom: [i64; 21] = [
        63589, 7615, 689794, 22133, 34755, 335913, 894066, 304780, 162482, 198830, 234537, 57592,
        409602, 493306, 472004, 398288, 884573, 74078, 103002, 12192, 630,
    ];
    Table::new(vec![
        Column::new("sectoren", letters),
        Column::new("uitstroom", uitstroom),
    ])
    .unwrap()
}

fn series() -> Table {
    Table::new(vec![
        Column::new("jaar", [2020, 2021, 2020, 2021, 2020, 2021]),
        Column::new("waarde", [1.5, 2.0, 3.0, 2.5, 4.0, 1.0]),
        Column::new("regio", ["Noord", "Noord", "Zuid", "Zuid", "Oost", "Oost"]),
    ])
    .unwrap()
}

#[test]
fn bar_allocates_one_color_per_row() {
    let chart = BarChart::new(
        sectoren(),
        BarConfig::new("sectoren", "uitstroom", "sectoren"),
        &FigureRenderer::new(),
    )
    .unwrap();
    assert_eq!(chart.colors().len(), 21);
    assert_eq!(chart.colors(), government_colors(21).unwrap().as_slice());
}

#[test]
fn bar_with_explicit_colors_cycles_them() {
    let mut cfg = BarConfig::new("sectoren", "uitstroom", "sectoren");
    cfg.colors = Some(vec!["#154273".into(), "#8FA6BB".into()]);
    let chart = BarChart::new(sectoren(), cfg, &FigureRenderer::new()).unwrap();
    assert_eq!(chart.colors().len(), 21);
    assert_eq!(chart.colors()[2], "#154273");
    assert_eq!(chart.colors()[3], "#8FA6BB");
}

#[test]
fn bar_rejects_empty_explicit_colors() {
    let mut cfg = BarConfig::new("sectoren", "uitstroom", "sectoren");
    cfg.colors = Some(Vec::new());
    let err = BarChart::new(sectoren(), cfg, &FigureRenderer::new()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyPalette(_)));
}

#[test]
fn bar_rejects_unknown_selector() {
    let err = BarChart::new(
        sectoren(),
        BarConfig::new("sectoren", "instroom", "sectoren"),
        &FigureRenderer::new(),
    )
    .unwrap_err();
    let ChartError::UnknownField { field, available } = err else {
        panic!("expected UnknownField");
    };
    assert_eq!(field, "instroom");
    assert!(available.contains("uitstroom"));
}

#[test]
fn bar_exports_selectors_and_dataframe() {
    let chart = BarChart::new(
        sectoren(),
        BarConfig::new("sectoren", "uitstroom", "sectoren"),
        &FigureRenderer::new(),
    )
    .unwrap();
    let params = chart.export_parameters();
    let keys: Vec<&str> = params.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "chartType",
            "dataframe",
            "length",
            "columns",
            "colors",
            "columnToColor",
            "x",
            "y"
        ]
    );
    assert_eq!(params["chartType"], "bar");
    assert_eq!(params["length"], 21);
    assert_eq!(params["dataframe"]["sectoren"]["20"], "U");
    assert_eq!(params["dataframe"]["uitstroom"]["0"], 63589);
}

#[test]
fn pie_counts_distinct_names() {
    let chart = PieChart::new(
        sectoren(),
        PieConfig::new("uitstroom", "sectoren"),
        &FigureRenderer::new(),
    )
    .unwrap();
    assert_eq!(chart.colors().len(), 21);
    let params = chart.export_parameters();
    assert_eq!(params["names"], "sectoren");
    assert_eq!(params["values"], "uitstroom");
    assert_eq!(params["columnToColor"], "sectoren");
}

#[test]
fn line_uses_one_color_per_series() {
    let chart = LineChart::new(
        series(),
        LineConfig::new("jaar", "waarde", "regio"),
        &FigureRenderer::new(),
    )
    .unwrap();
    assert_eq!(chart.colors(), government_colors(3).unwrap().as_slice());
    let fig = chart.visual().to_description().unwrap();
    assert_eq!(fig["data"].as_array().unwrap().len(), 3);
}

#[test]
fn box_counts_groups_and_exports_optional_y() {
    let without_y = BoxChart::new(
        series(),
        BoxConfig::new("waarde", "regio"),
        &FigureRenderer::new(),
    )
    .unwrap();
    assert_eq!(without_y.colors().len(), 3);
    assert!(without_y.export_parameters().get("y").is_none());

    let with_y = BoxChart::new(
        series(),
        BoxConfig::new("regio", "regio").y("waarde"),
        &FigureRenderer::new(),
    )
    .unwrap();
    assert_eq!(with_y.export_parameters()["y"], "waarde");
}

#[test]
fn sunburst_allocates_per_row() {
    let table = Table::new(vec![
        Column::new("naam", ["Nederland", "Noord", "Zuid", "Groningen"]),
        Column::new(
            "ouder",
            [None, Some("Nederland"), Some("Nederland"), Some("Noord")],
        ),
        Column::new("inwoners", [17, 4, 6, 1]),
    ])
    .unwrap();
    let chart = SunburstChart::new(
        table,
        SunburstConfig::new("naam", "ouder", "inwoners", "naam"),
        &FigureRenderer::new(),
    )
    .unwrap();
    assert_eq!(chart.colors().len(), 4);
    let params = chart.export_parameters();
    assert_eq!(params["chartType"], "sunburst");
    assert_eq!(params["values"], "inwoners");
    assert_eq!(params["dataframe"]["ouder"]["0"], serde_json::Value::Null);
}

#[test]
fn title_is_exported_only_when_set() {
    let mut cfg = LineConfig::new("jaar", "waarde", "regio");
    let untitled = LineChart::new(series(), cfg.clone(), &FigureRenderer::new()).unwrap();
    assert!(untitled.export_parameters().get("title").is_none());

    cfg.title = Some("Waarde per regio".into());
    let titled = LineChart::new(series(), cfg, &FigureRenderer::new()).unwrap();
    assert_eq!(titled.export_parameters()["title"], "Waarde per regio");
}

#[test]
fn descriptors_keep_their_config_and_table() {
    let renderer = FigureRenderer::new();
    let bar_cfg = BarConfig::new("sectoren", "uitstroom", "sectoren");
    let bar = BarChart::new(sectoren(), bar_cfg.clone(), &renderer).unwrap();
    assert_eq!(bar.config(), &bar_cfg);
    assert_eq!(bar.table(), &sectoren());

    let pie_cfg = PieConfig::new("uitstroom", "sectoren");
    let pie = PieChart::new(sectoren(), pie_cfg.clone(), &renderer).unwrap();
    assert_eq!(pie.config(), &pie_cfg);

    let line_cfg = LineConfig::new("jaar", "waarde", "regio");
    let line = LineChart::new(series(), line_cfg.clone(), &renderer).unwrap();
    assert_eq!(line.config(), &line_cfg);
    assert_eq!(line.table().row_count(), 6);

    let box_cfg = BoxConfig::new("waarde", "regio");
    let boxed = BoxChart::new(series(), box_cfg.clone(), &renderer).unwrap();
    assert_eq!(boxed.config(), &box_cfg);

    let sun_cfg = SunburstConfig::new("regio", "jaar", "waarde", "regio");
    let sun = SunburstChart::new(series(), sun_cfg.clone(), &renderer).unwrap();
    assert_eq!(sun.config(), &sun_cfg);
}
