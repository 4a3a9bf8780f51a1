//! Built-in declarative renderer.
//!
//! Emits a Plotly-compatible `{"data": [...], "layout": {...}}` description.
//! It never rasterizes; portals re-render the description themselves.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::{
    chart::kind::ChartKind,
    foundation::error::{ChartError, ChartResult},
    foundation::table::{Cell, CellKey, Table},
    render::backend::{RenderRequest, Renderer, VisualHandle},
    theme::palette::{Intensity, PaletteRegistry},
};

/// A figure description produced by [`FigureRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub struct FigureVisual {
    figure: Value,
}

impl FigureVisual {
    pub fn new(figure: Value) -> Self {
        Self { figure }
    }

    pub fn figure(&self) -> &Value {
        &self.figure
    }
}

impl VisualHandle for FigureVisual {
    fn to_description(&self) -> ChartResult<Value> {
        Ok(self.figure.clone())
    }
}

/// Deterministic renderer producing [`FigureVisual`]s.
#[derive(Clone, Debug)]
pub struct FigureRenderer {
    background: String,
}

impl FigureRenderer {
    pub fn new() -> Self {
        Self {
            background: "white".to_string(),
        }
    }

    /// Override the plot background (default `white`).
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    fn layout(&self, req: &RenderRequest<'_>) -> Value {
        let mut layout = Map::new();
        layout.insert("plot_bgcolor".into(), json!(self.background));
        if let Some(title) = &req.options.title {
            layout.insert("title".into(), json!({ "text": title }));
        }

        let has_axes = !matches!(
            req.kind,
            ChartKind::Pie | ChartKind::Sunburst | ChartKind::Table | ChartKind::Custom
        );
        if has_axes {
            let x_title = req.options.x_label.as_ref().or(req.selectors.x.as_ref());
            let y_title = req
                .options
                .y_label
                .as_deref()
                .or(req.selectors.y.as_deref())
                .or((req.kind == ChartKind::Histogram).then_some("count"));
            layout.insert("xaxis".into(), json!({ "title": { "text": x_title } }));
            layout.insert("yaxis".into(), json!({ "title": { "text": y_title } }));
        }
        if let Some(color) = &req.selectors.color {
            layout.insert("legend".into(), json!({ "title": { "text": color } }));
        }
        if req.kind == ChartKind::Bar {
            layout.insert("barmode".into(), json!("relative"));
        }
        Value::Object(layout)
    }
}

impl Default for FigureRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for FigureRenderer {
    fn render(&self, req: &RenderRequest<'_>) -> ChartResult<Box<dyn VisualHandle>> {
        let traces = match req.kind {
            ChartKind::Bar => grouped_traces(req, "bar", None)?,
            ChartKind::Line => grouped_traces(req, "scatter", Some("lines"))?,
            ChartKind::Box => grouped_traces(req, "box", None)?,
            ChartKind::Scatter if req.selectors.color.is_some() => {
                grouped_traces(req, "scatter", Some("markers"))?
            }
            ChartKind::Scatter => vec![scatter_trace(req)?],
            ChartKind::Pie => vec![pie_trace(req)?],
            ChartKind::Histogram => vec![histogram_trace(req)?],
            ChartKind::Heatmap => vec![heatmap_trace(req)?],
            ChartKind::Sunburst => vec![sunburst_trace(req)?],
            ChartKind::Table => vec![table_trace(req)?],
            ChartKind::Custom => {
                return Err(ChartError::render(
                    "custom charts carry their own visual and are never rendered",
                ));
            }
        };

        tracing::debug!(kind = %req.kind, traces = traces.len(), "rendered figure");
        Ok(Box::new(FigureVisual::new(json!({
            "data": traces,
            "layout": self.layout(req),
        }))))
    }
}

fn selector<'a>(field: &'a Option<String>, role: &str) -> ChartResult<&'a str> {
    field
        .as_deref()
        .ok_or_else(|| ChartError::render(format!("request has no '{role}' selector")))
}

fn column_json(table: &Table, field: &str) -> ChartResult<Vec<Value>> {
    Ok(table.column(field)?.values.iter().map(Cell::to_json).collect())
}

fn rows_json(table: &Table, field: &str, rows: &[usize]) -> ChartResult<Vec<Value>> {
    let col = table.column(field)?;
    Ok(rows.iter().map(|&r| col.values[r].to_json()).collect())
}

/// Row indices per distinct value of `field`, in first-appearance order.
fn groups(table: &Table, field: &str) -> ChartResult<Vec<(String, Vec<usize>)>> {
    let col = table.column(field)?;
    let mut index = BTreeMap::<CellKey, usize>::new();
    let mut out: Vec<(String, Vec<usize>)> = Vec::new();
    for (row, cell) in col.values.iter().enumerate() {
        let slot = *index.entry(cell.key()).or_insert_with(|| {
            out.push((cell.label(), Vec::new()));
            out.len() - 1
        });
        out[slot].1.push(row);
    }
    Ok(out)
}

fn color_at(colors: &[String], i: usize) -> Value {
    if colors.is_empty() {
        Value::Null
    } else {
        json!(colors[i % colors.len()])
    }
}

fn grouped_traces(
    req: &RenderRequest<'_>,
    trace_type: &str,
    mode: Option<&str>,
) -> ChartResult<Vec<Value>> {
    let x = selector(&req.selectors.x, "x")?;
    let color = selector(&req.selectors.color, "color")?;

    groups(req.data, color)?
        .into_iter()
        .enumerate()
        .map(|(gi, (name, rows))| -> ChartResult<Value> {
            let mut trace = Map::new();
            trace.insert("type".into(), json!(trace_type));
            trace.insert("name".into(), json!(name));
            if let Some(mode) = mode {
                trace.insert("mode".into(), json!(mode));
            }
            trace.insert("x".into(), json!(rows_json(req.data, x, &rows)?));
            if let Some(y) = req.selectors.y.as_deref() {
                trace.insert("y".into(), json!(rows_json(req.data, y, &rows)?));
            }
            let paint = if mode == Some("lines") { "line" } else { "marker" };
            trace.insert(paint.into(), json!({ "color": color_at(req.colors, gi) }));
            Ok(Value::Object(trace))
        })
        .collect()
}

fn scatter_trace(req: &RenderRequest<'_>) -> ChartResult<Value> {
    let x = selector(&req.selectors.x, "x")?;
    let y = selector(&req.selectors.y, "y")?;
    let color = if req.colors.len() == 1 {
        color_at(req.colors, 0)
    } else {
        Value::Array(
            (0..req.data.row_count())
                .map(|r| color_at(req.colors, r))
                .collect(),
        )
    };
    Ok(json!({
        "type": "scatter",
        "mode": "markers",
        "x": column_json(req.data, x)?,
        "y": column_json(req.data, y)?,
        "marker": { "color": color },
    }))
}

fn pie_trace(req: &RenderRequest<'_>) -> ChartResult<Value> {
    let names = selector(&req.selectors.names, "names")?;
    let value = selector(&req.selectors.value, "value")?;

    let mut slice_colors = vec![Value::Null; req.data.row_count()];
    for (gi, (_, rows)) in groups(req.data, names)?.into_iter().enumerate() {
        for r in rows {
            slice_colors[r] = color_at(req.colors, gi);
        }
    }
    Ok(json!({
        "type": "pie",
        "labels": column_json(req.data, names)?,
        "values": column_json(req.data, value)?,
        "marker": { "colors": slice_colors },
    }))
}

fn histogram_trace(req: &RenderRequest<'_>) -> ChartResult<Value> {
    let x = selector(&req.selectors.x, "x")?;
    let mut trace = Map::new();
    trace.insert("type".into(), json!("histogram"));
    trace.insert("x".into(), json!(column_json(req.data, x)?));
    if let Some(y) = req.selectors.y.as_deref() {
        trace.insert("y".into(), json!(column_json(req.data, y)?));
        trace.insert("histfunc".into(), json!("sum"));
    }
    if let Some(nbins) = req.options.nbins {
        trace.insert("nbinsx".into(), json!(nbins));
    }
    trace.insert("marker".into(), json!({ "color": color_at(req.colors, 0) }));
    Ok(Value::Object(trace))
}

fn heatmap_trace(req: &RenderRequest<'_>) -> ChartResult<Value> {
    let pivot = req
        .pivot
        .ok_or_else(|| ChartError::render("heatmap request carries no pivot"))?;
    if req.colors.is_empty() {
        return Err(ChartError::render("heatmap needs a non-empty color scale"));
    }

    let last = req.colors.len().saturating_sub(1).max(1) as f64;
    let mut scale: Vec<Value> = req
        .colors
        .iter()
        .enumerate()
        .map(|(i, c)| json!([i as f64 / last, c]))
        .collect();
    if req.colors.len() == 1 {
        scale.push(json!([1.0, req.colors[0]]));
    }

    let z: Vec<Vec<Value>> = pivot
        .z
        .iter()
        .map(|row| row.iter().map(Cell::to_json).collect())
        .collect();
    Ok(json!({
        "type": "heatmap",
        "x": pivot.x_labels.iter().map(Cell::to_json).collect::<Vec<_>>(),
        "y": pivot.y_labels.iter().map(Cell::to_json).collect::<Vec<_>>(),
        "z": z,
        "colorscale": scale,
    }))
}

fn sunburst_trace(req: &RenderRequest<'_>) -> ChartResult<Value> {
    let labels = selector(&req.selectors.x, "x")?;
    let parents = selector(&req.selectors.y, "y")?;
    let value = selector(&req.selectors.value, "value")?;

    // Roots have no parent; Plotly expects an empty string there.
    let parents: Vec<Value> = req
        .data
        .column(parents)?
        .values
        .iter()
        .map(|c| if c.is_null() { json!("") } else { c.to_json() })
        .collect();
    Ok(json!({
        "type": "sunburst",
        "labels": column_json(req.data, labels)?,
        "parents": parents,
        "values": column_json(req.data, value)?,
        "marker": { "colors": req.colors },
    }))
}

fn table_trace(req: &RenderRequest<'_>) -> ChartResult<Value> {
    let header_fill = PaletteRegistry::government().lookup("Lintblauw", Intensity::P100)?;
    let cells = req
        .selectors
        .columns
        .iter()
        .map(|c| column_json(req.data, c))
        .collect::<ChartResult<Vec<_>>>()?;

    let fill = if req.options.band_colors.is_empty() {
        json!("white")
    } else {
        let rows: Vec<Value> = (0..req.data.row_count())
            .map(|r| color_at(&req.options.band_colors, r))
            .collect();
        json!(vec![rows; cells.len()])
    };

    Ok(json!({
        "type": "table",
        "header": {
            "values": req.options.headers,
            "fill": { "color": header_fill },
            "font": { "color": "white" },
            "align": "left",
        },
        "cells": {
            "values": cells,
            "fill": { "color": fill },
            "align": "left",
        },
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/render/figure.rs"]
mod tests;
