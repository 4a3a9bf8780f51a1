//! The chart contract shared by every variant.
//!
//! Each variant validates its table, resolves colors and renders once at
//! construction. [`Chart`] is the closed set used by JSON requests and batch
//! export.

use serde_json::{Map, Value, json};

use crate::{
    chart::{
        categorical::{BarChart, BoxChart, LineChart, PieChart, SunburstChart},
        config::ChartRequest,
        kind::ChartKind,
        numeric::{HeatmapChart, HistogramChart, ScatterChart},
        tabular::{CustomChart, TableChart},
    },
    foundation::error::ChartResult,
    foundation::table::{Pivot, Table},
    render::backend::{FieldSelectors, RenderOptions, RenderRequest, Renderer, VisualHandle},
    theme::allocate::{government_colors, repeat_colors},
};

/// Capabilities every chart variant offers once constructed.
///
/// Descriptors are immutable: restyling means building a new one.
pub trait ChartDescriptor {
    fn kind(&self) -> ChartKind;

    /// The visual produced by the renderer at construction time.
    fn visual(&self) -> &dyn VisualHandle;

    /// Resolved color sequence, one entry per colored category.
    fn colors(&self) -> &[String];

    /// Variant-specific export parameters (without `figureContents`).
    fn export_parameters(&self) -> Map<String, Value>;
}

/// State shared by every variant that went through a renderer.
#[derive(Debug)]
pub(crate) struct Rendered {
    pub(crate) table: Table,
    pub(crate) selectors: FieldSelectors,
    pub(crate) colors: Vec<String>,
    pub(crate) options: RenderOptions,
    pub(crate) visual: Box<dyn VisualHandle>,
}

impl Rendered {
    pub(crate) fn new(
        kind: ChartKind,
        table: Table,
        selectors: FieldSelectors,
        colors: Vec<String>,
        options: RenderOptions,
        pivot: Option<&Pivot>,
        renderer: &dyn Renderer,
    ) -> ChartResult<Self> {
        let visual = renderer.render(&RenderRequest {
            kind,
            data: &table,
            selectors: &selectors,
            colors: &colors,
            options: &options,
            pivot,
        })?;
        tracing::debug!(
            %kind,
            rows = table.row_count(),
            colors = colors.len(),
            "chart rendered"
        );
        Ok(Self {
            table,
            selectors,
            colors,
            options,
            visual,
        })
    }

    /// `chartType`, `dataframe`, `length` and `columns`.
    pub(crate) fn base_parameters(&self, kind: ChartKind) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("chartType".into(), json!(kind.as_str()));
        params.insert("dataframe".into(), Value::Object(self.table.to_dict()));
        params.insert("length".into(), json!(self.table.row_count()));
        params.insert(
            "columns".into(),
            json!(self.table.column_names().collect::<Vec<_>>()),
        );
        params
    }

    pub(crate) fn insert_colors(&self, params: &mut Map<String, Value>) {
        params.insert("colors".into(), json!(self.colors));
    }
}

pub(crate) fn insert_title(params: &mut Map<String, Value>, title: &Option<String>) {
    if let Some(title) = title {
        params.insert("title".into(), json!(title));
    }
}

/// Themed colors when none are given, otherwise the explicit list cycled.
pub(crate) fn resolve_colors(count: usize, explicit: Option<&[String]>) -> ChartResult<Vec<String>> {
    match explicit {
        Some(colors) => repeat_colors(count, colors),
        None => government_colors(count),
    }
}

/// Any chart, as a closed set of variants.
#[derive(Debug)]
pub enum Chart {
    Bar(BarChart),
    Pie(PieChart),
    Line(LineChart),
    Scatter(ScatterChart),
    Histogram(HistogramChart),
    Box(BoxChart),
    Heatmap(HeatmapChart),
    Sunburst(SunburstChart),
    Table(TableChart),
    Custom(CustomChart),
}

impl Chart {
    /// Construct the descriptor a request describes.
    #[tracing::instrument(skip_all, fields(kind = %request.kind()))]
    pub fn build(table: Table, request: ChartRequest, renderer: &dyn Renderer) -> ChartResult<Self> {
        Ok(match request {
            ChartRequest::Bar(c) => Chart::Bar(BarChart::new(table, c, renderer)?),
            ChartRequest::Pie(c) => Chart::Pie(PieChart::new(table, c, renderer)?),
            ChartRequest::Line(c) => Chart::Line(LineChart::new(table, c, renderer)?),
            ChartRequest::Scatter(c) => Chart::Scatter(ScatterChart::new(table, c, renderer)?),
            ChartRequest::Histogram(c) => {
                Chart::Histogram(HistogramChart::new(table, c, renderer)?)
            }
            ChartRequest::Box(c) => Chart::Box(BoxChart::new(table, c, renderer)?),
            ChartRequest::Heatmap(c) => Chart::Heatmap(HeatmapChart::new(table, c, renderer)?),
            ChartRequest::Sunburst(c) => Chart::Sunburst(SunburstChart::new(table, c, renderer)?),
            ChartRequest::Table(c) => Chart::Table(TableChart::new(table, c, renderer)?),
        })
    }
}

impl ChartDescriptor for Chart {
    fn kind(&self) -> ChartKind {
        match self {
            Chart::Bar(c) => c.kind(),
            Chart::Pie(c) => c.kind(),
            Chart::Line(c) => c.kind(),
            Chart::Scatter(c) => c.kind(),
            Chart::Histogram(c) => c.kind(),
            Chart::Box(c) => c.kind(),
            Chart::Heatmap(c) => c.kind(),
            Chart::Sunburst(c) => c.kind(),
            Chart::Table(c) => c.kind(),
            Chart::Custom(c) => c.kind(),
        }
    }

    fn visual(&self) -> &dyn VisualHandle {
        match self {
            Chart::Bar(c) => c.visual(),
            Chart::Pie(c) => c.visual(),
            Chart::Line(c) => c.visual(),
            Chart::Scatter(c) => c.visual(),
            Chart::Histogram(c) => c.visual(),
            Chart::Box(c) => c.visual(),
            Chart::Heatmap(c) => c.visual(),
            Chart::Sunburst(c) => c.visual(),
            Chart::Table(c) => c.visual(),
            Chart::Custom(c) => c.visual(),
        }
    }

    fn colors(&self) -> &[String] {
        match self {
            Chart::Bar(c) => c.colors(),
            Chart::Pie(c) => c.colors(),
            Chart::Line(c) => c.colors(),
            Chart::Scatter(c) => c.colors(),
            Chart::Histogram(c) => c.colors(),
            Chart::Box(c) => c.colors(),
            Chart::Heatmap(c) => c.colors(),
            Chart::Sunburst(c) => c.colors(),
            Chart::Table(c) => c.colors(),
            Chart::Custom(c) => c.colors(),
        }
    }

    fn export_parameters(&self) -> Map<String, Value> {
        match self {
            Chart::Bar(c) => c.export_parameters(),
            Chart::Pie(c) => c.export_parameters(),
            Chart::Line(c) => c.export_parameters(),
            Chart::Scatter(c) => c.export_parameters(),
            Chart::Histogram(c) => c.export_parameters(),
            Chart::Box(c) => c.export_parameters(),
            Chart::Heatmap(c) => c.export_parameters(),
            Chart::Sunburst(c) => c.export_parameters(),
            Chart::Table(c) => c.export_parameters(),
            Chart::Custom(c) => c.export_parameters(),
        }
    }
}

impl From<CustomChart> for Chart {
    fn from(chart: CustomChart) -> Self {
        Chart::Custom(chart)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/descriptor.rs"]
mod tests;
