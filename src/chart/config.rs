//! Per-variant chart configuration.
//!
//! Each struct holds only the options its chart kind recognizes. JSON keys are
//! camelCase and unknown keys are rejected, so a typo fails loudly instead of
//! being ignored.

use crate::chart::kind::ChartKind;

/// Default bin count for histograms.
pub const DEFAULT_NBINS: u32 = 10;

fn default_nbins() -> u32 {
    DEFAULT_NBINS
}

/// Categorical bar chart: one bar per row, hued by `column_to_color`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BarConfig {
    pub x: String,
    pub y: String,
    pub column_to_color: String,
    /// Explicit colors; themed allocation when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Pie chart: `values` sized slices labelled by `names`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PieConfig {
    pub values: String,
    pub names: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Line chart with one series per distinct `column_to_color` value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LineConfig {
    pub x: String,
    pub y: String,
    pub column_to_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Scatter plot. Single hue unless `column_to_color` or `colors` say otherwise.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScatterConfig {
    pub x: String,
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_to_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Histogram over `x`, optionally summing `y` per bin.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HistogramConfig {
    pub x: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    /// Number of bins, default [`DEFAULT_NBINS`]. Must be > 0.
    #[serde(default = "default_nbins")]
    pub nbins: u32,
    /// Defaults to the `x` field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    /// Defaults to the `y` field name, or `count`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Box plot per distinct `column_to_color` value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BoxConfig {
    pub x: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    pub column_to_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Heatmap: `x` and `y` become axes, `value_column` fills the cells.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeatmapConfig {
    pub x: String,
    pub y: String,
    pub value_column: String,
    /// Continuous scale, low to high. Defaults to the Lintblauw shades.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_continuous_scale: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Sunburst: `x` names each node, `y` names its parent.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SunburstConfig {
    pub x: String,
    pub y: String,
    pub values: String,
    pub column_to_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Plain table of cells.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableConfig {
    /// Header texts; default to the column names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    /// Columns to show; default all, in table order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// Band rows with two alternating fills.
    #[serde(default)]
    pub alternate_row: bool,
    /// The two band fills; white and Lintblauw 15% by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band_colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl BarConfig {
    pub fn new(x: impl Into<String>, y: impl Into<String>, column_to_color: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            column_to_color: column_to_color.into(),
            colors: None,
            title: None,
        }
    }
}

impl PieConfig {
    pub fn new(values: impl Into<String>, names: impl Into<String>) -> Self {
        Self {
            values: values.into(),
            names: names.into(),
            colors: None,
            title: None,
        }
    }
}

impl LineConfig {
    pub fn new(x: impl Into<String>, y: impl Into<String>, column_to_color: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            column_to_color: column_to_color.into(),
            colors: None,
            title: None,
        }
    }
}

impl ScatterConfig {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            column_to_color: None,
            colors: None,
            title: None,
        }
    }

    pub fn column_to_color(mut self, field: impl Into<String>) -> Self {
        self.column_to_color = Some(field.into());
        self
    }
}

impl HistogramConfig {
    pub fn new(x: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: None,
            nbins: DEFAULT_NBINS,
            x_label: None,
            y_label: None,
            colors: None,
            title: None,
        }
    }

    pub fn y(mut self, field: impl Into<String>) -> Self {
        self.y = Some(field.into());
        self
    }

    pub fn nbins(mut self, nbins: u32) -> Self {
        self.nbins = nbins;
        self
    }

    pub fn labels(mut self, x_label: Option<String>, y_label: Option<String>) -> Self {
        self.x_label = x_label;
        self.y_label = y_label;
        self
    }
}

impl BoxConfig {
    pub fn new(x: impl Into<String>, column_to_color: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: None,
            column_to_color: column_to_color.into(),
            colors: None,
            title: None,
        }
    }

    pub fn y(mut self, field: impl Into<String>) -> Self {
        self.y = Some(field.into());
        self
    }
}

impl HeatmapConfig {
    pub fn new(x: impl Into<String>, y: impl Into<String>, value_column: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            value_column: value_column.into(),
            color_continuous_scale: None,
            title: None,
        }
    }
}

impl SunburstConfig {
    pub fn new(
        x: impl Into<String>,
        y: impl Into<String>,
        values: impl Into<String>,
        column_to_color: impl Into<String>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            values: values.into(),
            column_to_color: column_to_color.into(),
            colors: None,
            title: None,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn alternate_row(mut self, on: bool) -> Self {
        self.alternate_row = on;
        self
    }
}

/// A chart request as read from JSON, tagged by `chartType`.
///
/// ```json
/// {"chartType": "bar", "x": "sectoren", "y": "uitstroom", "columnToColor": "sectoren"}
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "chartType", rename_all = "lowercase")]
pub enum ChartRequest {
    Bar(BarConfig),
    Pie(PieConfig),
    Line(LineConfig),
    Scatter(ScatterConfig),
    Histogram(HistogramConfig),
    Box(BoxConfig),
    Heatmap(HeatmapConfig),
    Sunburst(SunburstConfig),
    Table(TableConfig),
}

impl ChartRequest {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartRequest::Bar(_) => ChartKind::Bar,
            ChartRequest::Pie(_) => ChartKind::Pie,
            ChartRequest::Line(_) => ChartKind::Line,
            ChartRequest::Scatter(_) => ChartKind::Scatter,
            ChartRequest::Histogram(_) => ChartKind::Histogram,
            ChartRequest::Box(_) => ChartKind::Box,
            ChartRequest::Heatmap(_) => ChartKind::Heatmap,
            ChartRequest::Sunburst(_) => ChartKind::Sunburst,
            ChartRequest::Table(_) => ChartKind::Table,
        }
    }

    /// Apply the same explicit colors regardless of variant. Ignored by
    /// heatmaps and tables, which do not use the allocator.
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        match &mut self {
            ChartRequest::Bar(c) => c.colors = Some(colors),
            ChartRequest::Pie(c) => c.colors = Some(colors),
            ChartRequest::Line(c) => c.colors = Some(colors),
            ChartRequest::Scatter(c) => c.colors = Some(colors),
            ChartRequest::Histogram(c) => c.colors = Some(colors),
            ChartRequest::Box(c) => c.colors = Some(colors),
            ChartRequest::Sunburst(c) => c.colors = Some(colors),
            ChartRequest::Heatmap(_) | ChartRequest::Table(_) => {}
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/config.rs"]
mod tests;
