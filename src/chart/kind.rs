//! Chart kinds and their `chartType` strings.

/// Closed set of chart kinds understood by the export format.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
    Scatter,
    Histogram,
    Box,
    Heatmap,
    Sunburst,
    Table,
    Custom,
}

/// Top-level key the export parameters are nested under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `{"parameters": ..., "figureContents": ...}`
    Parameters,
    /// `{"portalData": ..., "figureContents": ...}`, used by tables.
    PortalData,
}

impl ChartKind {
    pub const ALL: [ChartKind; 10] = [
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Histogram,
        ChartKind::Box,
        ChartKind::Heatmap,
        ChartKind::Sunburst,
        ChartKind::Table,
        ChartKind::Custom,
    ];

    /// Value written to the `chartType` export key.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::Box => "box",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Sunburst => "sunburst",
            ChartKind::Table => "table",
            ChartKind::Custom => "custom",
        }
    }

    pub fn envelope_shape(self) -> EnvelopeShape {
        match self {
            ChartKind::Table => EnvelopeShape::PortalData,
            _ => EnvelopeShape::Parameters,
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/kind.rs"]
mod tests;
