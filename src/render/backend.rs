//! Renderer seam: charts hand a [`RenderRequest`] to a [`Renderer`] and keep
//! the opaque [`VisualHandle`] it returns.

use crate::{
    chart::kind::ChartKind,
    foundation::error::{ChartError, ChartResult},
    foundation::table::{Pivot, Table},
};

/// Which columns a chart reads, by role.
///
/// Only the roles a chart kind uses are set.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FieldSelectors {
    pub x: Option<String>,
    pub y: Option<String>,
    /// Column whose categories pick the hue.
    pub color: Option<String>,
    /// Numeric column sized into slices, cells or sectors.
    pub value: Option<String>,
    /// Label column for pie slices.
    pub names: Option<String>,
    /// Columns shown by a table, in display order.
    pub columns: Vec<String>,
}

/// Presentation options forwarded to the renderer untouched.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RenderOptions {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub nbins: Option<u32>,
    /// Table header texts.
    pub headers: Vec<String>,
    /// Two alternating row fills; empty when banding is off.
    pub band_colors: Vec<String>,
}

/// Everything a renderer needs to draw one chart.
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest<'a> {
    pub kind: ChartKind,
    pub data: &'a Table,
    pub selectors: &'a FieldSelectors,
    /// Resolved color sequence; a continuous scale for heatmaps.
    pub colors: &'a [String],
    pub options: &'a RenderOptions,
    /// Pivoted matrix, set for heatmaps only.
    pub pivot: Option<&'a Pivot>,
}

/// Image encodings a visual may optionally support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
    Pdf,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
        }
    }
}

/// Opaque result of a render call.
///
/// The chart layer only ever forwards [`VisualHandle::to_description`]; it never
/// looks inside.
pub trait VisualHandle: std::fmt::Debug + Send + Sync {
    /// Renderer-defined JSON description of the visual.
    fn to_description(&self) -> ChartResult<serde_json::Value>;

    /// Encode the visual as an image, when the renderer can.
    fn to_image_bytes(&self, format: ImageFormat) -> ChartResult<Vec<u8>> {
        Err(ChartError::render(format!(
            "{} output is not supported by this renderer",
            format.as_str()
        )))
    }
}

/// Injected rendering capability: turns a declarative request into a visual.
pub trait Renderer: Send + Sync {
    fn render(&self, request: &RenderRequest<'_>) -> ChartResult<Box<dyn VisualHandle>>;
}

/// Built-in renderer kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererKind {
    /// Plotly-style `{data, layout}` figure descriptions.
    Figure,
}

/// Create a built-in renderer.
pub fn create_renderer(kind: RendererKind) -> ChartResult<Box<dyn Renderer>> {
    match kind {
        RendererKind::Figure => Ok(Box::new(crate::render::figure::FigureRenderer::new())),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
