//! Chart descriptors, Rijkshuisstijl theming and data-portal export envelopes.
//!
//! The flow is always the same:
//!
//! - Load a [`Table`] and a [`ChartRequest`]
//! - Build a [`Chart`] with a [`Renderer`] (colors are allocated from the brand palette)
//! - Serialize it into an [`ExportEnvelope`]
//!
//! ```
//! use portal_charts::{BarConfig, Chart, ChartRequest, Column, FigureRenderer, Table};
//!
//! let table = Table::new(vec![
//!     Column::new("sector", ["A", "B"]),
//!     Column::new("aantal", [3, 5]),
//! ])?;
//! let request = ChartRequest::Bar(BarConfig::new("sector", "aantal", "sector"));
//! let envelope = Chart::build(table, request, &FigureRenderer::new())?.export()?;
//! assert_eq!(envelope.chart_type(), Some("bar"));
//! # Ok::<(), portal_charts::ChartError>(())
//! ```
#![forbid(unsafe_code)]

pub mod chart;
pub mod export;
pub mod foundation;
pub mod render;
pub mod theme;

pub use crate::chart::config::{
    BarConfig, BoxConfig, ChartRequest, HeatmapConfig, HistogramConfig, LineConfig, PieConfig,
    ScatterConfig, SunburstConfig, TableConfig,
};
pub use crate::chart::descriptor::{Chart, ChartDescriptor};
pub use crate::chart::kind::{ChartKind, EnvelopeShape};
pub use crate::chart::tabular::CustomChart;
pub use crate::export::batch::{ExportJob, ExportThreading, export_batch};
pub use crate::export::envelope::{ExportEnvelope, serialize_chart};
pub use crate::foundation::error::{ChartError, ChartResult};
pub use crate::foundation::table::{Cell, Column, Table};
pub use crate::render::backend::{
    ImageFormat, RenderRequest, Renderer, RendererKind, VisualHandle, create_renderer,
};
pub use crate::render::figure::{FigureRenderer, FigureVisual};
pub use crate::theme::allocate::{allocate_themed, government_colors, repeat_colors};
pub use crate::theme::palette::{Intensity, PaletteRegistry};
