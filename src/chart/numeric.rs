//! Charts over numeric axes: scatter, histogram and heatmap.

use serde_json::{Map, Value, json};

use crate::{
    chart::{
        config::{HeatmapConfig, HistogramConfig, ScatterConfig},
        descriptor::{ChartDescriptor, Rendered, insert_title, resolve_colors},
        kind::ChartKind,
    },
    foundation::error::{ChartError, ChartResult},
    foundation::table::{Pivot, Table},
    render::backend::{FieldSelectors, RenderOptions, Renderer, VisualHandle},
    theme::palette::{Intensity, PaletteRegistry},
};

/// Family whose shades form the default heatmap scale.
const HEATMAP_FAMILY: &str = "Lintblauw";

/// Lintblauw from 15% up to 100%, light to dark.
pub fn default_continuous_scale() -> ChartResult<Vec<String>> {
    let registry = PaletteRegistry::government();
    Intensity::LADDER
        .iter()
        .rev()
        .map(|&i| registry.lookup(HEATMAP_FAMILY, i).map(str::to_string))
        .collect()
}

#[derive(Debug)]
pub struct ScatterChart {
    rendered: Rendered,
    config: ScatterConfig,
}

impl ScatterChart {
    #[tracing::instrument(skip_all, fields(x = %config.x, y = %config.y))]
    pub fn new(table: Table, config: ScatterConfig, renderer: &dyn Renderer) -> ChartResult<Self> {
        table.require(
            [config.x.as_str(), config.y.as_str()]
                .into_iter()
                .chain(config.column_to_color.as_deref()),
        )?;
        let count = match (&config.column_to_color, &config.colors) {
            (Some(field), _) => table.distinct_count(field)?,
            (None, Some(explicit)) => explicit.len(),
            (None, None) => 1,
        };
        let colors = resolve_colors(count, config.colors.as_deref())?;
        let selectors = FieldSelectors {
            x: Some(config.x.clone()),
            y: Some(config.y.clone()),
            color: config.column_to_color.clone(),
            ..FieldSelectors::default()
        };
        let options = RenderOptions {
            title: config.title.clone(),
            ..RenderOptions::default()
        };
        let rendered = Rendered::new(
            ChartKind::Scatter,
            table,
            selectors,
            colors,
            options,
            None,
            renderer,
        )?;
        Ok(Self { rendered, config })
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.rendered.table
    }
}

impl ChartDescriptor for ScatterChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Scatter
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.rendered.visual.as_ref()
    }

    fn colors(&self) -> &[String] {
        &self.rendered.colors
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = self.rendered.base_parameters(ChartKind::Scatter);
        self.rendered.insert_colors(&mut params);
        if let Some(field) = &self.config.column_to_color {
            params.insert("columnToColor".into(), json!(field));
        }
        params.insert("x".into(), json!(self.config.x));
        params.insert("y".into(), json!(self.config.y));
        insert_title(&mut params, &self.config.title);
        params
    }
}

/// Single-hue histogram. Axis labels are resolved at construction.
#[derive(Debug)]
pub struct HistogramChart {
    rendered: Rendered,
    config: HistogramConfig,
}

impl HistogramChart {
    #[tracing::instrument(skip_all, fields(x = %config.x, nbins = config.nbins))]
    pub fn new(table: Table, config: HistogramConfig, renderer: &dyn Renderer) -> ChartResult<Self> {
        if config.nbins == 0 {
            return Err(ChartError::validation("histogram nbins must be at least 1"));
        }
        table.require(std::iter::once(config.x.as_str()).chain(config.y.as_deref()))?;

        let colors = resolve_colors(1, config.colors.as_deref())?;
        let x_label = config.x_label.clone().unwrap_or_else(|| config.x.clone());
        let y_label = config
            .y_label
            .clone()
            .or_else(|| config.y.clone())
            .unwrap_or_else(|| "count".to_string());
        let selectors = FieldSelectors {
            x: Some(config.x.clone()),
            y: config.y.clone(),
            ..FieldSelectors::default()
        };
        let options = RenderOptions {
            title: config.title.clone(),
            x_label: Some(x_label),
            y_label: Some(y_label),
            nbins: Some(config.nbins),
            ..RenderOptions::default()
        };
        let rendered = Rendered::new(
            ChartKind::Histogram,
            table,
            selectors,
            colors,
            options,
            None,
            renderer,
        )?;
        Ok(Self { rendered, config })
    }

    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.rendered.table
    }

    pub fn x_label(&self) -> &str {
        self.rendered.options.x_label.as_deref().unwrap_or_default()
    }

    pub fn y_label(&self) -> &str {
        self.rendered.options.y_label.as_deref().unwrap_or_default()
    }
}

impl ChartDescriptor for HistogramChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Histogram
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.rendered.visual.as_ref()
    }

    fn colors(&self) -> &[String] {
        &self.rendered.colors
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = self.rendered.base_parameters(ChartKind::Histogram);
        self.rendered.insert_colors(&mut params);
        params.insert("x".into(), json!(self.config.x));
        if let Some(y) = &self.config.y {
            params.insert("y".into(), json!(y));
        }
        params.insert("nbins".into(), json!(self.config.nbins));
        params.insert("xLabel".into(), json!(self.x_label()));
        params.insert("yLabel".into(), json!(self.y_label()));
        insert_title(&mut params, &self.config.title);
        params
    }
}

/// Pivoted matrix colored by a continuous scale instead of the allocator.
#[derive(Debug)]
pub struct HeatmapChart {
    rendered: Rendered,
    config: HeatmapConfig,
    pivot: Pivot,
}

impl HeatmapChart {
    #[tracing::instrument(skip_all, fields(x = %config.x, y = %config.y, value = %config.value_column))]
    pub fn new(table: Table, config: HeatmapConfig, renderer: &dyn Renderer) -> ChartResult<Self> {
        table.require([
            config.x.as_str(),
            config.y.as_str(),
            config.value_column.as_str(),
        ])?;
        let scale = match &config.color_continuous_scale {
            Some(scale) if scale.is_empty() => {
                return Err(ChartError::empty_palette(
                    "heatmap colorContinuousScale has no colors",
                ));
            }
            Some(scale) => scale.clone(),
            None => default_continuous_scale()?,
        };
        let pivot = table.pivot(&config.x, &config.y, &config.value_column)?;

        let selectors = FieldSelectors {
            x: Some(config.x.clone()),
            y: Some(config.y.clone()),
            value: Some(config.value_column.clone()),
            ..FieldSelectors::default()
        };
        let options = RenderOptions {
            title: config.title.clone(),
            ..RenderOptions::default()
        };
        let rendered = Rendered::new(
            ChartKind::Heatmap,
            table,
            selectors,
            scale,
            options,
            Some(&pivot),
            renderer,
        )?;
        Ok(Self {
            rendered,
            config,
            pivot,
        })
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.rendered.table
    }

    pub fn pivot(&self) -> &Pivot {
        &self.pivot
    }
}

impl ChartDescriptor for HeatmapChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Heatmap
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.rendered.visual.as_ref()
    }

    /// The continuous scale in use.
    fn colors(&self) -> &[String] {
        &self.rendered.colors
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = self.rendered.base_parameters(ChartKind::Heatmap);
        params.insert("x".into(), json!(self.config.x));
        params.insert("y".into(), json!(self.config.y));
        params.insert("valueColumn".into(), json!(self.config.value_column));
        params.insert("colorContinuousScale".into(), json!(self.rendered.colors));
        insert_title(&mut params, &self.config.title);
        params
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/numeric.rs"]
mod tests;
