//! Charts whose colors follow a categorical field.

use serde_json::{Map, Value, json};

use crate::{
    chart::{
        config::{BarConfig, BoxConfig, LineConfig, PieConfig, SunburstConfig},
        descriptor::{ChartDescriptor, Rendered, insert_title, resolve_colors},
        kind::ChartKind,
    },
    foundation::error::ChartResult,
    foundation::table::Table,
    render::backend::{FieldSelectors, RenderOptions, Renderer, VisualHandle},
};

/// One bar per row; a color per row.
#[derive(Debug)]
pub struct BarChart {
    rendered: Rendered,
    config: BarConfig,
}

impl BarChart {
    #[tracing::instrument(skip_all, fields(x = %config.x, y = %config.y))]
    pub fn new(table: Table, config: BarConfig, renderer: &dyn Renderer) -> ChartResult<Self> {
        table.require([
            config.x.as_str(),
            config.y.as_str(),
            config.column_to_color.as_str(),
        ])?;
        let colors = resolve_colors(table.row_count(), config.colors.as_deref())?;
        let selectors = FieldSelectors {
            x: Some(config.x.clone()),
            y: Some(config.y.clone()),
            color: Some(config.column_to_color.clone()),
            ..FieldSelectors::default()
        };
        let options = RenderOptions {
            title: config.title.clone(),
            ..RenderOptions::default()
        };
        let rendered = Rendered::new(
            ChartKind::Bar,
            table,
            selectors,
            colors,
            options,
            None,
            renderer,
        )?;
        Ok(Self { rendered, config })
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.rendered.table
    }
}

impl ChartDescriptor for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.rendered.visual.as_ref()
    }

    fn colors(&self) -> &[String] {
        &self.rendered.colors
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = self.rendered.base_parameters(ChartKind::Bar);
        self.rendered.insert_colors(&mut params);
        params.insert("columnToColor".into(), json!(self.config.column_to_color));
        params.insert("x".into(), json!(self.config.x));
        params.insert("y".into(), json!(self.config.y));
        insert_title(&mut params, &self.config.title);
        params
    }
}

/// Slices sized by `values`; one color per distinct name.
#[derive(Debug)]
pub struct PieChart {
    rendered: Rendered,
    config: PieConfig,
}

impl PieChart {
    #[tracing::instrument(skip_all, fields(values = %config.values, names = %config.names))]
    pub fn new(table: Table, config: PieConfig, renderer: &dyn Renderer) -> ChartResult<Self> {
        table.require([config.values.as_str(), config.names.as_str()])?;
        let count = table.distinct_count(&config.names)?;
        let colors = resolve_colors(count, config.colors.as_deref())?;
        let selectors = FieldSelectors {
            value: Some(config.values.clone()),
            names: Some(config.names.clone()),
            ..FieldSelectors::default()
        };
        let options = RenderOptions {
            title: config.title.clone(),
            ..RenderOptions::default()
        };
        let rendered = Rendered::new(
            ChartKind::Pie,
            table,
            selectors,
            colors,
            options,
            None,
            renderer,
        )?;
        Ok(Self { rendered, config })
    }

    pub fn config(&self) -> &PieConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.rendered.table
    }
}

impl ChartDescriptor for PieChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.rendered.visual.as_ref()
    }

    fn colors(&self) -> &[String] {
        &self.rendered.colors
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = self.rendered.base_parameters(ChartKind::Pie);
        self.rendered.insert_colors(&mut params);
        // Portals color pie slices by their names.
        params.insert("columnToColor".into(), json!(self.config.names));
        params.insert("values".into(), json!(self.config.values));
        params.insert("names".into(), json!(self.config.names));
        insert_title(&mut params, &self.config.title);
        params
    }
}

/// One line per distinct `column_to_color` value.
#[derive(Debug)]
pub struct LineChart {
    rendered: Rendered,
    config: LineConfig,
}

impl LineChart {
    #[tracing::instrument(skip_all, fields(x = %config.x, y = %config.y))]
    pub fn new(table: Table, config: LineConfig, renderer: &dyn Renderer) -> ChartResult<Self> {
        table.require([
            config.x.as_str(),
            config.y.as_str(),
            config.column_to_color.as_str(),
        ])?;
        let count = table.distinct_count(&config.column_to_color)?;
        let colors = resolve_colors(count, config.colors.as_deref())?;
        let selectors = FieldSelectors {
            x: Some(config.x.clone()),
            y: Some(config.y.clone()),
            color: Some(config.column_to_color.clone()),
            ..FieldSelectors::default()
        };
        let options = RenderOptions {
            title: config.title.clone(),
            ..RenderOptions::default()
        };
        let rendered = Rendered::new(
            ChartKind::Line,
            table,
            selectors,
            colors,
            options,
            None,
            renderer,
        )?;
        Ok(Self { rendered, config })
    }

    pub fn config(&self) -> &LineConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.rendered.table
    }
}

impl ChartDescriptor for LineChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.rendered.visual.as_ref()
    }

    fn colors(&self) -> &[String] {
        &self.rendered.colors
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = self.rendered.base_parameters(ChartKind::Line);
        self.rendered.insert_colors(&mut params);
        params.insert("columnToColor".into(), json!(self.config.column_to_color));
        params.insert("x".into(), json!(self.config.x));
        params.insert("y".into(), json!(self.config.y));
        insert_title(&mut params, &self.config.title);
        params
    }
}

/// A box per distinct `column_to_color` value.
#[derive(Debug)]
pub struct BoxChart {
    rendered: Rendered,
    config: BoxConfig,
}

impl BoxChart {
    #[tracing::instrument(skip_all, fields(x = %config.x))]
    pub fn new(table: Table, config: BoxConfig, renderer: &dyn Renderer) -> ChartResult<Self> {
        table.require(
            [config.x.as_str(), config.column_to_color.as_str()]
                .into_iter()
                .chain(config.y.as_deref()),
        )?;
        let count = table.distinct_count(&config.column_to_color)?;
        let colors = resolve_colors(count, config.colors.as_deref())?;
        let selectors = FieldSelectors {
            x: Some(config.x.clone()),
            y: config.y.clone(),
            color: Some(config.column_to_color.clone()),
            ..FieldSelectors::default()
        };
        let options = RenderOptions {
            title: config.title.clone(),
            ..RenderOptions::default()
        };
        let rendered = Rendered::new(
            ChartKind::Box,
            table,
            selectors,
            colors,
            options,
            None,
            renderer,
        )?;
        Ok(Self { rendered, config })
    }

    pub fn config(&self) -> &BoxConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.rendered.table
    }
}

impl ChartDescriptor for BoxChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Box
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.rendered.visual.as_ref()
    }

    fn colors(&self) -> &[String] {
        &self.rendered.colors
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = self.rendered.base_parameters(ChartKind::Box);
        self.rendered.insert_colors(&mut params);
        params.insert("columnToColor".into(), json!(self.config.column_to_color));
        params.insert("x".into(), json!(self.config.x));
        if let Some(y) = &self.config.y {
            params.insert("y".into(), json!(y));
        }
        insert_title(&mut params, &self.config.title);
        params
    }
}

/// Hierarchy of `x` nodes under `y` parents; a color per row.
#[derive(Debug)]
pub struct SunburstChart {
    rendered: Rendered,
    config: SunburstConfig,
}

impl SunburstChart {
    #[tracing::instrument(skip_all, fields(x = %config.x, y = %config.y))]
    pub fn new(table: Table, config: SunburstConfig, renderer: &dyn Renderer) -> ChartResult<Self> {
        table.require([
            config.x.as_str(),
            config.y.as_str(),
            config.values.as_str(),
            config.column_to_color.as_str(),
        ])?;
        let colors = resolve_colors(table.row_count(), config.colors.as_deref())?;
        let selectors = FieldSelectors {
            x: Some(config.x.clone()),
            y: Some(config.y.clone()),
            value: Some(config.values.clone()),
            color: Some(config.column_to_color.clone()),
            ..FieldSelectors::default()
        };
        let options = RenderOptions {
            title: config.title.clone(),
            ..RenderOptions::default()
        };
        let rendered = Rendered::new(
            ChartKind::Sunburst,
            table,
            selectors,
            colors,
            options,
            None,
            renderer,
        )?;
        Ok(Self { rendered, config })
    }

    pub fn config(&self) -> &SunburstConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.rendered.table
    }
}

impl ChartDescriptor for SunburstChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Sunburst
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.rendered.visual.as_ref()
    }

    fn colors(&self) -> &[String] {
        &self.rendered.colors
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = self.rendered.base_parameters(ChartKind::Sunburst);
        self.rendered.insert_colors(&mut params);
        params.insert("columnToColor".into(), json!(self.config.column_to_color));
        params.insert("x".into(), json!(self.config.x));
        params.insert("y".into(), json!(self.config.y));
        params.insert("values".into(), json!(self.config.values));
        insert_title(&mut params, &self.config.title);
        params
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/categorical.rs"]
mod tests;
