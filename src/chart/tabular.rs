//! Tables and caller-built charts.
//!
//! Neither uses the color allocator. A table bands its rows with two fills; a
//! custom chart carries whatever visual the caller already produced.

use serde_json::{Map, Value, json};

use crate::{
    chart::{
        config::TableConfig,
        descriptor::{ChartDescriptor, Rendered, insert_title},
        kind::ChartKind,
    },
    foundation::error::{ChartError, ChartResult},
    foundation::table::Table,
    render::backend::{FieldSelectors, RenderOptions, Renderer, VisualHandle},
    theme::palette::{Intensity, PaletteRegistry},
};

/// White and Lintblauw 15%.
pub fn default_band_colors() -> ChartResult<Vec<String>> {
    let light = PaletteRegistry::government().lookup("Lintblauw", Intensity::P15)?;
    Ok(vec!["#FFFFFF".to_string(), light.to_string()])
}

#[derive(Debug)]
pub struct TableChart {
    rendered: Rendered,
    config: TableConfig,
}

impl TableChart {
    #[tracing::instrument(skip_all, fields(alternate_row = config.alternate_row))]
    pub fn new(table: Table, config: TableConfig, renderer: &dyn Renderer) -> ChartResult<Self> {
        let columns: Vec<String> = match &config.columns {
            Some(columns) => columns.clone(),
            None => table.column_names().map(str::to_string).collect(),
        };
        let selected = table.select(columns.iter().map(String::as_str))?;

        let headers = config.headers.clone().unwrap_or_else(|| columns.clone());
        if headers.len() != columns.len() {
            return Err(ChartError::validation(format!(
                "table has {} headers for {} columns",
                headers.len(),
                columns.len()
            )));
        }

        let band_colors = if config.alternate_row {
            match &config.band_colors {
                Some(bands) if bands.is_empty() => {
                    return Err(ChartError::empty_palette("table bandColors has no colors"));
                }
                Some(bands) if bands.len() != 2 => {
                    return Err(ChartError::validation(format!(
                        "table bandColors needs exactly 2 colors, got {}",
                        bands.len()
                    )));
                }
                Some(bands) => bands.clone(),
                None => default_band_colors()?,
            }
        } else {
            Vec::new()
        };

        let selectors = FieldSelectors {
            columns,
            ..FieldSelectors::default()
        };
        let options = RenderOptions {
            title: config.title.clone(),
            headers,
            band_colors: band_colors.clone(),
            ..RenderOptions::default()
        };
        let rendered = Rendered::new(
            ChartKind::Table,
            selected,
            selectors,
            band_colors,
            options,
            None,
            renderer,
        )?;
        Ok(Self { rendered, config })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The projected table, holding only the displayed columns.
    pub fn table(&self) -> &Table {
        &self.rendered.table
    }

    pub fn headers(&self) -> &[String] {
        &self.rendered.options.headers
    }
}

impl ChartDescriptor for TableChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Table
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.rendered.visual.as_ref()
    }

    /// Band fills; empty when banding is off.
    fn colors(&self) -> &[String] {
        &self.rendered.colors
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("chartType".into(), json!(ChartKind::Table.as_str()));
        params.insert("columns".into(), json!(self.headers()));
        params
    }
}

/// Wraps a visual built outside this crate so it can still be exported.
#[derive(Debug)]
pub struct CustomChart {
    visual: Box<dyn VisualHandle>,
    table: Option<Table>,
    title: Option<String>,
}

impl CustomChart {
    pub fn new(visual: Box<dyn VisualHandle>) -> Self {
        Self {
            visual,
            table: None,
            title: None,
        }
    }

    /// Attach the data the visual was drawn from, exported as `dataframe`.
    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }
}

impl ChartDescriptor for CustomChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Custom
    }

    fn visual(&self) -> &dyn VisualHandle {
        self.visual.as_ref()
    }

    fn colors(&self) -> &[String] {
        &[]
    }

    fn export_parameters(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("chartType".into(), json!(ChartKind::Custom.as_str()));
        if let Some(table) = &self.table {
            params.insert("dataframe".into(), Value::Object(table.to_dict()));
            params.insert("length".into(), json!(table.row_count()));
            params.insert(
                "columns".into(),
                json!(table.column_names().collect::<Vec<_>>()),
            );
        }
        insert_title(&mut params, &self.title);
        params
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/tabular.rs"]
mod tests;
