//! Export envelopes.
//!
//! Tables export as `{"portalData", "figureContents"}`, every other kind as
//! `{"parameters", "figureContents"}`.

use serde_json::{Map, Value};

use crate::{
    chart::{
        descriptor::{Chart, ChartDescriptor},
        kind::EnvelopeShape,
    },
    foundation::error::ChartResult,
};

/// The exported JSON document for one chart.
///
/// Tables keep the `portalData` shape the data portal already consumes; every
/// other chart kind nests its parameters under `parameters`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ExportEnvelope {
    Parameters {
        parameters: Map<String, Value>,
        #[serde(rename = "figureContents")]
        figure_contents: Value,
    },
    PortalData {
        #[serde(rename = "portalData")]
        portal_data: Map<String, Value>,
        #[serde(rename = "figureContents")]
        figure_contents: Value,
    },
}

impl ExportEnvelope {
    pub fn new(shape: EnvelopeShape, params: Map<String, Value>, figure_contents: Value) -> Self {
        match shape {
            EnvelopeShape::Parameters => ExportEnvelope::Parameters {
                parameters: params,
                figure_contents,
            },
            EnvelopeShape::PortalData => ExportEnvelope::PortalData {
                portal_data: params,
                figure_contents,
            },
        }
    }

    pub fn shape(&self) -> EnvelopeShape {
        match self {
            ExportEnvelope::Parameters { .. } => EnvelopeShape::Parameters,
            ExportEnvelope::PortalData { .. } => EnvelopeShape::PortalData,
        }
    }

    /// The parameter map, whichever key it lives under.
    pub fn params(&self) -> &Map<String, Value> {
        match self {
            ExportEnvelope::Parameters { parameters, .. } => parameters,
            ExportEnvelope::PortalData { portal_data, .. } => portal_data,
        }
    }

    pub fn figure_contents(&self) -> &Value {
        match self {
            ExportEnvelope::Parameters {
                figure_contents, ..
            }
            | ExportEnvelope::PortalData {
                figure_contents, ..
            } => figure_contents,
        }
    }

    pub fn chart_type(&self) -> Option<&str> {
        self.params().get("chartType").and_then(Value::as_str)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_vec(&self) -> ChartResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> ChartResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Merge a chart's export parameters with its visual's description.
///
/// The description is forwarded as-is.
#[tracing::instrument(skip_all, fields(kind = %chart.kind()))]
pub fn serialize_chart<C: ChartDescriptor + ?Sized>(chart: &C) -> ChartResult<ExportEnvelope> {
    let figure_contents = chart.visual().to_description()?;
    let params = chart.export_parameters();
    let shape = chart.kind().envelope_shape();
    tracing::debug!(params = params.len(), ?shape, "chart serialized");
    Ok(ExportEnvelope::new(shape, params, figure_contents))
}

impl Chart {
    pub fn export(&self) -> ChartResult<ExportEnvelope> {
        serialize_chart(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/envelope.rs"]
mod tests;
