/// Convenience result type used across the crate.
pub type ChartResult<T> = Result<T, ChartError>;

/// Top-level error taxonomy used by chart, palette and export APIs.
///
/// Every variant is a deterministic function of bad input; nothing here is
/// transient and nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    /// A field selector names a column that is not in the table.
    #[error("unknown field: '{field}' is not a column (available: {available})")]
    UnknownField {
        /// The selector that failed to resolve.
        field: String,
        /// Comma separated list of the table's columns.
        available: String,
    },

    /// A color list was required but empty.
    #[error("empty palette: {0}")]
    EmptyPalette(String),

    /// Heatmap pivot found the same `(x, y)` pair twice.
    #[error("pivot conflict: duplicate pair (x = {x}, y = {y})")]
    PivotConflict {
        /// Rendered x value of the duplicate pair.
        x: String,
        /// Rendered y value of the duplicate pair.
        y: String,
    },

    /// Palette lookup referenced a family that is not registered.
    #[error("unknown color family '{0}'")]
    UnknownFamily(String),

    /// Palette lookup referenced a percentage outside the intensity ladder.
    #[error("unknown intensity {0}% (expected one of 100, 75, 60, 45, 30, 15)")]
    UnknownIntensity(i64),

    /// A negative number of colors was requested.
    #[error("invalid color count {0}: must be >= 0")]
    InvalidColorCount(i64),

    /// Invalid user-provided configuration or table shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// The rendering collaborator failed to produce or describe a visual.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    /// Build a [`ChartError::UnknownField`] value listing the available columns.
    pub fn unknown_field<'a>(
        field: impl Into<String>,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnknownField {
            field: field.into(),
            available: available.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Build a [`ChartError::EmptyPalette`] value.
    pub fn empty_palette(msg: impl Into<String>) -> Self {
        Self::EmptyPalette(msg.into())
    }

    /// Build a [`ChartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChartError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChartError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
