use std::collections::{BTreeMap, BTreeSet};

use serde::ser::SerializeMap as _;
use serde_json::{Map, Value};

use crate::foundation::error::{ChartError, ChartResult};

/// One typed table cell.
///
/// Categories are plain [`Cell::Text`] values; numeric columns hold either
/// [`Cell::Int`] or [`Cell::Float`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing value (`null` in JSON).
    Null,
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text or categorical value.
    Text(String),
}

/// Hashable identity of a cell used for distinct counting and pivoting.
///
/// Numbers compare by value, so `Int(3)` and `Float(3.0)` are the same key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum CellKey {
    Null,
    Number(u64),
    Text(String),
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            Cell::Null | Cell::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Human readable rendering, used in error messages and labels.
    pub fn label(&self) -> String {
        match self {
            Cell::Null => "null".to_string(),
            Cell::Int(v) => v.to_string(),
            Cell::Float(v) => v.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Int(v) => Value::from(*v),
            Cell::Float(v) => serde_json::Number::from_f64(*v)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Text(s) => Value::String(s.clone()),
        }
    }

    pub(crate) fn key(&self) -> CellKey {
        if let Some(v) = self.as_f64() {
            return CellKey::Number(normalized_bits(v));
        }
        match self {
            Cell::Text(s) => CellKey::Text(s.clone()),
            _ => CellKey::Null,
        }
    }
}

fn normalized_bits(v: f64) -> u64 {
    // -0.0 and 0.0 are one category.
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Int(i64::from(v))
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Null, Into::into)
    }
}

/// A named column of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Cell>,
}

impl Column {
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Cell>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// In-memory dataset: ordered, uniquely named columns of equal length.
///
/// Serializes as a JSON object of column name to value array (the
/// "dict of lists" shape), preserving column order.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build a table, rejecting duplicate column names and ragged columns.
    pub fn new(columns: Vec<Column>) -> ChartResult<Self> {
        let mut seen = BTreeSet::new();
        for col in &columns {
            if !seen.insert(col.name.as_str()) {
                return Err(ChartError::validation(format!(
                    "duplicate column name '{}'",
                    col.name
                )));
            }
        }

        let rows = columns.first().map_or(0, |c| c.values.len());
        if let Some(bad) = columns.iter().find(|c| c.values.len() != rows) {
            return Err(ChartError::validation(format!(
                "column '{}' has {} rows, expected {}",
                bad.name,
                bad.values.len(),
                rows
            )));
        }

        Ok(Self { columns, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by name, failing with [`ChartError::UnknownField`].
    pub fn column(&self, name: &str) -> ChartResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ChartError::unknown_field(name, self.column_names()))
    }

    /// Check that every selector resolves to a column.
    pub fn require<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> ChartResult<()> {
        for field in fields {
            self.column(field)?;
        }
        Ok(())
    }

    /// Distinct values of a column in first-appearance order.
    pub fn distinct(&self, name: &str) -> ChartResult<Vec<&Cell>> {
        let col = self.column(name)?;
        let mut seen = BTreeSet::new();
        Ok(col
            .values
            .iter()
            .filter(|cell| seen.insert(cell.key()))
            .collect())
    }

    pub fn distinct_count(&self, name: &str) -> ChartResult<usize> {
        self.distinct(name).map(|d| d.len())
    }

    /// First `n` rows of every column.
    pub fn head(&self, n: usize) -> Table {
        let rows = n.min(self.rows);
        Table {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: c.values[..rows].to_vec(),
                })
                .collect(),
            rows,
        }
    }

    /// Project onto the named columns, in the given order.
    pub fn select<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> ChartResult<Table> {
        let columns = names
            .into_iter()
            .map(|name| self.column(name).cloned())
            .collect::<ChartResult<Vec<_>>>()?;
        Table::new(columns)
    }

    /// Mapping form `{column: {rowIndex: value}}`, matching pandas' `to_dict()`.
    pub fn to_dict(&self) -> Map<String, Value> {
        self.columns
            .iter()
            .map(|col| {
                let rows: Map<String, Value> = col
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| (i.to_string(), cell.to_json()))
                    .collect();
                (col.name.clone(), Value::Object(rows))
            })
            .collect()
    }

    /// Reshape so distinct `x` values become columns, distinct `y` values
    /// become rows, and `value` fills the cells.
    ///
    /// Labels keep first-appearance order; absent pairs are [`Cell::Null`].
    pub fn pivot(&self, x: &str, y: &str, value: &str) -> ChartResult<Pivot> {
        let xs = self.column(x)?;
        let ys = self.column(y)?;
        let vs = self.column(value)?;

        let x_labels: Vec<Cell> = self.distinct(x)?.into_iter().cloned().collect();
        let y_labels: Vec<Cell> = self.distinct(y)?.into_iter().cloned().collect();
        let x_index: BTreeMap<CellKey, usize> = x_labels
            .iter()
            .enumerate()
            .map(|(i, c)| (c.key(), i))
            .collect();
        let y_index: BTreeMap<CellKey, usize> = y_labels
            .iter()
            .enumerate()
            .map(|(i, c)| (c.key(), i))
            .collect();

        let mut z = vec![vec![Cell::Null; x_labels.len()]; y_labels.len()];
        let mut filled = vec![vec![false; x_labels.len()]; y_labels.len()];

        for row in 0..self.rows {
            let (xc, yc) = (&xs.values[row], &ys.values[row]);
            let (Some(&xi), Some(&yi)) = (x_index.get(&xc.key()), y_index.get(&yc.key())) else {
                return Err(ChartError::validation("pivot label index out of sync"));
            };
            if filled[yi][xi] {
                return Err(ChartError::PivotConflict {
                    x: xc.label(),
                    y: yc.label(),
                });
            }
            filled[yi][xi] = true;
            z[yi][xi] = vs.values[row].clone();
        }

        Ok(Pivot {
            x_labels,
            y_labels,
            z,
        })
    }
}

impl serde::Serialize for Table {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for col in &self.columns {
            map.serialize_entry(&col.name, &col.values)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Table {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        Table::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<Map<String, Value>> for Table {
    type Error = ChartError;

    fn try_from(raw: Map<String, Value>) -> ChartResult<Self> {
        let columns = raw
            .into_iter()
            .map(|(name, values)| {
                let values: Vec<Cell> = serde_json::from_value(values).map_err(|e| {
                    ChartError::serde(format!("column '{name}': {e}"))
                })?;
                Ok(Column { name, values })
            })
            .collect::<ChartResult<Vec<_>>>()?;
        Table::new(columns)
    }
}

/// Result of [`Table::pivot`]: a dense matrix indexed `z[y][x]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Pivot {
    pub x_labels: Vec<Cell>,
    pub y_labels: Vec<Cell>,
    pub z: Vec<Vec<Cell>>,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/table.rs"]
mod tests;
