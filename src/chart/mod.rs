//! Chart descriptors: one variant per chart kind, built once and exported many times.

pub mod categorical;
/// JSON-facing configuration per chart kind.
pub mod config;
pub mod descriptor;
pub mod kind;
pub mod numeric;
pub mod tabular;
