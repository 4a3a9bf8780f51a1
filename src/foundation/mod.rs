/// Crate error type and result alias.
pub mod error;
/// Column-oriented input tables.
pub mod table;
