//! Export envelopes consumed by the data portal.

/// Build and serialize many charts, optionally in parallel.
pub mod batch;
pub mod envelope;
