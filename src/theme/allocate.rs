//! Color sequences for categorical data.
//!
//! [`allocate_themed`] spreads categories over every family first and only
//! then revisits a family at the next intensity, so 18 families yield 108
//! distinguishable colors before an exact repeat.

use std::collections::BTreeMap;

use crate::{
    foundation::error::{ChartError, ChartResult},
    theme::palette::{Intensity, PaletteRegistry},
};

/// Cycle `colors` until `count` entries are produced.
pub fn repeat_colors<S: AsRef<str>>(count: usize, colors: &[S]) -> ChartResult<Vec<String>> {
    if colors.is_empty() {
        return Err(ChartError::empty_palette(
            "explicit color list must contain at least one color",
        ));
    }
    Ok((0..count)
        .map(|i| colors[i % colors.len()].as_ref().to_string())
        .collect())
}

/// Validate a signed color count coming from untyped input.
pub fn color_count(count: i64) -> ChartResult<usize> {
    usize::try_from(count).map_err(|_| ChartError::InvalidColorCount(count))
}

/// Per-call record of which intensity each family is currently on.
///
/// Values are consumed and returned by [`AllocationState::advance`]; nothing
/// is mutated behind a shared reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocationState {
    active: BTreeMap<String, Intensity>,
}

impl AllocationState {
    /// Select `family` once more: 100% on first use, otherwise one rung down.
    pub fn advance(mut self, family: &str) -> (Self, Intensity) {
        let intensity = match self.active.get(family) {
            None => Intensity::P100,
            Some(current) => current.next(),
        };
        self.active.insert(family.to_string(), intensity);
        (self, intensity)
    }

    pub fn intensity_of(&self, family: &str) -> Option<Intensity> {
        self.active.get(family).copied()
    }
}

/// One allocated color and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub family: String,
    pub intensity: Intensity,
    pub hex: String,
}

/// Produce `count` colors by walking `family_order` breadth first.
pub fn allocate_themed<S: AsRef<str>>(
    count: usize,
    registry: &PaletteRegistry,
    family_order: &[S],
) -> ChartResult<Vec<String>> {
    Ok(allocate_entries(count, registry, family_order)?
        .into_iter()
        .map(|e| e.hex)
        .collect())
}

/// Like [`allocate_themed`], keeping the family and intensity of each color.
pub fn allocate_entries<S: AsRef<str>>(
    count: usize,
    registry: &PaletteRegistry,
    family_order: &[S],
) -> ChartResult<Vec<PaletteEntry>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if family_order.is_empty() {
        return Err(ChartError::empty_palette("family order must not be empty"));
    }

    let (state, entries) = (0..count).try_fold(
        (AllocationState::default(), Vec::with_capacity(count)),
        |(state, mut entries), i| {
            let family = family_order[i % family_order.len()].as_ref();
            let (state, intensity) = state.advance(family);
            entries.push(PaletteEntry {
                family: family.to_string(),
                intensity,
                hex: registry.lookup(family, intensity)?.to_string(),
            });
            Ok::<_, ChartError>((state, entries))
        },
    )?;

    tracing::debug!(
        count,
        families_used = state.active.len(),
        "allocated themed colors"
    );
    Ok(entries)
}

/// [`allocate_themed`] over the government palette in quantitative order.
pub fn government_colors(count: usize) -> ChartResult<Vec<String>> {
    allocate_themed(
        count,
        &PaletteRegistry::government(),
        &crate::theme::palette::QUANTITATIVE_ORDER,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/theme/allocate.rs"]
mod tests;
