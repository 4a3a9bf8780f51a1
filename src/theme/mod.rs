//! Rijkshuisstijl colors and how they are handed out to chart categories.

/// Themed and cycled color sequences.
pub mod allocate;
/// The 18 brand color families and their intensity ladder.
pub mod palette;
