//! Rendering seam.
//!
//! The chart layer only talks to [`backend::Renderer`]; [`figure::FigureRenderer`] is the
//! built-in implementation.

pub mod backend;
pub mod figure;
