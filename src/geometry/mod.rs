//! Geometric primitives of a composition
//!
//! This module contains the data model shared across the pipeline:
//! - Dividing lines with orientation, fixed coordinate, and span
//! - Rectangular canvas cells with crop and adjacency rules
//! - The fill palette

/// Dividing lines and their placement geometry
pub mod line;
/// Canvas cells, fill colors, and the crop/adjacency rules that shape them
pub mod rectangle;

pub use line::{Line, Orientation};
pub use rectangle::{Color, Rect};
