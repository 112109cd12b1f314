// windrule: fill rules for sweep-line polygon boolean operations
// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)

pub mod error;
pub mod style;
pub mod sweep;
pub mod wind;

pub use error::WindError;
pub use style::{FillStyle, DEFAULT_FILL_STYLE};
pub use sweep::{ActiveRegion, Boundary, Crossing, Scanline};
pub use wind::{FillRule, SegmentDir, WindState, MAX_POLYGONS};
