// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Errors reported by the checked entry points of the fill rules.

use thiserror::Error;

/// Errors reported by [`FillRule::try_start`](crate::FillRule::try_start),
/// [`FillRule::try_combine`](crate::FillRule::try_combine) and rule-name parsing.
///
/// The first three variants are caller defects: the plain `start`/`combine`
/// panic with the same message instead of returning them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindError {
    /// A wind state was requested for zero source polygons.
    #[error("at least one source polygon is required")]
    NoPolygons,

    /// The bitmask rules can track at most `max` source polygons.
    #[error("{count} source polygons exceed the {max}-bit coverage mask")]
    TooManyPolygons { count: usize, max: usize },

    /// An edge claims to come from a polygon the state does not know about.
    #[error("source polygon {index} out of range (polygon count is {polygon_count})")]
    SourceOutOfRange { index: usize, polygon_count: usize },

    /// The name does not match any fill rule.
    #[error("unknown fill rule '{0}'")]
    UnknownRule(String),
}
