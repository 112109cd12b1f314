// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Fill rules for sweep-line polygon boolean operations.
//
// The sweep hands every edge it crosses to a fill rule, which folds the
// crossing into the running state of the region beyond the edge. Two adjacent
// regions that disagree on `is_filled` are separated by an output edge.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::error::WindError;
use crate::style::{FillStyle, DEFAULT_FILL_STYLE};

/// Number of source polygons the coverage mask can track.
pub const MAX_POLYGONS: usize = u64::BITS as usize;

/// Direction of a crossed edge relative to the sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum SegmentDir {
    Up,
    Down,
}

impl SegmentDir {
    pub fn reversed(self) -> Self {
        match self {
            SegmentDir::Up => SegmentDir::Down,
            SegmentDir::Down => SegmentDir::Up,
        }
    }

    /// Contribution of one crossing to a signed winding count.
    /// Only zero/nonzero and the sign of the sum are ever tested, so the
    /// polarity just has to stay fixed.
    #[inline]
    pub fn winding(self) -> i64 {
        match self {
            SegmentDir::Down => 1,
            SegmentDir::Up => -1,
        }
    }
}

/// Evaluation state of one region of the sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct WindState {
    /// Is this region part of the result?
    pub is_filled: bool,
    /// Signed winding count, or the coverage bitmask for the mask rules.
    pub winding_number: i64,
    polygon_count: usize,
}

impl WindState {
    /// Number of source polygons, fixed when the state was started.
    pub fn polygon_count(&self) -> usize {
        self.polygon_count
    }

    /// The accumulator read as a bitmask: bit `i` is set while source `i`
    /// covers the region. Only meaningful for [`FillRule::Intersect`] and
    /// [`FillRule::Union`].
    #[inline]
    pub fn coverage(&self) -> u64 {
        self.winding_number as u64
    }

    pub fn covers(&self, source: usize) -> bool {
        source < MAX_POLYGONS && self.coverage() & (1u64 << source) != 0
    }
}

/// How the crossing history of a region decides whether it is filled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillRule {
    /// Filled after an odd number of crossings.
    #[default]
    EvenOdd,
    /// Nonzero winding.
    Circular,
    /// Filled where every source polygon covers the region.
    Intersect,
    /// Filled where at least one source polygon covers the region.
    Union,
    /// Filled where the winding count is strictly positive.
    Positive,
}

impl FillRule {
    pub const ALL: [FillRule; 5] = [
        FillRule::EvenOdd,
        FillRule::Circular,
        FillRule::Intersect,
        FillRule::Union,
        FillRule::Positive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FillRule::EvenOdd => "evenodd",
            FillRule::Circular => "circular",
            FillRule::Intersect => "intersect",
            FillRule::Union => "union",
            FillRule::Positive => "positive",
        }
    }

    /// True for the rules that keep one bit per source polygon and therefore
    /// require `source < polygon_count` on every crossing.
    pub fn uses_source_mask(self) -> bool {
        matches!(self, FillRule::Intersect | FillRule::Union)
    }

    /// State of a region before any edge has been crossed.
    pub fn try_start(self, polygon_count: usize) -> Result<WindState, WindError> {
        if polygon_count == 0 {
            return Err(WindError::NoPolygons);
        }
        if self.uses_source_mask() && polygon_count > MAX_POLYGONS {
            return Err(WindError::TooManyPolygons {
                count: polygon_count,
                max: MAX_POLYGONS,
            });
        }
        Ok(WindState {
            is_filled: false,
            winding_number: 0,
            polygon_count,
        })
    }

    /// Like [`try_start`](Self::try_start), panicking on a bad polygon count.
    pub fn start(self, polygon_count: usize) -> WindState {
        match self.try_start(polygon_count) {
            Ok(state) => state,
            Err(e) => panic!("{}", e),
        }
    }

    /// State of the region entered by crossing an edge of polygon `source`
    /// while leaving a region in `state`.
    ///
    /// `style` is the crossed edge's style. None of the built-in rules look at
    /// it.
    pub fn try_combine(
        self,
        state: WindState,
        style: &FillStyle,
        dir: SegmentDir,
        source: usize,
    ) -> Result<WindState, WindError> {
        let _ = style;
        let mut next = state;
        match self {
            FillRule::EvenOdd => {
                next.is_filled = !state.is_filled;
            }
            FillRule::Circular => {
                next.winding_number = state.winding_number + dir.winding();
                next.is_filled = next.winding_number != 0;
            }
            FillRule::Positive => {
                next.winding_number = state.winding_number + dir.winding();
                next.is_filled = next.winding_number > 0;
            }
            FillRule::Intersect => {
                let mask = toggle_source(&state, source)?;
                next.winding_number = mask as i64;
                next.is_filled = mask == full_mask(state.polygon_count);
            }
            FillRule::Union => {
                let mask = toggle_source(&state, source)?;
                next.winding_number = mask as i64;
                next.is_filled = mask != 0;
            }
        }
        Ok(next)
    }

    /// Like [`try_combine`](Self::try_combine), panicking when `source` is out
    /// of range for a mask rule.
    pub fn combine(
        self,
        state: WindState,
        style: &FillStyle,
        dir: SegmentDir,
        source: usize,
    ) -> WindState {
        match self.try_combine(state, style, dir, source) {
            Ok(next) => next,
            Err(e) => panic!("{}", e),
        }
    }

    /// Style of the output edge separating two adjacent regions, or `None`
    /// when both agree on being filled.
    pub fn difference(self, left: &WindState, right: &WindState) -> Option<&'static FillStyle> {
        if left.is_filled == right.is_filled {
            None
        } else {
            Some(&DEFAULT_FILL_STYLE)
        }
    }
}

fn toggle_source(state: &WindState, source: usize) -> Result<u64, WindError> {
    if source >= state.polygon_count || source >= MAX_POLYGONS {
        return Err(WindError::SourceOutOfRange {
            index: source,
            polygon_count: state.polygon_count,
        });
    }
    Ok(state.coverage() ^ (1u64 << source))
}

/// Mask with the low `polygon_count` bits set.
#[inline]
fn full_mask(polygon_count: usize) -> u64 {
    let unused = MAX_POLYGONS.saturating_sub(polygon_count) as u32;
    u64::MAX.checked_shr(unused).unwrap_or(0)
}

impl fmt::Display for FillRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillRule {
    type Err = WindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "evenodd" | "even-odd" | "odd" => Ok(FillRule::EvenOdd),
            "circular" | "nonzero" => Ok(FillRule::Circular),
            "intersect" | "intersection" => Ok(FillRule::Intersect),
            "union" => Ok(FillRule::Union),
            "positive" => Ok(FillRule::Positive),
            _ => Err(WindError::UnknownRule(s.to_string())),
        }
    }
}
