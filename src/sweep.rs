// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Fill-rule evaluation along a single sweep line.
//
// The sweep algorithm that finds crossings lives elsewhere. A Scanline takes
// the crossings it reports, already sorted by position, threads one WindState
// through them and records which crossings become output edges.

use log::{debug, trace};

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::error::WindError;
use crate::style::FillStyle;
use crate::wind::{FillRule, SegmentDir, WindState};

/// An input edge crossing the sweep line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Crossing {
    /// Index of the polygon the edge belongs to.
    pub source: usize,
    pub dir: SegmentDir,
    pub style: FillStyle,
}

impl Crossing {
    pub fn new(source: usize, dir: SegmentDir) -> Self {
        Crossing {
            source,
            dir,
            style: FillStyle::default(),
        }
    }

    pub fn with_style(mut self, style: FillStyle) -> Self {
        self.style = style;
        self
    }
}

/// An active region: the area between two adjacent crossings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActiveRegion {
    pub state: WindState,
    /// Crossing bounding the region from below; `None` for the region
    /// outside every polygon where the sweep line starts.
    pub below: Option<usize>,
}

/// An output edge: crossing `crossing` separates a filled region from an
/// unfilled one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Boundary {
    pub crossing: usize,
    pub style: &'static FillStyle,
}

/// Fill state of every region along one sweep line.
#[derive(Clone, Debug)]
pub struct Scanline {
    rule: FillRule,
    crossings: Vec<Crossing>,
    // Never empty: regions[0] is the outside region from `start`.
    regions: Vec<ActiveRegion>,
    boundaries: Vec<Boundary>,
}

impl Scanline {
    pub fn try_new(rule: FillRule, polygon_count: usize) -> Result<Self, WindError> {
        let state = rule.try_start(polygon_count)?;
        Ok(Scanline {
            rule,
            crossings: Vec::new(),
            regions: vec![ActiveRegion { state, below: None }],
            boundaries: Vec::new(),
        })
    }

    /// Panics when `polygon_count` is not valid for `rule`.
    pub fn new(rule: FillRule, polygon_count: usize) -> Self {
        match Self::try_new(rule, polygon_count) {
            Ok(scanline) => scanline,
            Err(e) => panic!("{}", e),
        }
    }

    /// Runs every crossing through a fresh scanline.
    pub fn evaluate<I>(rule: FillRule, polygon_count: usize, crossings: I) -> Self
    where
        I: IntoIterator<Item = Crossing>,
    {
        let mut scanline = Self::new(rule, polygon_count);
        for crossing in crossings {
            scanline.cross(crossing);
        }
        scanline
    }

    pub fn rule(&self) -> FillRule {
        self.rule
    }

    /// State of the region the sweep is currently in.
    pub fn state(&self) -> WindState {
        self.regions[self.regions.len() - 1].state
    }

    /// Crosses the next edge. Returns the boundary to emit along it, if the
    /// regions on either side disagree.
    ///
    /// A rejected crossing leaves the scanline unchanged.
    pub fn try_cross(&mut self, crossing: Crossing) -> Result<Option<Boundary>, WindError> {
        let left = self.state();
        let right = match self
            .rule
            .try_combine(left, &crossing.style, crossing.dir, crossing.source)
        {
            Ok(state) => state,
            Err(e) => {
                debug!("{} scanline rejected {:?}: {}", self.rule, crossing, e);
                return Err(e);
            }
        };

        let index = self.crossings.len();
        self.crossings.push(crossing);
        self.regions.push(ActiveRegion {
            state: right,
            below: Some(index),
        });

        let boundary = self
            .rule
            .difference(&left, &right)
            .map(|style| Boundary { crossing: index, style });
        trace!(
            "  cross: {} #{} src={} dir={:?} winding={} -> {} filled={} boundary={}",
            self.rule,
            index,
            crossing.source,
            crossing.dir,
            left.winding_number,
            right.winding_number,
            right.is_filled,
            boundary.is_some()
        );
        if let Some(b) = boundary {
            self.boundaries.push(b);
        }
        Ok(boundary)
    }

    /// Like [`try_cross`](Self::try_cross), panicking on a source index the
    /// rule cannot accept.
    pub fn cross(&mut self, crossing: Crossing) -> Option<Boundary> {
        match self.try_cross(crossing) {
            Ok(boundary) => boundary,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    /// Regions in sweep order, starting with the outside region.
    pub fn regions(&self) -> &[ActiveRegion] {
        &self.regions
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// `is_filled` of every region in sweep order, starting with the outside
    /// region.
    pub fn fill_sequence(&self) -> Vec<bool> {
        self.regions.iter().map(|r| r.state.is_filled).collect()
    }
}
