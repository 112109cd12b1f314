// Copyright 2025 Lars Brubaker
// Shared test utilities for windrule tests.

#![allow(dead_code)]

use windrule::{Crossing, FillRule, Scanline, SegmentDir};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Axis-aligned rectangle contour belonging to source polygon `source`.
/// Counter-clockwise unless `reversed`.
#[derive(Copy, Clone, Debug)]
pub struct Rect {
    pub source: usize,
    pub min: [f32; 2],
    pub max: [f32; 2],
    pub reversed: bool,
}

impl Rect {
    pub fn new(source: usize, x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Rect {
            source,
            min: [x0, y0],
            max: [x1, y1],
            reversed: false,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }
}

/// Crossings of the horizontal line at `y` with the given rectangles, sorted
/// by x. For a counter-clockwise contour the left side runs downwards.
pub fn scanline_crossings(rects: &[Rect], y: f32) -> Vec<(f32, Crossing)> {
    let mut out = Vec::new();
    for r in rects {
        if y <= r.min[1] || y >= r.max[1] {
            continue;
        }
        let (left, right) = if r.reversed {
            (SegmentDir::Up, SegmentDir::Down)
        } else {
            (SegmentDir::Down, SegmentDir::Up)
        };
        out.push((r.min[0], Crossing::new(r.source, left)));
        out.push((r.max[0], Crossing::new(r.source, right)));
    }
    out.sort_by(|a, b| a.0.total_cmp(&b.0));
    out
}

/// Evaluate a horizontal line through `rects` and return the scanline and
/// the x position of every crossing.
pub fn sweep_rects(rule: FillRule, polygon_count: usize, rects: &[Rect], y: f32) -> (Scanline, Vec<f32>) {
    init_logging();
    let crossings = scanline_crossings(rects, y);
    let xs = crossings.iter().map(|(x, _)| *x).collect();
    let scanline = Scanline::evaluate(rule, polygon_count, crossings.into_iter().map(|(_, c)| c));
    (scanline, xs)
}

/// Total length of filled regions between crossings.
pub fn filled_length(scanline: &Scanline, xs: &[f32]) -> f32 {
    let regions = scanline.regions();
    let mut total = 0.0f32;
    // regions[i + 1] lies between crossing i and crossing i + 1.
    for i in 0..xs.len().saturating_sub(1) {
        if regions[i + 1].state.is_filled {
            total += xs[i + 1] - xs[i];
        }
    }
    total
}

/// x positions where output edges are emitted.
pub fn boundary_positions(scanline: &Scanline, xs: &[f32]) -> Vec<f32> {
    scanline.boundaries().iter().map(|b| xs[b.crossing]).collect()
}

/// Parse a crossing list: one crossing per line as `source dir` where dir is
/// `up`/`u` or `down`/`d`. Blank lines and `#` comments separate scanlines.
pub fn parse_crossings(data: &str) -> Vec<Vec<Crossing>> {
    let mut lines: Vec<Vec<Crossing>> = Vec::new();
    let mut current: Vec<Crossing> = Vec::new();

    for line in data.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            continue;
        }
        let mut parts = trimmed.split_whitespace();
        let source = parts.next().and_then(|s| s.parse::<usize>().ok());
        let dir = match parts.next().map(|s| s.to_ascii_lowercase()) {
            Some(d) if d == "up" || d == "u" => Some(SegmentDir::Up),
            Some(d) if d == "down" || d == "d" => Some(SegmentDir::Down),
            _ => None,
        };
        if let (Some(source), Some(dir)) = (source, dir) {
            current.push(Crossing::new(source, dir));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Verify the invariants every complete scanline must satisfy: one region
/// per crossing plus the outside, boundaries exactly where the fill flips,
/// and the polygon count never changes.
pub fn verify_valid_scanline(scanline: &Scanline) {
    let regions = scanline.regions();
    assert_eq!(regions.len(), scanline.crossings().len() + 1);
    assert_eq!(regions[0].below, None);
    assert!(!regions[0].state.is_filled, "outside region must be unfilled");

    let count = regions[0].state.polygon_count();
    let mut expected = Vec::new();
    for (i, pair) in regions.windows(2).enumerate() {
        assert_eq!(pair[1].below, Some(i));
        assert_eq!(pair[1].state.polygon_count(), count);
        if pair[0].state.is_filled != pair[1].state.is_filled {
            expected.push(i);
        }
    }
    let actual: Vec<usize> = scanline.boundaries().iter().map(|b| b.crossing).collect();
    assert_eq!(actual, expected, "boundaries must sit where the fill flips");
}
