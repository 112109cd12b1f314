// Copyright 2025 Lars Brubaker
// WASM bindings for windrule

use windrule::{Crossing, FillRule, Scanline, SegmentDir};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A scanline that accumulates crossings one at a time.
#[wasm_bindgen]
pub struct ScanlineJs {
    inner: Scanline,
}

#[wasm_bindgen]
impl ScanlineJs {
    /// `rule` is a rule name ("evenodd", "circular", "intersect", "union", "positive").
    #[wasm_bindgen(constructor)]
    pub fn new(rule: &str, polygon_count: u32) -> Result<ScanlineJs, JsError> {
        let rule: FillRule = rule.parse()?;
        let inner = Scanline::try_new(rule, polygon_count as usize)?;
        Ok(ScanlineJs { inner })
    }

    /// Cross an edge of polygon `source`. Returns true if an output edge must
    /// be emitted along it.
    pub fn cross(&mut self, source: u32, down: bool) -> Result<bool, JsError> {
        let dir = if down { SegmentDir::Down } else { SegmentDir::Up };
        let boundary = self.inner.try_cross(Crossing::new(source as usize, dir))?;
        Ok(boundary.is_some())
    }

    pub fn is_filled(&self) -> bool {
        self.inner.state().is_filled
    }

    /// Fill flag of every region, outside region first.
    pub fn fill_sequence(&self) -> Vec<u8> {
        self.inner.fill_sequence().into_iter().map(u8::from).collect()
    }

    /// Indices of the crossings that become output edges.
    pub fn boundaries(&self) -> Vec<u32> {
        self.inner.boundaries().iter().map(|b| b.crossing as u32).collect()
    }
}

/// Convenience: evaluate a whole scanline given parallel arrays of source
/// indices and directions (non-zero = down). Returns the fill sequence.
#[wasm_bindgen]
pub fn evaluate_scanline(rule: &str, polygon_count: u32, sources: &[u32], down: &[u8]) -> Result<Vec<u8>, JsError> {
    let mut scanline = ScanlineJs::new(rule, polygon_count)?;
    for (&source, &d) in sources.iter().zip(down) {
        scanline.cross(source, d != 0)?;
    }
    Ok(scanline.fill_sequence())
}
