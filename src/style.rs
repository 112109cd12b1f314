// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Paint descriptor attached to an edge.
///
/// The fill rules never look inside a style. Input edges carry whatever id the
/// caller chose; boundary edges found by [`FillRule::difference`](crate::FillRule::difference)
/// are tagged with [`DEFAULT_FILL_STYLE`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FillStyle {
    pub id: u32,
}

impl FillStyle {
    pub const fn new(id: u32) -> Self {
        FillStyle { id }
    }
}

/// The style every rule hands out for an emitted boundary edge.
pub static DEFAULT_FILL_STYLE: FillStyle = FillStyle::new(0);
