// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which edge wins when a dragged extent is larger than the viewport on an axis.
///
/// When the extent does not fit, the near-edge check (`< 0`) and the far-edge
/// check (`> width`/`> height`) both fire for that axis and only one
/// correction can be kept. Extents that fit the viewport are unaffected by
/// this choice.
///
/// Consulted by [`crate::drag_target`] and [`crate::Constraints::drag_target`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OversizePolicy {
    /// Pin the far edge (right/bottom) to the viewport.
    ///
    /// The far-edge correction is applied after the near-edge one and
    /// overrides it.
    #[default]
    PreferMax,
    /// Pin the near edge (left/top) to the viewport origin.
    PreferMin,
}

/// Minimum size applied when a resize gesture is committed.
///
/// Live resize steps are not floored; only [`crate::finish_resize`] applies
/// these limits. The default keeps a strictly positive width and only
/// forbids negative heights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeFloor {
    /// Smallest committed width.
    pub min_width: f64,
    /// Smallest committed height.
    pub min_height: f64,
}

impl SizeFloor {
    /// The floor used when none is configured: width at least `5`, height at least `0`.
    pub const DEFAULT: Self = Self {
        min_width: 5.0,
        min_height: 0.0,
    };

    /// A floor applying the same minimum to both dimensions.
    #[must_use]
    pub const fn uniform(min: f64) -> Self {
        Self {
            min_width: min,
            min_height: min,
        }
    }
}

impl Default for SizeFloor {
    fn default() -> Self {
        Self::DEFAULT
    }
}
