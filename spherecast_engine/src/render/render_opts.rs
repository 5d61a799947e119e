use crate::core::types::Number;
use crate::shared::interval::Interval;
use nonzero::nonzero;
use std::num::NonZeroUsize;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderOpts {
    /// The target dimensions of the render
    pub width: NonZeroUsize,
    pub height: NonZeroUsize,
    /// Maximum distance along a camera ray at which objects are still visible (exclusive).
    ///
    /// Measured in multiples of the ray direction, which for the centre pixel is one world unit.
    pub far_clip: Number,
    /// Whether intersections behind the camera are ignored.
    ///
    /// If `false`, the nearer root along the ray's infinite line is used even when it is behind the camera,
    /// so a sphere behind the camera can hide the ones in front of it.
    pub cull_behind: bool,
}

impl RenderOpts {
    pub const DEFAULT_DIM: NonZeroUsize = nonzero!(128_usize);
    pub const DEFAULT_FAR_CLIP: Number = 1000.;

    pub fn aspect_ratio(&self) -> Number { self.width.get() as Number / self.height.get() as Number }

    pub fn num_px(&self) -> usize { self.width.get() * self.height.get() }

    /// The interval of distances along a camera ray that are accepted as intersections
    pub fn dist_interval(&self) -> Interval<Number> {
        if self.cull_behind {
            Interval::open(0., self.far_clip)
        } else {
            Interval::below(self.far_clip)
        }
    }
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_DIM,
            height: Self::DEFAULT_DIM,
            far_clip: Self::DEFAULT_FAR_CLIP,
            cull_behind: true,
        }
    }
}
