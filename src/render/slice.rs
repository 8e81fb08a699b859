use serde::{Deserialize, Serialize};

use crate::foundation::core::Bound;

/// 9-slice guide offsets in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceGuides {
    /// Top guide.
    pub top: i32,
    /// Left guide.
    pub left: i32,
    /// Bottom guide.
    pub bottom: i32,
    /// Right guide.
    pub right: i32,
}

impl SliceGuides {
    /// Derive guides from the host's guide rectangle.
    ///
    /// The host stores the guide pairs in a rectangle whose corners are swapped depending on
    /// the sign of the guides; a pair is read in reverse when `bottom_right < 0` or
    /// `top_left >= 0` on that axis.
    pub fn from_guides(guides: &Bound) -> Self {
        let tl = guides.top_left;
        let br = guides.bottom_right;
        let x_swapped = br.x < 0.0 || tl.x >= 0.0;
        let y_swapped = br.y < 0.0 || tl.y >= 0.0;

        let (top, bottom) = if x_swapped { (tl.x, br.x) } else { (br.x, tl.x) };
        let (left, right) = if y_swapped { (tl.y, br.y) } else { (br.y, tl.y) };

        Self {
            top: top.ceil() as i32,
            left: left.ceil() as i32,
            bottom: bottom.ceil() as i32,
            right: right.ceil() as i32,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/slice.rs"]
mod tests;
