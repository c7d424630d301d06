use crate::PageSnapError;

/// Index ↔ coordinate mapping for a uniform horizontal strip.
///
/// Item 0 sits flush at the local origin (`x = 0`). Content insets and scroll offsets are layered
/// on by the caller, never by the geometry itself.
///
/// Construct via [`LayoutGeometry::new`], which rejects non-positive widths and negative
/// spacing, so every value of this type is a valid geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeometry"))]
pub struct LayoutGeometry {
    item_width: f64,
    item_spacing: f64,
}

impl LayoutGeometry {
    pub fn new(item_width: f64, item_spacing: f64) -> Result<Self, PageSnapError> {
        if !(item_width.is_finite() && item_width > 0.0) {
            pwarn!(item_width, "LayoutGeometry::new: rejected item width");
            return Err(PageSnapError::InvalidItemWidth { width: item_width });
        }
        if !(item_spacing.is_finite() && item_spacing >= 0.0) {
            pwarn!(item_spacing, "LayoutGeometry::new: rejected item spacing");
            return Err(PageSnapError::InvalidItemSpacing {
                spacing: item_spacing,
            });
        }
        Ok(Self {
            item_width,
            item_spacing,
        })
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn item_spacing(&self) -> f64 {
        self.item_spacing
    }

    /// Distance between the same edge of two neighbouring items.
    pub fn pitch(&self) -> f64 {
        self.item_width + self.item_spacing
    }

    /// X coordinate of the visual center of item `index`.
    pub fn center_x(&self, index: usize) -> f64 {
        let half = self.item_width / 2.0;
        if index == 0 {
            return half;
        }
        index as f64 * self.pitch() + half
    }

    /// `index * item_width + max(index - 1, 0) * item_spacing`.
    ///
    /// This is the trailing edge of item `index - 1`, so `left_x(count)` is the width of a row of
    /// `count` items.
    pub fn left_x(&self, index: usize) -> f64 {
        row_width(self.item_width, self.item_spacing, index)
    }

    /// Width of a row of `count` items (no insets).
    pub fn content_width(&self, count: usize) -> f64 {
        self.left_x(count)
    }
}

/// Width of `count` items laid end to end with `item_spacing` between neighbours.
///
/// Unvalidated, so options can report a width before their geometry is checked.
pub(crate) fn row_width(item_width: f64, item_spacing: f64, count: usize) -> f64 {
    count as f64 * item_width + count.saturating_sub(1) as f64 * item_spacing
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeometry {
    item_width: f64,
    item_spacing: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeometry> for LayoutGeometry {
    type Error = PageSnapError;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        Self::new(raw.item_width, raw.item_spacing)
    }
}
