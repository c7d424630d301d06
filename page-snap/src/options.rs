use crate::geometry::row_width;
use crate::{LayoutGeometry, PageSnapError, ViewportState};

/// Configuration for a paged row.
///
/// Plain data: the host keeps one of these per row and derives a fresh [`ViewportState`] from it
/// on every query via [`PagingOptions::viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingOptions {
    pub count: usize,
    /// Item size in the scroll axis.
    pub item_width: f64,
    /// Space between neighbouring items.
    pub item_spacing: f64,
    /// Content inset before the first item.
    pub left_inset: f64,
    /// Content inset after the last item.
    pub right_inset: f64,
}

impl PagingOptions {
    /// Creates options for `count` items of `item_width`, with no spacing and no insets.
    pub fn new(count: usize, item_width: f64) -> Self {
        Self {
            count,
            item_width,
            item_spacing: 0.0,
            left_inset: 0.0,
            right_inset: 0.0,
        }
    }

    /// Fifteen 280-wide cards, 30 apart, with 100 of inset on both sides.
    pub fn flow_layout_default() -> Self {
        Self::new(15, 280.0)
            .with_item_spacing(30.0)
            .with_insets(100.0, 100.0)
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_item_spacing(mut self, item_spacing: f64) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    pub fn with_insets(mut self, left_inset: f64, right_inset: f64) -> Self {
        self.left_inset = left_inset;
        self.right_inset = right_inset;
        self
    }

    pub fn geometry(&self) -> Result<LayoutGeometry, PageSnapError> {
        LayoutGeometry::new(self.item_width, self.item_spacing)
    }

    /// Row width excluding insets; `0.0` for an empty row.
    pub fn content_width(&self) -> f64 {
        row_width(self.item_width, self.item_spacing, self.count)
    }

    /// Snapshot of this row scrolled to `scroll_offset_x` inside a viewport of `viewport_width`.
    pub fn viewport(&self, scroll_offset_x: f64, viewport_width: f64) -> ViewportState {
        ViewportState {
            scroll_offset_x,
            viewport_width,
            content_width: self.content_width(),
            left_inset: self.left_inset,
            right_inset: self.right_inset,
            item_count: self.count,
        }
    }
}
