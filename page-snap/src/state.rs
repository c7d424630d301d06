/// One instantaneous snapshot of the scrollable region.
///
/// Produced fresh by the host on every query and never retained.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset_x: f64,
    pub viewport_width: f64,
    /// Total content width, excluding insets.
    pub content_width: f64,
    pub left_inset: f64,
    pub right_inset: f64,
    pub item_count: usize,
}

impl ViewportState {
    /// Offset that rests the content against the left inset.
    pub fn min_offset_x(&self) -> f64 {
        -self.left_inset
    }

    /// Offset that rests the content against the right inset.
    pub fn max_offset_x(&self) -> f64 {
        self.content_width - self.viewport_width + self.right_inset
    }

    /// Scroll distance left before the viewport's trailing edge reaches the content end.
    pub fn remaining_scroll_x(&self) -> f64 {
        self.content_width - self.viewport_width - self.scroll_offset_x
    }
}

/// The host scroll system's proposal plus the release velocity, consumed once per gesture end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureState {
    pub velocity_x: f64,
    pub proposed_offset_x: f64,
}

impl GestureState {
    pub fn new(velocity_x: f64, proposed_offset_x: f64) -> Self {
        Self {
            velocity_x,
            proposed_offset_x,
        }
    }
}
