use crate::{GestureState, LayoutGeometry, PageSnapError, ViewportState, locate};

/// Release velocity a gesture must strictly exceed (in either direction) to advance a page.
///
/// Units are whatever the host scroll system reports; the dead zone keeps residual velocity from
/// a near-stationary release from flipping pages.
pub const SNAP_VELOCITY_THRESHOLD: f64 = 0.2;

/// Which rule produced a [`Snap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapKind {
    /// Decisive rightward flick: advance one page.
    Next,
    /// Decisive leftward flick: go back one page.
    Previous,
    /// Released past the left edge: rest against the left inset.
    LeadingEdge,
    /// Released at or past the right edge: rest against the right inset.
    TrailingEdge,
    /// Slow release mid-row: center the current page.
    Nearest,
}

/// A resolved rest position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snap {
    /// Target scroll offset.
    pub offset_x: f64,
    /// The page centered (or edge-aligned) at `offset_x`.
    pub page: usize,
    pub kind: SnapKind,
}

/// Computes the rest offset for a released scroll gesture.
///
/// See [`resolve_snap`] for the rules; this returns only the offset.
pub fn resolve(
    proposed_offset_x: f64,
    velocity_x: f64,
    viewport: &ViewportState,
    geometry: &LayoutGeometry,
) -> Result<f64, PageSnapError> {
    resolve_snap(
        GestureState::new(velocity_x, proposed_offset_x),
        viewport,
        geometry,
    )
    .map(|snap| snap.offset_x)
}

/// Computes where a released gesture should come to rest so that exactly one item is centered.
///
/// Rules, first match wins:
/// 1. `velocity_x > SNAP_VELOCITY_THRESHOLD` and not at the right edge: the next page. Landing on
///    the last page rests at `max_offset_x` instead of centering it.
/// 2. `velocity_x < -SNAP_VELOCITY_THRESHOLD` and not at the left edge: the previous page.
///    Landing on page 0 rests at `-left_inset`.
/// 3. At the left edge (`proposed_offset_x < 0`): `-left_inset`.
/// 4. At the right edge (no scroll remaining from the current offset): `max_offset_x`.
/// 5. Otherwise: center the current page.
///
/// The current page is [`locate`]d from `viewport.scroll_offset_x`, not from the proposal. Page
/// steps never leave `0..item_count`.
///
/// A row with a single item has nowhere to step to: it always rests with that item centered,
/// whatever the velocity, proposal or insets.
pub fn resolve_snap(
    gesture: GestureState,
    viewport: &ViewportState,
    geometry: &LayoutGeometry,
) -> Result<Snap, PageSnapError> {
    let current_page = locate(
        viewport.scroll_offset_x,
        viewport.viewport_width,
        geometry,
        viewport.item_count,
    )?;
    let last_page = viewport.item_count - 1;
    let half_viewport = viewport.viewport_width / 2.0;
    let min_offset_x = viewport.min_offset_x();
    let max_offset_x = viewport.max_offset_x();

    let is_at_left_edge = gesture.proposed_offset_x < 0.0;
    let is_at_right_edge = viewport.remaining_scroll_x() <= 0.0;

    let centered = |page: usize| geometry.center_x(page) - half_viewport;
    let page_at = |offset_x: f64| {
        locate(offset_x, viewport.viewport_width, geometry, viewport.item_count)
    };

    let snap = if last_page == 0 {
        Snap {
            offset_x: centered(0),
            page: 0,
            kind: SnapKind::Nearest,
        }
    } else if gesture.velocity_x > SNAP_VELOCITY_THRESHOLD && !is_at_right_edge {
        let page = current_page.saturating_add(1).min(last_page);
        let offset_x = if page == last_page {
            max_offset_x
        } else {
            centered(page)
        };
        Snap {
            offset_x,
            page,
            kind: SnapKind::Next,
        }
    } else if gesture.velocity_x < -SNAP_VELOCITY_THRESHOLD && !is_at_left_edge {
        let page = current_page.saturating_sub(1);
        let offset_x = if page == 0 {
            min_offset_x
        } else {
            centered(page)
        };
        Snap {
            offset_x,
            page,
            kind: SnapKind::Previous,
        }
    } else if is_at_left_edge {
        Snap {
            offset_x: min_offset_x,
            page: page_at(min_offset_x)?,
            kind: SnapKind::LeadingEdge,
        }
    } else if is_at_right_edge {
        Snap {
            offset_x: max_offset_x,
            page: page_at(max_offset_x)?,
            kind: SnapKind::TrailingEdge,
        }
    } else {
        Snap {
            offset_x: centered(current_page),
            page: current_page,
            kind: SnapKind::Nearest,
        }
    };

    pdebug!(
        current_page,
        velocity_x = gesture.velocity_x,
        proposed_offset_x = gesture.proposed_offset_x,
        target_offset_x = snap.offset_x,
        target_page = snap.page,
        kind = ?snap.kind,
        "resolve_snap"
    );
    Ok(snap)
}
