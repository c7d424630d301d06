use crate::{
    GestureState, LayoutGeometry, PageSnapError, Snap, ViewportState, locate, resolve_snap,
};

/// A scrollable single-row strip, as seen by the paging math.
///
/// Implement this on whatever owns the host's scroll state; the provided methods re-read the
/// geometry and viewport on every call, so nothing is cached between queries.
pub trait ScrollableRow {
    fn geometry(&self) -> Result<LayoutGeometry, PageSnapError>;

    fn viewport(&self) -> ViewportState;

    /// The page currently centered in the viewport.
    fn current_page(&self) -> Result<usize, PageSnapError> {
        let geometry = self.geometry()?;
        let viewport = self.viewport();
        locate(
            viewport.scroll_offset_x,
            viewport.viewport_width,
            &geometry,
            viewport.item_count,
        )
    }

    /// Where a gesture released now should come to rest.
    fn snap_target(&self, gesture: GestureState) -> Result<Snap, PageSnapError> {
        let geometry = self.geometry()?;
        resolve_snap(gesture, &self.viewport(), &geometry)
    }
}
