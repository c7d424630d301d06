use alloc::sync::Arc;
use core::fmt;

use page_snap::{
    GestureState, LayoutGeometry, PageSnapError, PagingOptions, ScrollableRow, Snap,
    ViewportState,
};

/// A callback fired when the centered page changes during scrolling.
pub type OnPageChangeCallback = Arc<dyn Fn(&Controller, usize) + Send + Sync>;

/// A framework-neutral controller that tracks one paged row on behalf of a host scroll view.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_width` when the scroll view is laid out or resized
/// - `on_scroll` on every scroll event (reports page changes)
/// - `on_release` once when the user lifts their finger (returns where to rest)
///
/// Animating toward the returned offset is left to the host.
#[derive(Clone)]
pub struct Controller {
    options: PagingOptions,
    viewport_width: f64,
    scroll_offset_x: f64,
    current_page: Option<usize>,
    last_snap: Option<Snap>,
    on_page_change: Option<OnPageChangeCallback>,
}

impl Controller {
    /// Creates a controller with a zero-width viewport; no page is reported until
    /// `on_viewport_width` is called.
    pub fn new(options: PagingOptions) -> Self {
        Self {
            options,
            viewport_width: 0.0,
            scroll_offset_x: 0.0,
            current_page: None,
            last_snap: None,
            on_page_change: None,
        }
    }

    pub fn with_on_page_change(
        mut self,
        on_page_change: Option<impl Fn(&Controller, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.set_on_page_change(on_page_change);
        self
    }

    pub fn set_on_page_change(
        &mut self,
        on_page_change: Option<impl Fn(&Controller, usize) + Send + Sync + 'static>,
    ) {
        self.on_page_change = on_page_change.map(|f| Arc::new(f) as _);
    }

    pub fn options(&self) -> &PagingOptions {
        &self.options
    }

    /// Replaces the row configuration and re-evaluates the current page.
    pub fn set_options(&mut self, options: PagingOptions) -> Option<usize> {
        self.options = options;
        self.last_snap = None;
        self.refresh_page()
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn scroll_offset_x(&self) -> f64 {
        self.scroll_offset_x
    }

    /// The page centered at the last reported offset, or `None` if the row cannot be paged
    /// (no items, invalid item width, viewport not laid out yet).
    ///
    /// This is the cached value; `ScrollableRow::current_page` recomputes it and reports why
    /// paging failed.
    pub fn current_page(&self) -> Option<usize> {
        self.current_page
    }

    /// The snap resolved by the most recent successful `on_release`.
    pub fn last_snap(&self) -> Option<Snap> {
        self.last_snap
    }

    /// Returns `Some(page)` when the centered page changed.
    pub fn on_viewport_width(&mut self, viewport_width: f64) -> Option<usize> {
        self.viewport_width = viewport_width;
        self.refresh_page()
    }

    /// Call this for every scroll offset change reported by the host.
    ///
    /// Returns `Some(page)` when the centered page changed (and fires `on_page_change`).
    pub fn on_scroll(&mut self, scroll_offset_x: f64) -> Option<usize> {
        self.scroll_offset_x = scroll_offset_x;
        self.refresh_page()
    }

    /// Resolves where a released gesture should come to rest.
    ///
    /// If the row cannot be paged, the host's `proposed_offset_x` is returned unchanged.
    pub fn on_release(&mut self, gesture: GestureState) -> f64 {
        match self.snap_target(gesture) {
            Ok(snap) => {
                atrace!(
                    page = snap.page,
                    offset_x = snap.offset_x,
                    "Controller::on_release"
                );
                self.last_snap = Some(snap);
                snap.offset_x
            }
            Err(_err) => {
                awarn!(
                    error = %_err,
                    proposed_offset_x = gesture.proposed_offset_x,
                    "Controller::on_release: keeping proposed offset"
                );
                self.last_snap = None;
                gesture.proposed_offset_x
            }
        }
    }

    fn refresh_page(&mut self) -> Option<usize> {
        let page = ScrollableRow::current_page(self).ok();
        if page == self.current_page {
            return None;
        }
        atrace!(from = ?self.current_page, to = ?page, "Controller: page changed");
        self.current_page = page;

        let page = page?;
        if let Some(cb) = self.on_page_change.clone() {
            cb(self, page);
        }
        Some(page)
    }
}

impl ScrollableRow for Controller {
    fn geometry(&self) -> Result<LayoutGeometry, PageSnapError> {
        self.options.geometry()
    }

    fn viewport(&self) -> ViewportState {
        self.options.viewport(self.scroll_offset_x, self.viewport_width)
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("options", &self.options)
            .field("viewport_width", &self.viewport_width)
            .field("scroll_offset_x", &self.scroll_offset_x)
            .field("current_page", &self.current_page)
            .field("last_snap", &self.last_snap)
            .finish_non_exhaustive()
    }
}
