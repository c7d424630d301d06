//! Headless snap-to-page math for a horizontally scrolling row of fixed-size, evenly spaced items.
//!
//! For host-side glue (live page reporting, release handling), see the `page-snap-adapter` crate.
//!
//! This crate answers two questions about a single-row strip:
//! - which item is currently centered in the viewport ([`locate`])
//! - where a released scroll gesture should come to rest so that exactly one item is centered
//!   ([`resolve`] / [`resolve_snap`])
//!
//! It is UI-agnostic and stateless. A TUI/GUI layer is expected to provide, on every call:
//! - item width and inter-item spacing
//! - scroll offset, viewport width, content width and content insets
//! - item count, and on release the gesture velocity and the host's proposed offset
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod locate;
mod options;
mod row;
mod snap;
mod state;


pub use error::PageSnapError;
pub use geometry::LayoutGeometry;
pub use locate::locate;
pub use options::PagingOptions;
pub use row::ScrollableRow;
pub use snap::{SNAP_VELOCITY_THRESHOLD, Snap, SnapKind, resolve, resolve_snap};
pub use state::{GestureState, ViewportState};
