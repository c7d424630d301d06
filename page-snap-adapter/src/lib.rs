//! Adapter utilities for the `page-snap` crate.
//!
//! The `page-snap` crate is stateless and focuses on the core math. This crate provides the small
//! piece of state a host scroll view usually wants around it:
//!
//! - live "current page" reporting while the user scrolls
//! - once-per-release snap resolution, falling back to the host's own proposal when the row is
//!   misconfigured
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;


pub use controller::{Controller, OnPageChangeCallback};
