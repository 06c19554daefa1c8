// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_item_scroll --heading-base-level=0

//! Understory Item Scroll: a frame-driven scroll controller measured in items.
//!
//! This crate provides the position state machine behind carousels, pickers, and
//! paged lists. It owns a single scroll position in *item units* (`0.0` is the
//! first item, `1.0` the second, and so on), turns pointer drags into motion,
//! keeps released drags moving with inertia, resists or stops at the ends of the
//! strip, snaps to the nearest item once motion slows, and animates to an item on
//! request.
//!
//! The core concepts are:
//!
//! - [`ItemScroller`]: the controller. Hosts feed it drag and wheel input, call
//!   [`ItemScroller::advance`] once per frame, and receive position updates and
//!   settled-item notifications through single listeners.
//! - [`ScrollConfig`]: axis, [`MovementType`] (unrestricted, elastic, clamped),
//!   sensitivity, inertia, and [`SnapConfig`].
//! - [`Viewport`]: the host-supplied region pointer input is projected into,
//!   implemented for [`kurbo::Rect`].
//! - [`Ease`]: easing curves for auto-scroll transitions.
//! - Free functions for the underlying math: [`boundary_offset`],
//!   [`rubber_band_delta`], [`wrap_position`], [`nearest_target_position`],
//!   [`nearest_index`], and [`ease_in_out_cubic`].
//!
//! This crate deliberately does **not** know about widgets, item layout, or
//! virtualization. Host frameworks are responsible for:
//!
//! - Delivering pointer events in a coordinate space the [`Viewport`] understands.
//! - Driving [`ItemScroller::advance`] from their frame clock.
//! - Mapping the position to item transforms, for example by multiplying by an
//!   item extent and handing the result to a virtual list.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_item_scroll::{ItemScroller, PointerButtons};
//!
//! // Ten items in a 200px tall viewport; one viewport of drag moves one item.
//! let mut scroller = ItemScroller::new(Rect::new(0.0, 0.0, 100.0, 200.0), 10);
//! scroller.on_item_selected(|index| assert_eq!(index, 2));
//!
//! // Flick content up by three quarters of the viewport over five frames.
//! scroller.begin_drag(Point::new(50.0, 180.0), PointerButtons::PRIMARY);
//! for step in 1..=5 {
//!     let y = 180.0 - 30.0 * f64::from(step);
//!     scroller.drag(Point::new(50.0, y), PointerButtons::PRIMARY);
//!     scroller.advance(1.0 / 60.0);
//! }
//! assert_eq!(scroller.position(), 0.75);
//! scroller.end_drag(PointerButtons::PRIMARY);
//!
//! // The flick carries on, slows down, and snaps onto an item.
//! for _ in 0..120 {
//!     scroller.advance(1.0 / 60.0);
//! }
//! assert_eq!(scroller.position(), 2.0);
//! ```
//!
//! ## Looping carousels
//!
//! With [`MovementType::Unrestricted`] the position is unbounded and
//! [`ItemScroller::scroll_to`] takes the shorter way around:
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_item_scroll::{ItemScroller, MovementType, ScrollConfig};
//!
//! let config = ScrollConfig {
//!     movement: MovementType::Unrestricted,
//!     ..ScrollConfig::default()
//! };
//! let mut carousel = ItemScroller::with_config(config, Rect::new(0.0, 0.0, 300.0, 80.0), 5);
//! carousel.jump_to(4);
//!
//! // From the last item, the first one is a single step forward.
//! carousel.scroll_to(0, 0.3);
//! assert_eq!(carousel.auto_scroll_target(), Some(5.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize` and `Deserialize` for the configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod auto_scroll;
mod config;
mod ease;
mod math;
mod scroller;
mod viewport;

pub use config::{MovementType, ScrollAxis, ScrollConfig, SnapConfig};
pub use ease::{Ease, ease_in_out_cubic};
pub use math::{
    boundary_offset, last_position, nearest_index, nearest_target_position, rubber_band_delta,
    wrap_position,
};
pub use scroller::ItemScroller;
pub use viewport::{PointerButtons, Viewport};
