// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-supplied viewport and pointer button state.

use kurbo::{Point, Rect};

use crate::ScrollAxis;

bitflags::bitflags! {
    /// Pointer buttons involved in an input event.
    ///
    /// Touch contacts and pen tips should be reported as [`PointerButtons::PRIMARY`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Left mouse button, touch contact, or pen tip.
        const PRIMARY   = 0b0000_0001;
        /// Right mouse button or pen barrel button.
        const SECONDARY = 0b0000_0010;
        /// Middle mouse button.
        const AUXILIARY = 0b0000_0100;
        /// "Back" side button.
        const X1        = 0b0000_1000;
        /// "Forward" side button.
        const X2        = 0b0001_0000;
    }
}

impl PointerButtons {
    /// Returns `true` if these buttons may drive scrolling.
    #[must_use]
    pub const fn drives_scroll(self) -> bool {
        self.contains(Self::PRIMARY)
    }
}

/// The visible region a scroller is attached to.
///
/// Hosts implement this for whatever layout node owns the scroller. Pointer
/// positions handed to [`ItemScroller`](crate::ItemScroller) are in the host's
/// coordinate space (y pointing down) and are projected through
/// [`Viewport::to_local`] before use.
pub trait Viewport {
    /// Size of the viewport along `axis`, in the same units as local points.
    fn extent(&self, axis: ScrollAxis) -> f64;

    /// Projects a host-space point into viewport-local coordinates.
    ///
    /// Returns `None` when no meaningful projection exists; the scroller skips
    /// such events.
    fn to_local(&self, point: Point) -> Option<Point>;
}

/// A viewport given directly as an axis-aligned rectangle in host space.
///
/// Points outside the rectangle still project, so a drag that leaves the
/// viewport keeps scrolling. Non-finite input and zero-area rectangles do not.
impl Viewport for Rect {
    fn extent(&self, axis: ScrollAxis) -> f64 {
        let r = self.abs();
        match axis {
            ScrollAxis::Vertical => r.height(),
            ScrollAxis::Horizontal => r.width(),
        }
    }

    fn to_local(&self, point: Point) -> Option<Point> {
        if !self.is_finite() || !point.is_finite() || self.is_zero_area() {
            return None;
        }
        Some((point - self.abs().origin()).to_point())
    }
}
