// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary, elastic, and wrap-around math in item units.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::MovementType;

/// Floor applied to divisors such as viewport extents, durations, and `dt`.
pub(crate) const DIVISOR_EPSILON: f64 = 1e-6;

/// Magnitudes at or below this are treated as zero when deciding whether the
/// scroller is at rest.
pub(crate) const REST_TOLERANCE: f64 = 1e-6;

pub(crate) fn approx_zero(v: f64) -> bool {
    v.abs() <= REST_TOLERANCE
}

/// Position of the last item. An empty strip behaves like a single item.
#[must_use]
pub fn last_position(item_count: usize) -> f64 {
    item_count.saturating_sub(1) as f64
}

/// Returns the correction that brings `position` back into `[0, item_count - 1]`.
///
/// The result is `0.0` for in-range positions and always `0.0` under
/// [`MovementType::Unrestricted`]. Adding it to `position` yields the nearest
/// in-range position.
///
/// ```
/// use understory_item_scroll::{MovementType, boundary_offset};
///
/// assert_eq!(boundary_offset(-0.5, 5, MovementType::Elastic), 0.5);
/// assert_eq!(boundary_offset(5.0, 5, MovementType::Clamped), -1.0);
/// assert_eq!(boundary_offset(2.5, 5, MovementType::Elastic), 0.0);
/// assert_eq!(boundary_offset(-9.0, 5, MovementType::Unrestricted), 0.0);
/// ```
#[must_use]
pub fn boundary_offset(position: f64, item_count: usize, movement: MovementType) -> f64 {
    if movement == MovementType::Unrestricted {
        return 0.0;
    }
    let last = last_position(item_count);
    if position < 0.0 {
        -position
    } else if position > last {
        last - position
    } else {
        0.0
    }
}

/// Maps an overscroll distance to a damped displacement.
///
/// The curve approaches but never reaches `extent`, and a larger `extent`
/// yields less resistance for the same overstretch. The sign of the result
/// follows `overstretch`.
#[must_use]
pub fn rubber_band_delta(overstretch: f64, extent: f64) -> f64 {
    let extent = extent.abs().max(DIVISOR_EPSILON);
    let magnitude = extent * (1.0 - 1.0 / (overstretch.abs() * 0.55 / extent + 1.0));
    if overstretch < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Maps `position` to its representative in `[0, length)` for a circular strip.
///
/// Negative positions wrap from the end; positions past the end wrap modulo
/// `length`. A `length` of zero maps everything to `0.0`.
///
/// ```
/// use understory_item_scroll::wrap_position;
///
/// assert_eq!(wrap_position(-1.0, 5), 4.0);
/// assert_eq!(wrap_position(7.5, 5), 2.5);
/// assert_eq!(wrap_position(3.0, 5), 3.0);
/// ```
#[must_use]
pub fn wrap_position(position: f64, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let n = length as f64;
    let mut r = position % n;
    if r < 0.0 {
        r += n;
    }
    // `r + n` can round up to exactly `n` for tiny negative inputs.
    if r >= n {
        r -= n;
    }
    r
}

/// Returns the position to animate to so that item `index` is reached along the
/// shorter way around a circular strip of `item_count` items.
///
/// The returned value is expressed relative to `current`, so it may lie outside
/// `[0, item_count)`; the distance from `current` never exceeds half the strip.
///
/// ```
/// use understory_item_scroll::nearest_target_position;
///
/// // Going forward past the end is shorter than going all the way back.
/// let target = nearest_target_position(4.8, 0, 5);
/// assert!((target - 5.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn nearest_target_position(current: f64, index: usize, item_count: usize) -> f64 {
    shortest_path_target(current, index as f64, item_count)
}

/// Like [`nearest_target_position`] for a fractional `target`.
pub(crate) fn shortest_path_target(current: f64, target: f64, item_count: usize) -> f64 {
    if item_count == 0 {
        return current;
    }
    let n = item_count as f64;
    let mut diff = wrap_position(target, item_count) - wrap_position(current, item_count);
    if diff.abs() > n * 0.5 {
        let around = n - diff.abs();
        diff = if diff > 0.0 { -around } else { around };
    }
    current + diff
}

/// Returns the item index nearest to `position` after wrapping into the strip.
///
/// The result is always in `0..item_count` (or `0` for an empty strip).
#[must_use]
pub fn nearest_index(position: f64, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    let rounded = wrap_position(position, item_count).round();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The value is a rounded, non-negative position below `item_count`"
    )]
    let index = rounded.max(0.0) as usize;
    index % item_count
}
