// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed, eased transitions between two scroll positions.

use crate::Ease;
use crate::math::DIVISOR_EPSILON;

/// Progress at or above which a transition counts as finished.
const COMPLETE_ALPHA: f64 = 1.0 - 1e-9;

/// An in-flight auto-scroll, measured on the scroller's own clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AutoScroll {
    /// Position when the transition started.
    pub(crate) from: f64,
    /// Position the transition ends on.
    pub(crate) to: f64,
    pub(crate) start_time: f64,
    pub(crate) duration: f64,
    pub(crate) ease: Ease,
}

impl AutoScroll {
    pub(crate) fn new(from: f64, to: f64, start_time: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_time,
            duration: if duration.is_finite() {
                duration.max(0.0)
            } else {
                0.0
            },
            ease,
        }
    }

    /// Normalized progress in `[0, 1]` at clock time `now`.
    pub(crate) fn alpha(&self, now: f64) -> f64 {
        ((now - self.start_time) / self.duration.max(DIVISOR_EPSILON)).clamp(0.0, 1.0)
    }

    /// Position at normalized progress `alpha`.
    pub(crate) fn sample(&self, alpha: f64) -> f64 {
        if alpha >= COMPLETE_ALPHA {
            return self.to;
        }
        self.ease.interpolate(self.from, self.to, alpha)
    }

    pub(crate) fn is_complete(alpha: f64) -> bool {
        alpha >= COMPLETE_ALPHA
    }
}
