// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for auto-scroll transitions.

/// Easing curve applied to the normalized progress of an auto-scroll.
///
/// Every curve maps `0.0` to `0.0` and `1.0` to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic acceleration from rest.
    InQuad,
    /// Quadratic deceleration to rest.
    OutQuad,
    /// Quadratic acceleration, then deceleration.
    InOutQuad,
    /// Cubic acceleration from rest.
    InCubic,
    /// Cubic deceleration to rest.
    OutCubic,
    /// Cubic acceleration, then deceleration.
    #[default]
    InOutCubic,
    /// Quintic deceleration to rest.
    OutQuint,
}

impl Ease {
    /// Applies the curve to `t`, which is clamped to `[0, 1]` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::InOutCubic => in_out_cubic(t),
            Self::OutQuint => {
                let u = 1.0 - t;
                1.0 - u * u * u * u * u
            }
        }
    }

    /// Interpolates from `start` to `end` along the curve at progress `t`.
    #[must_use]
    pub fn interpolate(self, start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * self.apply(t)
    }
}

fn in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Interpolates from `start` to `end` with symmetric cubic acceleration and
/// deceleration at progress `t` (clamped to `[0, 1]`).
///
/// ```
/// use understory_item_scroll::ease_in_out_cubic;
///
/// assert_eq!(ease_in_out_cubic(0.0, 4.0, 0.0), 0.0);
/// assert_eq!(ease_in_out_cubic(0.0, 4.0, 0.5), 2.0);
/// assert_eq!(ease_in_out_cubic(0.0, 4.0, 1.0), 4.0);
/// ```
#[must_use]
pub fn ease_in_out_cubic(start: f64, end: f64, t: f64) -> f64 {
    Ease::InOutCubic.interpolate(start, end, t)
}

#[cfg(test)]
mod tests {
    use super::{Ease, ease_in_out_cubic};

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::OutQuint,
    ];

    #[test]
    fn curves_pin_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for ease in ALL {
            let mut last = 0.0;
            for step in 1..=100 {
                let v = ease.apply(f64::from(step) / 100.0);
                assert!(v >= last, "{ease:?} decreased at step {step}");
                last = v;
            }
        }
    }

    #[test]
    fn in_out_cubic_is_symmetric() {
        for step in 0..=10 {
            let t = f64::from(step) / 10.0;
            let a = ease_in_out_cubic(0.0, 1.0, t);
            let b = 1.0 - ease_in_out_cubic(0.0, 1.0, 1.0 - t);
            assert!((a - b).abs() < 1e-12, "asymmetric at {t}");
        }
        assert!((ease_in_out_cubic(0.0, 1.0, 0.25) - 0.0625).abs() < 1e-12);
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        assert_eq!(ease_in_out_cubic(2.0, 6.0, -1.0), 2.0);
        assert_eq!(ease_in_out_cubic(2.0, 6.0, 3.0), 6.0);
    }
}
