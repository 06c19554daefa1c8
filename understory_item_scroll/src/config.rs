// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll configuration: axis, movement policy, inertia, and snapping.

use kurbo::Vec2;

use crate::Ease;

/// Axis along which pointer motion is projected into scroll motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScrollAxis {
    /// Items are laid out top to bottom.
    #[default]
    Vertical,
    /// Items are laid out left to right.
    Horizontal,
}

impl ScrollAxis {
    /// Returns the component of `v` along this axis.
    #[must_use]
    pub const fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Vertical => v.y,
            Self::Horizontal => v.x,
        }
    }

    /// Returns the component of `v` across this axis.
    #[must_use]
    pub const fn cross_component(self, v: Vec2) -> f64 {
        match self {
            Self::Vertical => v.x,
            Self::Horizontal => v.y,
        }
    }
}

/// How the scroll position behaves at the ends of the item range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MovementType {
    /// No bounds. Positions wrap for looping lists and carousels.
    Unrestricted,
    /// Overscroll is allowed with rubber-band resistance, then animates back.
    #[default]
    Elastic,
    /// Position is hard-limited to `[0, item_count - 1]`.
    Clamped,
}

/// Settings for snapping to the nearest item once inertia runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapConfig {
    /// Whether snapping is enabled.
    pub enabled: bool,
    /// Speed (items per second) below which inertia hands over to a snap.
    pub velocity_threshold: f64,
    /// Duration of the snap animation in seconds.
    pub duration: f64,
    /// Easing curve of the snap animation.
    pub ease: Ease,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            velocity_threshold: 0.5,
            duration: 0.3,
            ease: Ease::InOutCubic,
        }
    }
}

/// Behavior configuration for an [`ItemScroller`](crate::ItemScroller).
///
/// All fields may be changed at any time through
/// [`ItemScroller::set_config`](crate::ItemScroller::set_config); changes apply
/// from the next input event or frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollConfig {
    /// Axis along which pointer motion scrolls.
    pub axis: ScrollAxis,
    /// Behavior at the ends of the item range.
    pub movement: MovementType,
    /// Items travelled when the pointer crosses the whole viewport.
    ///
    /// This is also the viewport extent in item units used to scale elastic
    /// resistance.
    pub sensitivity: f64,
    /// Whether released drags keep moving.
    pub inertia: bool,
    /// Fraction of velocity retained after one second of inertia.
    pub deceleration_rate: f64,
    /// Snap settings.
    pub snap: SnapConfig,
    /// Whether drag and wheel input are accepted at all.
    pub draggable: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            axis: ScrollAxis::default(),
            movement: MovementType::default(),
            sensitivity: 1.0,
            inertia: true,
            deceleration_rate: 0.03,
            snap: SnapConfig::default(),
            draggable: true,
        }
    }
}

impl ScrollConfig {
    /// Returns a copy with out-of-range values replaced by usable ones.
    ///
    /// Negative durations and thresholds become zero, the deceleration rate is
    /// limited to `[0, 1]`, and non-finite numbers fall back to defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        debug_assert!(
            self.sensitivity.is_finite()
                && self.deceleration_rate.is_finite()
                && self.snap.velocity_threshold.is_finite()
                && self.snap.duration.is_finite(),
            "ScrollConfig values must be finite; got {self:?}"
        );
        let defaults = Self::default();
        let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            sensitivity: finite_or(self.sensitivity, defaults.sensitivity),
            deceleration_rate: finite_or(self.deceleration_rate, defaults.deceleration_rate)
                .clamp(0.0, 1.0),
            snap: SnapConfig {
                velocity_threshold: finite_or(
                    self.snap.velocity_threshold,
                    defaults.snap.velocity_threshold,
                )
                .max(0.0),
                duration: finite_or(self.snap.duration, defaults.snap.duration).max(0.0),
                ..self.snap
            },
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{MovementType, ScrollAxis, ScrollConfig};

    #[test]
    fn defaults_match_carousel_feel() {
        let config = ScrollConfig::default();
        assert_eq!(config.axis, ScrollAxis::Vertical);
        assert_eq!(config.movement, MovementType::Elastic);
        assert!(config.inertia);
        assert!(config.snap.enabled);
        assert_eq!(config.deceleration_rate, 0.03);
        assert_eq!(config.snap.velocity_threshold, 0.5);
        assert_eq!(config.snap.duration, 0.3);
    }

    #[test]
    fn axis_picks_components() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(ScrollAxis::Vertical.component(v), -4.0);
        assert_eq!(ScrollAxis::Horizontal.component(v), 3.0);
        assert_eq!(ScrollAxis::Vertical.cross_component(v), 3.0);
    }

    #[test]
    fn sanitized_limits_ranges() {
        let mut config = ScrollConfig {
            deceleration_rate: 1.5,
            ..ScrollConfig::default()
        };
        config.snap.duration = -1.0;
        config.snap.velocity_threshold = -0.2;
        let config = config.sanitized();
        assert_eq!(config.deceleration_rate, 1.0);
        assert_eq!(config.snap.duration, 0.0);
        assert_eq!(config.snap.velocity_threshold, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_document_fills_in_defaults() {
        let config: ScrollConfig =
            serde_json::from_str(r#"{ "movement": "clamped", "snap": { "duration": 0.5 } }"#)
                .unwrap();
        assert_eq!(config.movement, MovementType::Clamped);
        assert_eq!(config.snap.duration, 0.5);
        assert!(config.snap.enabled);
        assert_eq!(config.sensitivity, 1.0);
    }
}
