// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame-driven scroll position state machine.

use alloc::boxed::Box;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};
use tracing::{debug, trace};

use crate::auto_scroll::AutoScroll;
use crate::math::{DIVISOR_EPSILON, approx_zero, shortest_path_target};
use crate::{
    Ease, MovementType, PointerButtons, ScrollConfig, Viewport, boundary_offset, last_position,
    nearest_index, nearest_target_position, rubber_band_delta,
};

/// Duration of the animated return after elastic overscroll, in seconds.
const ELASTIC_RETURN_DURATION: f64 = 0.35;

/// Speeds below this (items per second) stop inertia outright.
const VELOCITY_FLOOR: f64 = 0.001;

/// Rate at which the velocity estimate follows pointer motion while dragging.
const VELOCITY_SMOOTHING: f64 = 10.0;

type PositionListener = Box<dyn FnMut(f64)>;
type SelectionListener = Box<dyn FnMut(usize)>;

/// An active drag.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Pointer position at drag start, viewport-local.
    anchor: Point,
    /// Scroll position at drag start.
    start_position: f64,
}

/// Scroll controller for a strip of items, measured in item units.
///
/// Position `0.0` centers the first item and each integer step moves by one
/// item. The host feeds pointer input through [`begin_drag`](Self::begin_drag),
/// [`drag`](Self::drag), and [`end_drag`](Self::end_drag), calls
/// [`advance`](Self::advance) once per frame, and reads the position back
/// either from [`position`](Self::position) or from the listener registered
/// with [`on_position_changed`](Self::on_position_changed).
///
/// Each frame does exactly one of the following:
/// - steps an active auto-scroll, emitting the settled item when it finishes,
/// - lets a released scroller settle: elastic return, inertia, or snap,
/// - re-estimates velocity from an ongoing drag.
///
/// Listeners run synchronously on the caller's stack and cannot reach the
/// scroller, so they cannot re-enter it.
pub struct ItemScroller<V: Viewport = Rect> {
    config: ScrollConfig,
    viewport: V,
    item_count: usize,

    position: f64,
    prev_position: f64,
    velocity: f64,
    /// Sum of all `dt` passed to `advance`, in seconds.
    time: f64,

    drag: Option<DragSession>,
    /// Set by wheel input, cleared at the end of the next frame.
    wheel_scrolling: bool,
    auto_scroll: Option<AutoScroll>,

    on_position_changed: Option<PositionListener>,
    on_item_selected: Option<SelectionListener>,
}

impl<V: Viewport + fmt::Debug> fmt::Debug for ItemScroller<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemScroller")
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("item_count", &self.item_count)
            .field("position", &self.position)
            .field("prev_position", &self.prev_position)
            .field("velocity", &self.velocity)
            .field("time", &self.time)
            .field("drag", &self.drag)
            .field("wheel_scrolling", &self.wheel_scrolling)
            .field("auto_scroll", &self.auto_scroll)
            .finish_non_exhaustive()
    }
}

impl<V: Viewport> ItemScroller<V> {
    /// Creates a scroller at position `0.0` with the default configuration.
    #[must_use]
    pub fn new(viewport: V, item_count: usize) -> Self {
        Self::with_config(ScrollConfig::default(), viewport, item_count)
    }

    /// Creates a scroller at position `0.0` with the given configuration.
    #[must_use]
    pub fn with_config(config: ScrollConfig, viewport: V, item_count: usize) -> Self {
        Self {
            config: config.sanitized(),
            viewport,
            item_count,
            position: 0.0,
            prev_position: 0.0,
            velocity: 0.0,
            time: 0.0,
            drag: None,
            wheel_scrolling: false,
            auto_scroll: None,
            on_position_changed: None,
            on_item_selected: None,
        }
    }

    /// Registers the listener called with the new position on every position update.
    ///
    /// Replaces any previously registered position listener.
    pub fn on_position_changed(&mut self, listener: impl FnMut(f64) + 'static) {
        self.on_position_changed = Some(Box::new(listener));
    }

    /// Registers the listener called with the settled index when an
    /// auto-scroll completes or [`jump_to`](Self::jump_to) is called.
    ///
    /// Replaces any previously registered selection listener.
    pub fn on_item_selected(&mut self, listener: impl FnMut(usize) + 'static) {
        self.on_item_selected = Some(Box::new(listener));
    }

    /// Removes both listeners.
    pub fn clear_listeners(&mut self) {
        self.on_position_changed = None;
        self.on_item_selected = None;
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect from the next event or frame.
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config.sanitized();
    }

    /// Returns the viewport.
    #[must_use]
    pub const fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Replaces the viewport, for example after a layout pass.
    pub fn set_viewport(&mut self, viewport: V) {
        self.viewport = viewport;
    }

    /// Returns the number of items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sets the number of items. Bounds follow from the next frame.
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count != self.item_count {
            trace!(from = self.item_count, to = item_count, "item count changed");
            self.item_count = item_count;
        }
    }

    /// Returns the current scroll position in item units.
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Returns the current velocity in items per second.
    #[must_use]
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns `true` while an auto-scroll is in progress.
    #[must_use]
    pub const fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_some()
    }

    /// Returns the position the active auto-scroll ends on, if any.
    #[must_use]
    pub fn auto_scroll_target(&self) -> Option<f64> {
        self.auto_scroll.map(|scroll| scroll.to)
    }

    /// Starts a drag at `point` (host coordinates).
    ///
    /// Ignored unless `buttons` includes [`PointerButtons::PRIMARY`] and the
    /// scroller is draggable. Cancels any active auto-scroll.
    pub fn begin_drag(&mut self, point: Point, buttons: PointerButtons) {
        if !self.config.draggable {
            return;
        }
        if !buttons.drives_scroll() {
            trace!(?buttons, "ignoring drag start without primary button");
            return;
        }
        let Some(anchor) = self.viewport.to_local(point) else {
            trace!(?point, "ignoring drag start outside the viewport");
            return;
        };
        if let Some(scroll) = self.auto_scroll.take() {
            debug!(to = scroll.to, "drag cancelled auto-scroll");
        }
        self.drag = Some(DragSession {
            anchor,
            start_position: self.position,
        });
    }

    /// Moves an active drag to `point` (host coordinates).
    ///
    /// The displacement along the scroll axis is converted into item units and
    /// applied to the position the drag started from. Past the ends, elastic
    /// scrollers resist and clamped scrollers stop.
    pub fn drag(&mut self, point: Point, buttons: PointerButtons) {
        if !buttons.drives_scroll() {
            return;
        }
        let Some(session) = self.drag else {
            return;
        };
        let Some(local) = self.viewport.to_local(point) else {
            trace!(?point, "skipping drag move without a local projection");
            return;
        };

        let axis = self.config.axis;
        let extent = self.viewport.extent(axis).max(DIVISOR_EPSILON);
        // Host coordinates grow toward the end of the strip, so pulling content
        // back toward the start reveals later items.
        let delta = axis.component(local - session.anchor);
        let mut position = session.start_position - delta / extent * self.config.sensitivity;

        let offset = boundary_offset(position, self.item_count, self.config.movement);
        if offset != 0.0 {
            position = position.clamp(0.0, last_position(self.item_count));
            if self.config.movement == MovementType::Elastic {
                position -= rubber_band_delta(offset, self.config.sensitivity);
            }
        }
        self.update_position(position);
    }

    /// Ends an active drag. The velocity gathered while dragging is kept.
    pub fn end_drag(&mut self, buttons: PointerButtons) {
        if buttons.drives_scroll() {
            self.drag = None;
        }
    }

    /// Applies a wheel or touchpad scroll `delta` (host units).
    ///
    /// Positive values along the scroll axis move toward later items. When the
    /// cross-axis component is larger it is used instead, so a horizontal
    /// wheel also scrolls a vertical strip.
    pub fn scroll_wheel(&mut self, delta: Vec2) {
        if !self.config.draggable {
            return;
        }
        let axis = self.config.axis;
        let along = axis.component(delta);
        let across = axis.cross_component(delta);
        let amount = if across.abs() > along.abs() {
            across
        } else {
            along
        };
        if !amount.is_finite() {
            return;
        }

        let extent = self.viewport.extent(axis).max(DIVISOR_EPSILON);
        let mut position = self.position + amount / extent * self.config.sensitivity;
        if self.config.movement == MovementType::Clamped {
            position = position.clamp(0.0, last_position(self.item_count));
        }
        self.auto_scroll = None;
        self.wheel_scrolling = true;
        self.update_position(position);
    }

    /// Animates to item `index` over `duration` seconds with
    /// [`Ease::InOutCubic`].
    ///
    /// Unrestricted scrollers take the shorter way around the strip; bounded
    /// scrollers go to the index itself, limited to the last item.
    pub fn scroll_to(&mut self, index: usize, duration: f64) {
        self.scroll_to_with_ease(index, duration, Ease::InOutCubic);
    }

    /// Like [`scroll_to`](Self::scroll_to) with an explicit easing curve.
    pub fn scroll_to_with_ease(&mut self, index: usize, duration: f64, ease: Ease) {
        let target = if self.config.movement == MovementType::Unrestricted {
            nearest_target_position(self.position, index, self.item_count)
        } else {
            (index as f64).min(last_position(self.item_count))
        };
        self.start_auto_scroll(target, duration, ease);
    }

    /// Moves to item `index` immediately, stopping all motion, and reports it
    /// as selected.
    pub fn jump_to(&mut self, index: usize) {
        let index = index.min(self.item_count.saturating_sub(1));
        self.drag = None;
        self.auto_scroll = None;
        self.velocity = 0.0;
        self.update_position(index as f64);
        self.prev_position = self.position;
        self.emit_item_selected(index);
    }

    /// Advances the state machine by `dt` seconds.
    ///
    /// Call once per rendered frame. Negative or non-finite `dt` counts as zero.
    pub fn advance(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.time += dt;

        let movement = self.config.movement;
        let offset = boundary_offset(self.position, self.item_count, movement);
        let held = self.drag.is_some() || self.wheel_scrolling;
        let auto_scrolling = self.auto_scroll.is_some();

        if let Some(scroll) = self.auto_scroll {
            let alpha = scroll.alpha(self.time);
            self.update_position(scroll.sample(alpha));
            if AutoScroll::is_complete(alpha) {
                self.auto_scroll = None;
                let index = nearest_index(scroll.to, self.item_count);
                debug!(index, to = scroll.to, "auto-scroll settled");
                self.emit_item_selected(index);
            }
        } else if !held && (!approx_zero(offset) || !approx_zero(self.velocity)) {
            self.settle(offset, dt);
        }

        if !auto_scrolling && held {
            let instantaneous = (self.position - self.prev_position) / dt.max(DIVISOR_EPSILON);
            let t = (dt * VELOCITY_SMOOTHING).clamp(0.0, 1.0);
            self.velocity += (instantaneous - self.velocity) * t;
        }

        self.wheel_scrolling = false;
        if self.position != self.prev_position {
            self.prev_position = self.position;
        }
    }

    /// One frame of a released scroller: elastic return, inertia, or snap.
    fn settle(&mut self, offset: f64, dt: f64) {
        let config = self.config;

        if config.movement == MovementType::Clamped && !approx_zero(offset) {
            // Only reachable when bounds moved under the scroller, for
            // example after the item count shrank.
            self.velocity = 0.0;
            self.update_position(self.position.clamp(0.0, last_position(self.item_count)));
            return;
        }

        if config.movement == MovementType::Elastic && !approx_zero(offset) {
            let target = self
                .position
                .clamp(0.0, last_position(self.item_count))
                .round();
            self.start_auto_scroll(target, ELASTIC_RETURN_DURATION, Ease::InOutCubic);
            return;
        }

        let mut position = self.position;
        if config.inertia {
            self.velocity *= config.deceleration_rate.powf(dt);
            if self.velocity.abs() < VELOCITY_FLOOR {
                self.velocity = 0.0;
            }
            position += self.velocity * dt;

            if config.snap.enabled && self.velocity.abs() < config.snap.velocity_threshold {
                let target = self.resolve_target(self.position.round());
                self.start_auto_scroll(target, config.snap.duration, config.snap.ease);
                return;
            }
        } else {
            self.velocity = 0.0;
        }

        if self.velocity != 0.0 {
            if config.movement == MovementType::Clamped {
                let last = last_position(self.item_count);
                position = position.clamp(0.0, last);
                if approx_zero(position) || approx_zero(position - last) {
                    self.velocity = 0.0;
                }
            }
            self.update_position(position);
        }
    }

    /// Maps a desired end position onto the strip for the current policy.
    fn resolve_target(&self, target: f64) -> f64 {
        match self.config.movement {
            MovementType::Unrestricted => {
                shortest_path_target(self.position, target, self.item_count)
            }
            MovementType::Elastic | MovementType::Clamped => {
                target.clamp(0.0, last_position(self.item_count))
            }
        }
    }

    fn start_auto_scroll(&mut self, target: f64, duration: f64, ease: Ease) {
        trace!(from = self.position, to = target, duration, "starting auto-scroll");
        self.velocity = 0.0;
        self.drag = None;
        self.wheel_scrolling = false;
        self.auto_scroll = Some(AutoScroll::new(
            self.position,
            target,
            self.time,
            duration,
            ease,
        ));
    }

    fn update_position(&mut self, position: f64) {
        self.position = position;
        if let Some(listener) = self.on_position_changed.as_mut() {
            listener(position);
        }
    }

    fn emit_item_selected(&mut self, index: usize) {
        if let Some(listener) = self.on_item_selected.as_mut() {
            listener(index);
        }
    }
}
