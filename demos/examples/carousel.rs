// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a looping horizontal carousel through a simulated host frame loop.
//!
//! Run with `RUST_LOG=understory_item_scroll=trace` to see every transition.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use tracing::info;
use understory_item_scroll::{
    ItemScroller, MovementType, PointerButtons, ScrollAxis, ScrollConfig,
};
use understory_item_scroll_demos::{FRAME, init_tracing};

const ITEM_COUNT: usize = 7;

fn main() {
    init_tracing();

    let config = ScrollConfig {
        axis: ScrollAxis::Horizontal,
        movement: MovementType::Unrestricted,
        ..ScrollConfig::default()
    };
    // 320px wide strip; one full-width swipe moves one item.
    let viewport = Rect::new(0.0, 0.0, 320.0, 120.0);
    let mut carousel = ItemScroller::with_config(config, viewport, ITEM_COUNT);

    let selected = Rc::new(Cell::new(None));
    let sink = Rc::clone(&selected);
    carousel.on_item_selected(move |index| sink.set(Some(index)));
    let frames = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&frames);
    carousel.on_position_changed(move |_| counter.set(counter.get() + 1));

    // Swipe right-to-left across two thirds of the strip in eight frames.
    carousel.begin_drag(Point::new(300.0, 60.0), PointerButtons::PRIMARY);
    for step in 1..=8 {
        let x = 300.0 - 27.0 * f64::from(step);
        carousel.drag(Point::new(x, 60.0), PointerButtons::PRIMARY);
        carousel.advance(FRAME);
    }
    carousel.end_drag(PointerButtons::PRIMARY);
    info!(
        position = carousel.position(),
        velocity = carousel.velocity(),
        "released"
    );

    settle(&mut carousel);
    info!(
        position = carousel.position(),
        selected = ?selected.get(),
        updates = frames.get(),
        "fling settled"
    );

    // Ask for the first item: the carousel goes the short way around.
    carousel.scroll_to(0, 0.4);
    info!(target_position = ?carousel.auto_scroll_target(), "scrolling to item 0");
    settle(&mut carousel);
    info!(
        position = carousel.position(),
        selected = ?selected.get(),
        "scroll settled"
    );
}

/// Advances frames until the carousel stops moving.
fn settle(carousel: &mut ItemScroller) {
    for _ in 0..600 {
        carousel.advance(FRAME);
        if !carousel.is_auto_scrolling() && carousel.velocity() == 0.0 {
            break;
        }
    }
}
