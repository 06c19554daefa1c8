// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory Item Scroll demos.

use std::env;

use tracing_subscriber::EnvFilter;

/// Frame interval the demos simulate, in seconds.
pub const FRAME: f64 = 1.0 / 60.0;

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `debug` for the scroller so settle events show up.
pub fn init_tracing() {
    let directives =
        env::var("RUST_LOG").unwrap_or_else(|_| "understory_item_scroll=debug,info".to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();
}
