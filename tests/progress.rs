// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! Progress counters across a hide operation.
//!
//! Progress state is process-global, so everything lives in a single test
//! function — parallel test threads would race the atomics otherwise.

use seedlsb::stego::progress;
use seedlsb::{RasterImage, SeedChain, StegoEngine};

#[test]
fn hide_reports_one_step_per_byte() {
    let mut img = RasterImage::filled(20, 20, [44, 55, 66]);
    let mut engine = StegoEngine::new(&mut img, SeedChain::single(b"p"));
    engine.hide(b"12345").unwrap();
    drop(engine);

    // 5 payload bytes + sentinel, completed.
    assert_eq!(progress::get(), (6, 6));

    // Manual drive: advance caps below total until finish.
    progress::init(3);
    progress::advance();
    progress::advance();
    progress::advance();
    progress::advance();
    assert_eq!(progress::get(), (2, 3));
    progress::finish();
    assert_eq!(progress::get(), (3, 3));

    // Indeterminate mode advances freely.
    progress::init(0);
    progress::advance();
    progress::advance();
    assert_eq!(progress::get(), (2, 0));
}
