// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! LSB-matching channel writes.
//!
//! Matching beats flat replacement for stealth: a channel whose least
//! significant bit already equals the target is left untouched, and a
//! mismatched channel moves by ±1 in a random direction, so first-order
//! histogram statistics stay close to the cover's. At the range boundaries
//! only one direction exists (0 → 1, 255 → 254).
//!
//! The ±1 direction is not part of the wire format — both directions yield
//! the same LSB — so any randomness source will do and extraction never
//! depends on it.

use rand::Rng;

use crate::raster::Rgb;

/// Marker colours for test mode, one per chain level, cycling.
pub const MARKER_PALETTE: [Rgb; 6] = [
    [255, 0, 0],   // level 1: red
    [0, 255, 0],   // level 2: green
    [0, 0, 255],   // level 3: blue
    [255, 255, 0], // level 4: yellow
    [255, 0, 255], // level 5: magenta
    [0, 255, 255], // level 6: cyan
];

/// Marker colour for a 1-based chain level.
pub fn marker_colour(level: usize) -> Rgb {
    MARKER_PALETTE[(level - 1) % MARKER_PALETTE.len()]
}

/// Force the LSB of `value` to `bit` with the matching rule.
///
/// Post-condition: `write_lsb(v, b, rng) & 1 == b`, and the result differs
/// from `v` by at most 1.
pub fn write_lsb<R: Rng>(value: u8, bit: u8, rng: &mut R) -> u8 {
    debug_assert!(bit <= 1);
    if value & 1 == bit {
        return value;
    }
    match value {
        0 => 1,
        255 => 254,
        v => {
            if rng.gen::<bool>() {
                v + 1
            } else {
                v - 1
            }
        }
    }
}

/// Read the LSB of a channel during extraction.
pub fn read_lsb(value: u8) -> u8 {
    value & 1
}
