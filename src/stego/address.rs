// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! Keyed pixel-address stream.
//!
//! Draws pixel coordinates from the keyed MT19937 generator and rejects any
//! coordinate that was already emitted or that belongs to an earlier chain
//! level's reserved set. Rejection keeps drawing from the same generator
//! state — the PRNG is never restarted — so encoder and decoder walk the
//! identical sequence given the same key, geometry and skip set.
//!
//! The draw order (x first, then y) is part of the wire format; swapping the
//! two produces an incompatible stream.

use std::collections::HashSet;

use crate::stego::prng::Mt19937;

/// Stream of distinct free pixel coordinates for one chain level.
pub struct AddressStream<'a> {
    rng: Mt19937,
    width: u32,
    height: u32,
    skip: &'a HashSet<(u32, u32)>,
    visited: HashSet<(u32, u32)>,
    free: usize,
}

impl<'a> AddressStream<'a> {
    /// Open a stream over a `width` × `height` grid, skipping `skip` (the
    /// union of the reserved sets of all earlier levels). Every entry of
    /// `skip` must lie inside the grid.
    pub fn new(key: &[u8; 32], width: u32, height: u32, skip: &'a HashSet<(u32, u32)>) -> Self {
        let free = (width as usize * height as usize) - skip.len();
        Self {
            rng: Mt19937::from_key(key),
            width,
            height,
            skip,
            visited: HashSet::new(),
            free,
        }
    }

    /// Next free coordinate, or `None` once the pool is exhausted.
    ///
    /// The exhaustion check runs before any draw, so the rejection loop can
    /// never spin on a full grid.
    pub fn next_free(&mut self) -> Option<(u32, u32)> {
        if self.free == 0 {
            return None;
        }
        loop {
            let x = self.rng.uniform_int(0, self.width - 1);
            let y = self.rng.uniform_int(0, self.height - 1);
            if self.skip.contains(&(x, y)) || self.visited.contains(&(x, y)) {
                continue;
            }
            self.visited.insert((x, y));
            self.free -= 1;
            return Some((x, y));
        }
    }

    /// Coordinates emitted so far; becomes the level's reserved set.
    pub fn into_visited(self) -> HashSet<(u32, u32)> {
        self.visited
    }
}
