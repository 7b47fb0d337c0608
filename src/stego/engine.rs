// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! Hide/extract driver over a borrowed pixel grid.
//!
//! An engine is bound to one image and one seed chain and walks the chain
//! one level at a time. Hiding and extracting at level k open a fresh
//! address stream keyed by Kk that skips every pixel consumed by levels
//! 1…k−1; [`StegoEngine::advance`] commits the current level's consumed set
//! into the cumulative skip set and moves to the next seed.
//!
//! Levels must be replayed in order: the reserved set of level k is only
//! known after a level-k operation has run, so reaching level k on a
//! freshly-opened image means extracting (and discarding) levels 1…k−1
//! first.
//!
//! Failed operations do not roll back pixels already written; callers who
//! need atomicity snapshot the image first.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::raster::PixelGrid;
use crate::stego::address::AddressStream;
use crate::stego::codec::{self, Decoded, GROUP_BITS, PIXELS_PER_BYTE};
use crate::stego::error::StegoError;
use crate::stego::matcher;
use crate::stego::progress;
use crate::stego::seed::{initialisator, SeedChain, KEY_LEN};

/// Construction switches for [`StegoEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Write marker colours instead of payload bits; see
    /// [`matcher::MARKER_PALETTE`]. Extraction is unavailable in this mode.
    pub testmode: bool,
}

/// Seed-keyed LSB-matching engine over a mutably borrowed image.
///
/// Not safe for concurrent use; distinct engines over distinct images may
/// run in parallel.
pub struct StegoEngine<'a, G: PixelGrid> {
    image: &'a mut G,
    chain: SeedChain,
    init: [u8; KEY_LEN],
    level: usize,
    /// Union of the reserved sets of all committed levels.
    skip: HashSet<(u32, u32)>,
    /// Reserved set of the last completed operation at the current level.
    consumed: HashSet<(u32, u32)>,
    testmode: bool,
    dir_rng: ChaCha20Rng,
}

impl<'a, G: PixelGrid> StegoEngine<'a, G> {
    /// Engine with default options, starting at chain level 1.
    pub fn new(image: &'a mut G, chain: SeedChain) -> Self {
        Self::with_options(image, chain, EngineOptions::default())
    }

    /// Engine with explicit options.
    pub fn with_options(image: &'a mut G, chain: SeedChain, options: EngineOptions) -> Self {
        let init = initialisator(image.width(), image.height());
        Self {
            image,
            chain,
            init,
            level: 1,
            skip: HashSet::new(),
            consumed: HashSet::new(),
            testmode: options.testmode,
            dir_rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Current 1-based chain level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Upper bound on the payload size (bytes) a hide at the current level
    /// can carry: free pixels divided by three, minus the sentinel byte.
    pub fn capacity(&self) -> usize {
        let total = self.image.width() as usize * self.image.height() as usize;
        ((total - self.skip.len()) / PIXELS_PER_BYTE).saturating_sub(1)
    }

    /// Hide `payload` under the current level's seed, followed by the
    /// sentinel byte.
    ///
    /// In test mode the payload bytes still drive the traversal length, but
    /// every visited pixel is overwritten with the level's marker colour.
    ///
    /// # Errors
    /// [`StegoError::CapacityExceeded`] when the free pixels run out before
    /// the payload and sentinel are fully written. Pixels already written
    /// stay modified.
    pub fn hide(&mut self, payload: &[u8]) -> Result<(), StegoError> {
        let key = self.chain.derive_key(self.level, &self.init);
        let mut stream =
            AddressStream::new(&key, self.image.width(), self.image.height(), &self.skip);

        progress::init(u32::try_from(payload.len() + 1).unwrap_or(u32::MAX));
        for index in 0..=payload.len() {
            let sentinel = index == payload.len();
            let byte = if sentinel { 0 } else { payload[index] };
            let bits = codec::encode_byte(byte, sentinel);

            for chunk in bits.chunks_exact(3) {
                let (x, y) = stream.next_free().ok_or(StegoError::CapacityExceeded)?;
                let px = if self.testmode {
                    matcher::marker_colour(self.level)
                } else {
                    let mut px = self.image.get_pixel(x, y);
                    for (channel, &bit) in px.iter_mut().zip(chunk) {
                        *channel = matcher::write_lsb(*channel, bit, &mut self.dir_rng);
                    }
                    px
                };
                self.image.put_pixel(x, y, px);
            }
            progress::advance();
        }
        progress::finish();

        self.consumed = stream.into_visited();
        Ok(())
    }

    /// Extract the payload hidden under the current level's seed.
    ///
    /// Reads three pixels per byte until a sentinel group decodes.
    ///
    /// # Errors
    /// - [`StegoError::TestModeEnabled`] when the engine is in test mode.
    /// - [`StegoError::Truncated`] when the free pixels run out before a
    ///   sentinel is seen — a wrong seed, wrong geometry, or a carrier that
    ///   went through lossy recompression.
    pub fn extract(&mut self) -> Result<Vec<u8>, StegoError> {
        if self.testmode {
            return Err(StegoError::TestModeEnabled);
        }
        let key = self.chain.derive_key(self.level, &self.init);
        let mut stream =
            AddressStream::new(&key, self.image.width(), self.image.height(), &self.skip);

        progress::init(0);
        let mut payload = Vec::new();
        loop {
            let mut bits = [0u8; GROUP_BITS];
            for group in 0..PIXELS_PER_BYTE {
                let (x, y) = stream.next_free().ok_or(StegoError::Truncated)?;
                let px = self.image.get_pixel(x, y);
                for (c, &channel) in px.iter().enumerate() {
                    bits[group * 3 + c] = matcher::read_lsb(channel);
                }
            }
            match codec::decode_group(&bits) {
                Decoded::Sentinel => break,
                Decoded::Data(byte) => {
                    payload.push(byte);
                    progress::advance();
                }
            }
        }
        progress::finish();

        self.consumed = stream.into_visited();
        Ok(payload)
    }

    /// Commit the current level's consumed pixels into the skip set and move
    /// to the next seed in the chain.
    ///
    /// # Errors
    /// [`StegoError::NoMoreSeeds`] when already at the last level; the
    /// engine state is left unchanged in that case.
    pub fn advance(&mut self) -> Result<(), StegoError> {
        if self.level >= self.chain.levels() {
            return Err(StegoError::NoMoreSeeds);
        }
        self.skip.extend(self.consumed.drain());
        self.level += 1;
        Ok(())
    }
}
