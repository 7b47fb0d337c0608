// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! # seedlsb
//!
//! Seed-keyed LSB-matching steganography for lossless raster images.
//!
//! Payload bytes are scattered across the cover image by a seeded PRNG, so a
//! viewer without the seed cannot locate them. Writes use LSB matching (a
//! channel whose least significant bit already carries the desired value is
//! left untouched; otherwise it is nudged by ±1), which disturbs the image
//! histogram far less than flat LSB replacement.
//!
//! Multiple independent payloads can be layered into one cover under a chain
//! of seeds. Each chain level draws only from pixels no earlier level
//! consumed, and revealing seed *k* discloses payloads 1…*k* and nothing
//! after.
//!
//! The pixel selection is a wire format: the Basis constant, the geometry
//! tag, the SHA-512 seed derivation, the MT19937 generator and its rejection
//! sampling, and the nine-bit byte layout are all fixed and pinned by test
//! vectors (see README).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use seedlsb::{RasterImage, SeedChain, StegoEngine};
//!
//! let mut image = RasterImage::filled(100, 100, [255, 255, 255]);
//! let mut engine = StegoEngine::new(&mut image, SeedChain::single(b"my seed"));
//! engine.hide(b"attack at dawn").unwrap();
//!
//! let mut engine = StegoEngine::new(&mut image, SeedChain::single(b"my seed"));
//! assert_eq!(engine.extract().unwrap(), b"attack at dawn");
//! ```

pub mod io;
pub mod raster;
pub mod stego;

pub use io::{pngify, LosslessImage};
pub use raster::{PixelGrid, RasterImage, Rgb};
pub use stego::engine::{EngineOptions, StegoEngine};
pub use stego::error::StegoError;
pub use stego::matcher::MARKER_PALETTE;
pub use stego::seed::{SeedChain, BASIS};
