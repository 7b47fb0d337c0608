// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! Seed-keyed LSB-matching engine.
//!
//! The pipeline, on hide: each payload byte becomes a nine-bit group
//! ([`codec`]), the keyed address stream ([`address`]) yields three fresh
//! pixels per group, and the channel mutator ([`matcher`]) enforces one bit
//! per channel with the ±1 matching rule. Extraction replays the identical
//! address sequence (same seed chain, same image geometry) and reassembles
//! bytes until it decodes the sentinel group.
//!
//! Which pixels a level may touch is determined by the seed chain
//! ([`seed`]) and the MT19937 generator ([`prng`]); both are part of the
//! wire format. The ±1 *direction* on a mismatched channel is the one thing
//! that is deliberately not reproducible — the resulting LSB is identical
//! either way.

pub mod address;
pub mod codec;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod prng;
pub mod progress;
pub mod seed;

pub use engine::{EngineOptions, StegoEngine};
pub use error::StegoError;
