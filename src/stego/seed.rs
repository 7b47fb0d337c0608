// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! Seed-chain key derivation.
//!
//! User seeds are opaque byte strings of any length; the PRNG wants 32-byte
//! keys. The derivation chain:
//!
//! ```text
//! G  = BE32(width) ‖ BE32(height)          geometry tag
//! I  = H32(BASIS ‖ G)                      initialisator
//! K1 = H32(I ‖ S1)
//! Ki = H32(S(i-1) ‖ Si)        for i ≥ 2
//! ```
//!
//! where `H32(x)` is the last 32 bytes of SHA-512(x). Geometry and the Basis
//! constant enter K1 only: the top-level key is image-specific, while every
//! deeper key is a function of adjacent user seeds alone.
//!
//! All of this is wire format — the Basis bytes, the geometry-tag encoding
//! and the hash are pinned by the vectors in README and must not change
//! between versions.

use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use crate::stego::error::StegoError;

/// Derived key length in bytes.
pub const KEY_LEN: usize = 32;

/// Fixed public constant mixed into the initialisator.
/// NOT secret — just a stable, versioned value that binds derivation to this
/// wire format. Equals the last 32 bytes of SHA-512(b"seedlsb/basis/v1").
pub const BASIS: [u8; KEY_LEN] = [
    0xba, 0xa9, 0xd1, 0x35, 0x16, 0xa3, 0x96, 0x15, 0x4c, 0xcd, 0x17, 0x5b,
    0xb2, 0xec, 0x44, 0x54, 0x17, 0xae, 0x0b, 0x49, 0x7b, 0xa7, 0x2f, 0x22,
    0xbc, 0xe4, 0x5e, 0x3b, 0x0f, 0x91, 0x2c, 0xc2,
];

/// Last 32 bytes of SHA-512 over the concatenation of `parts`.
fn h32(parts: &[&[u8]]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    out.copy_from_slice(&digest[32..]);
    out
}

/// Canonical geometry tag: big-endian u32 width followed by big-endian u32
/// height.
pub fn geometry_tag(width: u32, height: u32) -> [u8; 8] {
    let mut tag = [0u8; 8];
    tag[..4].copy_from_slice(&width.to_be_bytes());
    tag[4..].copy_from_slice(&height.to_be_bytes());
    tag
}

/// Initialisator `I = H32(BASIS ‖ G)`. Reproducible from the image
/// dimensions alone.
pub fn initialisator(width: u32, height: u32) -> [u8; KEY_LEN] {
    *h32(&[&BASIS, &geometry_tag(width, height)])
}

/// Non-empty ordered chain of user seeds.
///
/// Seed bytes are held in [`Zeroizing`] buffers so they are wiped when the
/// chain is dropped.
pub struct SeedChain {
    seeds: Vec<Zeroizing<Vec<u8>>>,
    raw: bool,
}

impl SeedChain {
    /// Build a chain from one or more seeds. Fails with
    /// [`StegoError::EmptySeedChain`] when `seeds` is empty.
    pub fn new(seeds: Vec<Vec<u8>>) -> Result<Self, StegoError> {
        Self::with_raw(seeds, false)
    }

    /// Build a chain that skips derivation entirely: each `Ki` is `Si`
    /// truncated or zero-padded to 32 bytes, across the whole chain.
    /// Strongly discouraged outside of interop debugging.
    pub fn new_raw(seeds: Vec<Vec<u8>>) -> Result<Self, StegoError> {
        Self::with_raw(seeds, true)
    }

    fn with_raw(seeds: Vec<Vec<u8>>, raw: bool) -> Result<Self, StegoError> {
        if seeds.is_empty() {
            return Err(StegoError::EmptySeedChain);
        }
        Ok(Self {
            seeds: seeds.into_iter().map(Zeroizing::new).collect(),
            raw,
        })
    }

    /// Convenience for the common one-seed case.
    pub fn single(seed: &[u8]) -> Self {
        Self {
            seeds: vec![Zeroizing::new(seed.to_vec())],
            raw: false,
        }
    }

    /// Number of levels in the chain.
    pub fn levels(&self) -> usize {
        self.seeds.len()
    }

    /// Derive the PRNG key for a 1-based `level`.
    ///
    /// `init` is the image's initialisator; it only participates at level 1.
    ///
    /// # Panics
    /// Panics if `level` is 0 or beyond the chain length; the engine checks
    /// its level before calling.
    pub fn derive_key(&self, level: usize, init: &[u8; KEY_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
        assert!(level >= 1 && level <= self.seeds.len(), "level {level} out of range");
        let seed = &self.seeds[level - 1];

        if self.raw {
            let mut key = Zeroizing::new([0u8; KEY_LEN]);
            let n = seed.len().min(KEY_LEN);
            key[..n].copy_from_slice(&seed[..n]);
            return key;
        }

        if level == 1 {
            h32(&[&init[..], &seed[..]])
        } else {
            h32(&[&self.seeds[level - 2][..], &seed[..]])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unhex(s: &str) -> [u8; KEY_LEN] {
        let mut out = [0u8; KEY_LEN];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap();
        }
        out
    }

    // Reference vectors computed with CPython hashlib against the published
    // Basis and the BE32 geometry tag; see README.
    #[test]
    fn initialisator_vector() {
        assert_eq!(
            initialisator(100, 100),
            unhex("631d7837cde8b1b2fcd60b5e63f71191fb28530a0286e79df0761b4a916ef9d2"),
        );
    }

    #[test]
    fn chain_key_vectors() {
        let chain = SeedChain::new(vec![
            b"seed_0".to_vec(),
            b"seed_1".to_vec(),
            b"seed_2".to_vec(),
        ])
        .unwrap();
        let init = initialisator(100, 100);

        assert_eq!(
            *chain.derive_key(1, &init),
            unhex("e4c71fdeed2c68736c0fd4e4e5ddfb5c0cb148d92e607bd763921d6ccd733659"),
        );
        assert_eq!(
            *chain.derive_key(2, &init),
            unhex("d6a2bc96dc3d5c5fdf82be9573c38c0ecccac710118cca143f55c2f35fbfa414"),
        );
        assert_eq!(
            *chain.derive_key(3, &init),
            unhex("72985974e10c49fabc0fc3af11684be573665144a881aa200039e6474fc397fc"),
        );
    }

    #[test]
    fn geometry_enters_level_one_only() {
        let chain = SeedChain::new(vec![b"a".to_vec(), b"b".to_vec()]).unwrap();
        let small = initialisator(10, 10);
        let large = initialisator(4000, 3000);

        assert_ne!(*chain.derive_key(1, &small), *chain.derive_key(1, &large));
        assert_eq!(*chain.derive_key(2, &small), *chain.derive_key(2, &large));
    }

    #[test]
    fn earlier_seed_changes_later_key() {
        let init = initialisator(64, 64);
        let chain_a = SeedChain::new(vec![b"first".to_vec(), b"second".to_vec()]).unwrap();
        let chain_b = SeedChain::new(vec![b"FIRST".to_vec(), b"second".to_vec()]).unwrap();
        assert_ne!(*chain_a.derive_key(2, &init), *chain_b.derive_key(2, &init));
    }

    #[test]
    fn raw_mode_truncates_and_pads() {
        let init = initialisator(10, 10);

        let short = SeedChain::new_raw(vec![vec![0xAB, 0xCD]]).unwrap();
        let mut expected = [0u8; KEY_LEN];
        expected[0] = 0xAB;
        expected[1] = 0xCD;
        assert_eq!(*short.derive_key(1, &init), expected);

        let long = SeedChain::new_raw(vec![vec![0x11; 40]]).unwrap();
        assert_eq!(*long.derive_key(1, &init), [0x11; KEY_LEN]);
    }

    #[test]
    fn empty_chain_rejected() {
        assert!(matches!(SeedChain::new(vec![]), Err(StegoError::EmptySeedChain)));
        assert!(matches!(SeedChain::new_raw(vec![]), Err(StegoError::EmptySeedChain)));
    }
}
