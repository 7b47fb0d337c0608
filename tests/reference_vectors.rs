// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! Wire-format pins.
//!
//! These vectors were computed against the reference primitives (CPython's
//! `hashlib` and `random`) and are published in the README. If any of them
//! breaks, the change is a wire-format break: images written by other
//! conforming implementations will stop extracting.

use std::collections::HashSet;

use seedlsb::stego::address::AddressStream;
use seedlsb::stego::prng::Mt19937;
use seedlsb::stego::seed::{initialisator, SeedChain};
use seedlsb::{PixelGrid, RasterImage, StegoEngine, BASIS};

fn unhex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap();
    }
    out
}

#[test]
fn basis_is_pinned() {
    assert_eq!(
        BASIS,
        unhex32("baa9d13516a396154ccd175bb2ec445417ae0b497ba72f22bce45e3b0f912cc2"),
    );
}

#[test]
fn derived_keys_are_pinned() {
    let chain = SeedChain::new(vec![
        b"seed_0".to_vec(),
        b"seed_1".to_vec(),
        b"seed_2".to_vec(),
    ])
    .unwrap();
    let init = initialisator(100, 100);

    assert_eq!(
        *chain.derive_key(1, &init),
        unhex32("e4c71fdeed2c68736c0fd4e4e5ddfb5c0cb148d92e607bd763921d6ccd733659"),
    );
    assert_eq!(
        *chain.derive_key(2, &init),
        unhex32("d6a2bc96dc3d5c5fdf82be9573c38c0ecccac710118cca143f55c2f35fbfa414"),
    );
    assert_eq!(
        *chain.derive_key(3, &init),
        unhex32("72985974e10c49fabc0fc3af11684be573665144a881aa200039e6474fc397fc"),
    );
}

#[test]
fn generator_words_are_pinned() {
    let k1 = unhex32("e4c71fdeed2c68736c0fd4e4e5ddfb5c0cb148d92e607bd763921d6ccd733659");
    let mut rng = Mt19937::from_key(&k1);
    assert_eq!(rng.next_u32(), 1770560403);
    assert_eq!(rng.next_u32(), 690653943);
    assert_eq!(rng.next_u32(), 942465579);
}

#[test]
fn address_sequence_is_pinned() {
    let k1 = unhex32("e4c71fdeed2c68736c0fd4e4e5ddfb5c0cb148d92e607bd763921d6ccd733659");
    let skip = HashSet::new();
    let mut stream = AddressStream::new(&k1, 100, 100, &skip);
    let coords: Vec<_> = (0..8).map(|_| stream.next_free().unwrap()).collect();
    assert_eq!(
        coords,
        [
            (52, 20), (28, 45), (69, 3), (55, 42),
            (42, 18), (9, 98), (49, 50), (52, 46),
        ],
    );
}

#[test]
fn white_cover_stego_state_is_pinned() {
    // On an all-white cover the ±1 rule collapses to 255 → 254 for zero
    // bits, so the entire stego image is deterministic: 30 pixels consumed,
    // 59 channels at 254 (one per zero bit of the payload and sentinel).
    let mut img = RasterImage::filled(100, 100, [255, 255, 255]);
    let mut engine = StegoEngine::new(&mut img, SeedChain::single(b"seed_0"));
    engine.hide(b"Secret!!!").unwrap();
    drop(engine);

    let mut touched = 0;
    let mut dimmed_channels = 0;
    for y in 0..100 {
        for x in 0..100 {
            let px = img.get_pixel(x, y);
            if px != [255, 255, 255] {
                touched += 1;
            }
            dimmed_channels += px.iter().filter(|&&c| c == 254).count();
        }
    }
    assert_eq!(touched, 30);
    assert_eq!(dimmed_channels, 59);
}

#[test]
fn wrong_seed_extraction_on_white_cover_is_pinned() {
    // The first group drawn under seed "B" lands on pixels whose LSBs are
    // still 1 (white), so the sentinel flag reads set and extraction stops
    // with an empty payload. Deterministic, hence pinnable.
    let mut img = RasterImage::filled(100, 100, [255, 255, 255]);
    let mut engine = StegoEngine::new(&mut img, SeedChain::single(b"A"));
    engine.hide(b"Secret!!!").unwrap();
    drop(engine);

    let mut engine = StegoEngine::new(&mut img, SeedChain::single(b"B"));
    assert_eq!(engine.extract().unwrap(), b"");
}
