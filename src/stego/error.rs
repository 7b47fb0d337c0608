// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! Error types for the steganography engine.
//!
//! [`StegoError`] covers all failure modes from image loading through hiding
//! and extraction. No error is retried internally, and a failed `hide` or
//! `extract` leaves already-written pixels in place — callers who need
//! atomicity snapshot the image first.

use core::fmt;

/// Errors that can occur while hiding or extracting a payload.
#[derive(Debug)]
pub enum StegoError {
    /// The engine was given an empty seed chain.
    EmptySeedChain,
    /// The address stream ran out of free pixels before the payload and its
    /// sentinel were fully written.
    CapacityExceeded,
    /// The address stream ran out of free pixels before a sentinel group was
    /// decoded (wrong seed, wrong image, or damaged carrier).
    Truncated,
    /// `advance` was called with no further seeds in the chain.
    NoMoreSeeds,
    /// The carrier's pixel format is not 8-bit RGB or RGBA.
    UnsupportedPixelFormat,
    /// `extract` was called on an engine in test mode; test-mode covers carry
    /// marker colours, not data.
    TestModeEnabled,
    /// The carrier file could not be decoded or encoded.
    InvalidImage(image::ImageError),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeedChain => write!(f, "seed chain is empty"),
            Self::CapacityExceeded => write!(f, "payload too large for the free pixels of this image"),
            Self::Truncated => write!(f, "no sentinel found before the image was exhausted (wrong seed?)"),
            Self::NoMoreSeeds => write!(f, "seed chain exhausted, cannot advance"),
            Self::UnsupportedPixelFormat => write!(f, "unsupported pixel format (need 8-bit RGB or RGBA)"),
            Self::TestModeEnabled => write!(f, "cannot extract in test mode"),
            Self::InvalidImage(e) => write!(f, "invalid image: {e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidImage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for StegoError {
    fn from(e: image::ImageError) -> Self {
        Self::InvalidImage(e)
    }
}
