// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! Carrier file loading and saving.
//!
//! The engine only ever sees a [`PixelGrid`]; this module adapts decoded
//! files to it. Accepted pixel formats are 8-bit RGB and RGBA — anything
//! else (grayscale, 16-bit) is rejected rather than silently converted,
//! because a conversion would change the very bytes a previous hide wrote.
//! An alpha channel is carried through untouched and never holds payload
//! bits.
//!
//! Saving is always PNG. Writing a carrier to a lossy format would destroy
//! the embedded LSBs, so no other encoder is offered; [`pngify`] converts
//! arbitrary (e.g. JPEG) input into a usable lossless cover first.

use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::raster::{PixelGrid, Rgb};
use crate::stego::error::StegoError;

impl PixelGrid for image::RgbImage {
    fn width(&self) -> u32 {
        image::ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        image::ImageBuffer::height(self)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        image::ImageBuffer::get_pixel(self, x, y).0
    }

    fn put_pixel(&mut self, x: u32, y: u32, px: Rgb) {
        image::ImageBuffer::put_pixel(self, x, y, image::Rgb(px));
    }
}

impl PixelGrid for image::RgbaImage {
    fn width(&self) -> u32 {
        image::ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        image::ImageBuffer::height(self)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        let [r, g, b, _] = image::ImageBuffer::get_pixel(self, x, y).0;
        [r, g, b]
    }

    fn put_pixel(&mut self, x: u32, y: u32, px: Rgb) {
        let alpha = image::ImageBuffer::get_pixel(self, x, y).0[3];
        image::ImageBuffer::put_pixel(self, x, y, image::Rgba([px[0], px[1], px[2], alpha]));
    }
}

/// A decoded carrier in one of the two supported pixel formats.
pub enum LosslessImage {
    /// 8-bit RGB.
    Rgb(image::RgbImage),
    /// 8-bit RGBA; alpha is preserved verbatim.
    Rgba(image::RgbaImage),
}

impl LosslessImage {
    /// Decode a carrier from disk.
    ///
    /// # Errors
    /// - [`StegoError::InvalidImage`] when the file cannot be decoded.
    /// - [`StegoError::UnsupportedPixelFormat`] for anything but 8-bit
    ///   RGB/RGBA.
    pub fn open(path: &Path) -> Result<Self, StegoError> {
        Self::from_dynamic(image::open(path)?)
    }

    /// Adapt an already-decoded image.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self, StegoError> {
        match img {
            DynamicImage::ImageRgb8(buf) => Ok(Self::Rgb(buf)),
            DynamicImage::ImageRgba8(buf) => Ok(Self::Rgba(buf)),
            _ => Err(StegoError::UnsupportedPixelFormat),
        }
    }

    /// Encode to PNG at `path`. PNG only — a lossy encoder would destroy the
    /// embedded bits.
    pub fn save_png(&self, path: &Path) -> Result<(), StegoError> {
        match self {
            Self::Rgb(buf) => buf.save_with_format(path, ImageFormat::Png)?,
            Self::Rgba(buf) => buf.save_with_format(path, ImageFormat::Png)?,
        }
        Ok(())
    }
}

impl PixelGrid for LosslessImage {
    fn width(&self) -> u32 {
        match self {
            Self::Rgb(buf) => PixelGrid::width(buf),
            Self::Rgba(buf) => PixelGrid::width(buf),
        }
    }

    fn height(&self) -> u32 {
        match self {
            Self::Rgb(buf) => PixelGrid::height(buf),
            Self::Rgba(buf) => PixelGrid::height(buf),
        }
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        match self {
            Self::Rgb(buf) => PixelGrid::get_pixel(buf, x, y),
            Self::Rgba(buf) => PixelGrid::get_pixel(buf, x, y),
        }
    }

    fn put_pixel(&mut self, x: u32, y: u32, px: Rgb) {
        match self {
            Self::Rgb(buf) => PixelGrid::put_pixel(buf, x, y, px),
            Self::Rgba(buf) => PixelGrid::put_pixel(buf, x, y, px),
        }
    }
}

/// Re-encode any decodable image as PNG, making it a usable lossless cover.
/// A well-compressed JPEG run through this is a fine starting carrier.
pub fn pngify(input: &Path, output: &Path) -> Result<(), StegoError> {
    image::open(input)?.save_with_format(output, ImageFormat::Png)?;
    Ok(())
}
