// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generated image payloads.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

/// A `width` x `height` PNG with an alpha channel, encoded in memory.
pub fn sample_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([255, 140, 0, 200]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("in-memory PNG encoding cannot fail");
    bytes.into_inner()
}
