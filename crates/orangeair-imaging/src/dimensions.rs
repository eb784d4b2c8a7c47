// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure dimension math for bounded, aspect-preserving shrinking.

/// Largest size with the same aspect ratio that fits in `max_width x max_height`.
///
/// Images already inside the box are returned unchanged (never upscaled).
/// Neither output dimension is ever zero.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let scaled = |value: u32, max: u32| -> u32 {
        let v = (f64::from(value) * scale).round() as u32;
        v.clamp(1, max)
    };
    (scaled(width, max_width), scaled(height, max_height))
}
