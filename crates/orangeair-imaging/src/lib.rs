// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Photo compression for Orange Air notification emails.
//!
//! Customers attach phone photos of their units. Before they are mailed to
//! the business each one is decoded, flattened to RGB, shrunk to fit the
//! configured bounds, and re-encoded as JPEG. Decoding and encoding run on
//! the blocking thread pool.

pub mod dimensions;

use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use orangeair_config::model::UploadConfig;
use orangeair_core::{Attachment, OrangeairError, PhotoUpload};
use tracing::{debug, info};

pub use dimensions::fit_within;

/// Compression settings. Cheap to clone into a blocking task.
#[derive(Debug, Clone)]
pub struct ImageCompressor {
    max_photos: usize,
    max_width: u32,
    max_height: u32,
    quality: u8,
}

impl ImageCompressor {
    pub fn new(max_photos: usize, max_width: u32, max_height: u32, quality: u8) -> Self {
        Self {
            max_photos,
            max_width,
            max_height,
            quality,
        }
    }

    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(
            config.max_photos,
            config.max_width,
            config.max_height,
            config.jpeg_quality,
        )
    }

    pub fn max_photos(&self) -> usize {
        self.max_photos
    }

    /// Compresses the first `max_photos` uploads, in order.
    ///
    /// Uploads beyond the limit are dropped. Any undecodable upload fails the
    /// whole batch so a request is never sent with photos silently missing.
    pub async fn compress_all(
        &self,
        uploads: Vec<PhotoUpload>,
    ) -> Result<Vec<Attachment>, OrangeairError> {
        if uploads.is_empty() {
            return Ok(Vec::new());
        }

        let received = uploads.len();
        let compressor = self.clone();
        let attachments = tokio::task::spawn_blocking(move || {
            uploads
                .iter()
                .take(compressor.max_photos)
                .map(|upload| compressor.compress_one(upload))
                .collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(|e| OrangeairError::Internal(format!("image compression task panicked: {e}")))??;

        info!(
            received,
            attached = attachments.len(),
            "photos compressed"
        );
        Ok(attachments)
    }

    /// Decodes, shrinks, and re-encodes one upload. Blocking.
    pub fn compress_one(&self, upload: &PhotoUpload) -> Result<Attachment, OrangeairError> {
        let image_error = |message: String| OrangeairError::Image {
            filename: upload.filename.clone(),
            message,
        };

        let decoded = image::load_from_memory(&upload.data)
            .map_err(|e| image_error(format!("cannot decode: {e}")))?;
        let (width, height) = (decoded.width(), decoded.height());
        let (target_w, target_h) = fit_within(width, height, self.max_width, self.max_height);

        let rgb = if (target_w, target_h) == (width, height) {
            decoded.to_rgb8()
        } else {
            decoded
                .resize_exact(target_w, target_h, FilterType::Lanczos3)
                .to_rgb8()
        };

        let mut content = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut content, self.quality);
        rgb.write_with_encoder(encoder)
            .map_err(|e| image_error(format!("cannot encode JPEG: {e}")))?;

        debug!(
            filename = %upload.filename,
            from = %format!("{width}x{height}"),
            to = %format!("{target_w}x{target_h}"),
            bytes = content.len(),
            "photo compressed"
        );

        Ok(Attachment {
            filename: jpeg_filename(&upload.filename),
            content,
        })
    }
}

/// The upload's file stem with a `.jpg` extension.
pub fn jpeg_filename(original: &str) -> String {
    let stem = Path::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("photo");
    format!("{stem}.jpg")
}

/// Case-insensitive extension check against the allowed list.
pub fn has_allowed_extension(filename: &str, allowed: &[String]) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}
