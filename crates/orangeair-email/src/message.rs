// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MIME message assembly for outbound notifications.

use lettre::Message;
use lettre::message::header::ContentType;
use lettre::message::{Attachment as MimeAttachment, Mailbox, MultiPart, SinglePart};
use orangeair_core::{OrangeairError, OutboundEmail};

/// A notification never carries more than this many photos.
pub const MAX_ATTACHMENTS: usize = 5;

const JPEG: &str = "image/jpeg";

/// Builds a `multipart/mixed` message: one HTML part plus up to
/// [`MAX_ATTACHMENTS`] JPEG attachments. Extra attachments are dropped.
pub fn build_message(from: &Mailbox, email: OutboundEmail) -> Result<Message, OrangeairError> {
    let to: Mailbox = email.recipient.parse().map_err(|e| OrangeairError::Mail {
        message: format!("invalid recipient address `{}`", email.recipient),
        source: Some(Box::new(e)),
    })?;
    let jpeg = ContentType::parse(JPEG).map_err(|e| OrangeairError::Mail {
        message: format!("invalid attachment content type: {e}"),
        source: None,
    })?;

    let body = email
        .attachments
        .into_iter()
        .take(MAX_ATTACHMENTS)
        .fold(
            MultiPart::mixed().singlepart(SinglePart::html(email.html_body)),
            |parts, attachment| {
                parts.singlepart(
                    MimeAttachment::new(attachment.filename)
                        .body(attachment.content, jpeg.clone()),
                )
            },
        );

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(email.subject)
        .multipart(body)
        .map_err(|e| OrangeairError::Mail {
            message: format!("failed to build message: {e}"),
            source: Some(Box::new(e)),
        })
}

/// Parses a sender address, reporting it as a configuration problem.
pub fn parse_sender(address: &str) -> Result<Mailbox, OrangeairError> {
    address
        .parse()
        .map_err(|e| OrangeairError::Config(format!("invalid SMTP sender `{address}`: {e}")))
}
