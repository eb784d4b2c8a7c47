// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sender for the Orange Air consultation service.
//!
//! Renders booking and support (AS) requests into HTML emails, attaches the
//! customer's compressed photos, and delivers them to the business mailbox
//! through an SMTP relay over implicit TLS.

pub mod links;
pub mod message;
pub mod smtp;
pub mod templates;

pub use links::{format_won, kakao_map_url, naver_map_url, tel_url};
pub use message::{MAX_ATTACHMENTS, build_message};
pub use smtp::SmtpMailer;
pub use templates::{
    BOOKING_SUBJECT, BookingNotice, NotificationComposer, SUPPORT_SUBJECT, SupportNotice,
    preference_line,
};
