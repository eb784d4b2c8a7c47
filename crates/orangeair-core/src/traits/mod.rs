// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the external services the workflow calls.
//!
//! All adapters extend the [`Adapter`] base trait and use `#[async_trait]`
//! for dynamic dispatch compatibility.

pub mod adapter;
pub mod calendar;
pub mod mail;

pub use adapter::Adapter;
pub use calendar::CalendarAdapter;
pub use mail::MailAdapter;
