// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Referral links shared by existing customers.

/// Shown under a generated link on the recommend screen.
pub const REFERRAL_INSTRUCTIONS: [&str; 2] = [
    "Copy the link above and send it to your friends!",
    "When a friend books through this link and the cleaning is completed, you receive a coffee coupon!",
];

/// `https://<domain>/?ref=<phone>`, or `None` for a blank phone number.
///
/// The phone is percent-encoded; digits and hyphens pass through unchanged.
pub fn referral_link(service_domain: &str, phone: &str) -> Option<String> {
    let phone = phone.trim();
    if phone.is_empty() {
        return None;
    }
    Some(format!(
        "https://{service_domain}/?ref={}",
        urlencoding::encode(phone)
    ))
}
