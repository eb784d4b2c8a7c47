// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hyperlinks embedded in notification emails.
//!
//! Every user-supplied component is percent-encoded here; the template layer
//! HTML-escapes the result again when it lands in an attribute.

const NAVER_MAP_SEARCH: &str = "https://map.naver.com/v5/search/";
const KAKAO_MAP_SEARCH: &str = "https://map.kakao.com/?q=";

/// Naver map search for a free-text address.
pub fn naver_map_url(address: &str) -> String {
    format!("{NAVER_MAP_SEARCH}{}", urlencoding::encode(address.trim()))
}

/// Kakao map search for a free-text address.
pub fn kakao_map_url(address: &str) -> String {
    format!("{KAKAO_MAP_SEARCH}{}", urlencoding::encode(address.trim()))
}

/// `tel:` dial link for a phone number as the customer typed it.
pub fn tel_url(phone: &str) -> String {
    format!("tel:{}", urlencoding::encode(phone.trim()))
}

/// Formats a KRW amount with thousands separators, e.g. `140,000 won`.
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(" won");
    out
}
