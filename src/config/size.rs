//! Human-friendly byte sizes: `1048576`, `512K`, `40M`, `2g`, `unlimited`.

use crate::core::{PurgeError, Result};

const KIB: u64 = 1024;

/// Parse a size setting into bytes.
///
/// Suffixes are binary multiples and case-insensitive. `unlimited` maps to
/// `u64::MAX`, which disables eviction entirely.
pub fn parse_size(input: &str) -> Result<u64> {
    let text = input.trim();
    let invalid = || PurgeError::InvalidSize(input.to_string());

    if text.eq_ignore_ascii_case("unlimited") {
        return Ok(u64::MAX);
    }

    if text.is_empty() {
        return Err(invalid());
    }

    let (digits, multiplier) = match text.char_indices().last() {
        Some((idx, unit)) if unit.is_ascii_alphabetic() => {
            let multiplier = match unit.to_ascii_uppercase() {
                'B' => 1,
                'K' => KIB,
                'M' => KIB * KIB,
                'G' => KIB * KIB * KIB,
                _ => return Err(invalid()),
            };
            (&text[..idx], multiplier)
        }
        _ => (text, 1),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    digits
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .ok_or_else(invalid)
}
