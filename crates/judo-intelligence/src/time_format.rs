// ABOUTME: Parsing of "MM:SS" and "HH:MM:SS" time strings into seconds
// ABOUTME: Invalid strings yield None rather than an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

/// Convert a "MM:SS" or "HH:MM:SS" string to total seconds
///
/// Any other number of `:`-separated tokens, or a token that is not an
/// unsigned integer, yields `None`.
///
/// ```rust
/// use judo_intelligence::time_format::parse_time_to_seconds;
///
/// assert_eq!(parse_time_to_seconds("05:30"), Some(330));
/// assert_eq!(parse_time_to_seconds("1:02:03"), Some(3723));
/// assert_eq!(parse_time_to_seconds("330"), None);
/// ```
#[must_use]
pub fn parse_time_to_seconds(value: &str) -> Option<u32> {
    let parts = value
        .trim()
        .split(':')
        .map(|token| token.trim().parse::<u32>().ok())
        .collect::<Option<Vec<u32>>>()?;

    match parts.as_slice() {
        [minutes, seconds] => minutes.checked_mul(60)?.checked_add(*seconds),
        [hours, minutes, seconds] => hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(*seconds),
        _ => None,
    }
}
