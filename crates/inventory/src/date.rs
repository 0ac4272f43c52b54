//! Registration date validation.
//!
//! Accepts `YYYY-MM-DD` with year in `1900..=2100`. Month lengths are checked
//! for the 30-day months and February, but February is always capped at 28
//! days: leap years are not recognised, so `2024-02-29` is rejected. This is
//! a known limitation kept for compatibility with existing inventory files.

use stockbook_core::{DomainError, DomainResult};

const DATE_LEN: usize = 10;
const SEPARATOR_POSITIONS: [usize; 2] = [4, 7];

const MIN_YEAR: u32 = 1900;
const MAX_YEAR: u32 = 2100;

/// Returns true if `date` is a well-shaped, in-range registration date.
pub fn is_valid(date: &str) -> bool {
    let bytes = date.as_bytes();
    if bytes.len() != DATE_LEN {
        return false;
    }

    for (idx, b) in bytes.iter().enumerate() {
        let ok = if SEPARATOR_POSITIONS.contains(&idx) {
            *b == b'-'
        } else {
            b.is_ascii_digit()
        };
        if !ok {
            return false;
        }
    }

    let year = parse_digits(&bytes[0..4]);
    let month = parse_digits(&bytes[5..7]);
    let day = parse_digits(&bytes[8..10]);

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }
    if !(1..=12).contains(&month) {
        return false;
    }

    (1..=max_day(month)).contains(&day)
}

/// Validate a registration date, returning `InvalidDate` on failure.
pub fn validate(date: &str) -> DomainResult<()> {
    if is_valid(date) {
        Ok(())
    } else {
        Err(DomainError::invalid_date(date))
    }
}

fn max_day(month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => 28,
        _ => 31,
    }
}

// Callers guarantee `digits` is all ASCII digits.
fn parse_digits(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
