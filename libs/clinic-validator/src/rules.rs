//! Primitive field rules

use chrono::NaiveDate;

/// Calendar format accepted for appointment and record dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const CONTACT_DIGITS: usize = 10;
const DATE_LEN: usize = "YYYY-MM-DD".len();

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Exactly ten ASCII digits, no separators
pub fn is_valid_contact(value: &str) -> bool {
    value.len() == CONTACT_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// Strict `YYYY-MM-DD`: zero-padded, no surrounding whitespace, since the
/// value is stored as sent
pub fn is_valid_date(value: &str) -> bool {
    value.len() == DATE_LEN
        && value.bytes().all(|b| b.is_ascii_digit() || b == b'-')
        && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}
