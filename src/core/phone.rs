use regex::Regex;
use std::sync::LazyLock;

use crate::utils::error::ValidationError;

const US_PHONE_DIGITS: usize = 10;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("static pattern is valid"));

/// Formats free-form input as `(AAA) BBB-CCCC`.
///
/// Every non-digit character is dropped first, so `555.123.4567`,
/// `+ 555 123 4567` and the formatted output itself are all accepted.
/// Fails unless exactly ten digits remain.
pub fn format_phone_us(raw: &str) -> Result<String, ValidationError> {
    let digits = NON_DIGIT.replace_all(raw, "");

    if digits.len() != US_PHONE_DIGITS {
        return Err(ValidationError::WrongDigitCount {
            input: raw.to_string(),
            digit_count: digits.len(),
        });
    }

    // 只剩 ASCII 數字，可以直接用位元組索引切
    Ok(format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10]))
}
