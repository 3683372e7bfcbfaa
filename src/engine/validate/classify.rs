use std::str::FromStr;

use num_bigint::BigInt;

use crate::domain::record::FieldValue;
use crate::domain::schema::DataType;

/// Infers the data type of a present field value.
///
/// Integers of any size are `digits`. Otherwise a non-blank value made only
/// of letters and whitespace is `word_characters`; anything else is `others`.
///
/// Numbers keep their source digits, so an integer literal wider than 64 bits
/// is classified from its text rather than a lossy float.
pub fn classify(value: &FieldValue) -> DataType {
    match value {
        FieldValue::Number(number) if number.is_i64() || number.is_u64() => DataType::Digits,
        FieldValue::Number(number) => classify_text(&number.to_string()),
        FieldValue::Text(text) => classify_text(text),
    }
}

fn classify_text(text: &str) -> DataType {
    if is_integer(text) {
        DataType::Digits
    } else if is_word_characters(text) {
        DataType::WordCharacters
    } else {
        DataType::Others
    }
}

/// Optional sign, then ASCII digits with at most one `_` between two digits.
fn is_integer(text: &str) -> bool {
    let trimmed = text.trim();
    let unsigned = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    has_digit_groups(unsigned) && BigInt::from_str(trimmed).is_ok()
}

fn has_digit_groups(text: &str) -> bool {
    !text.is_empty()
        && text
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|byte| byte.is_ascii_digit()))
}

fn is_word_characters(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
        && text
            .chars()
            .all(|ch| ch.is_alphabetic() || ch.is_whitespace())
}
