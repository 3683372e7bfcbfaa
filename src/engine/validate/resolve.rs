use crate::domain::catalog::ErrorCode;
use crate::domain::schema::DataType;

/// Folds the type and length comparisons of a present field into one code.
///
/// Missing fields never reach this table; they are reported as E05 directly.
pub fn resolve(given: DataType, expected: DataType, length_ok: bool) -> ErrorCode {
    match (given == expected, length_ok) {
        (true, true) => ErrorCode::E01,
        (false, true) => ErrorCode::E02,
        (true, false) => ErrorCode::E03,
        (false, false) => ErrorCode::E04,
    }
}
