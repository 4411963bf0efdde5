//! Identifier validation for element names and attribute keys

use unicode_general_category::{get_general_category, GeneralCategory};

/// Checks whether `name` may be used as an element name or attribute key.
///
/// The first character must be a letter (general category `L*`), `_` or `:`.
/// Every following character must be alphabetic, a decimal digit (`Nd`), `.`,
/// `-`, `_` or `:`. Other numbers such as `²` or `①` are rejected. Checks run
/// per Unicode scalar value, so characters outside the BMP are judged as a
/// whole.
///
/// ```
/// use lwdom::is_valid_identifier;
///
/// assert!(is_valid_identifier("a.b-c:d_e"));
/// assert!(!is_valid_identifier("1abc"));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

fn is_name_start_char(c: char) -> bool {
    is_letter(c) || c == '_' || c == ':'
}

// Ideographs carry the Alphabetic property, so `is_alphabetic` covers them.
fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || is_decimal_digit(c) || matches!(c, '.' | '-' | '_' | ':')
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}
