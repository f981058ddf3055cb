//! # Input masks for the registration form
//!
//! Pure keystroke formatters: each takes the proposed raw value of its field,
//! strips everything that is not an ASCII digit, truncates to the field's
//! maximum digit count, and re-inserts the mask punctuation. They are applied
//! on every keystroke, so they must accept their own output as input and
//! reproduce it unchanged.
//!
//! No semantic validation happens here: a national id with an impossible
//! check digit formats just as happily as a real one.

/// `XXX.XXX.XXX-XX`, up to 11 digits.
///
/// `"123"` → `"123"`, `"1234567"` → `"123.456.7"`,
/// `"12345678901"` → `"123.456.789-01"`.
pub fn national_id(raw: &str) -> String {
    let d = digits(raw, 11);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// `XXXXX-XXX`, up to 8 digits. `"12345678"` → `"12345-678"`.
pub fn postal_code(raw: &str) -> String {
    let d = digits(raw, 8);
    match d.len() {
        0..=5 => d,
        _ => format!("{}-{}", &d[..5], &d[5..]),
    }
}

/// `(XX) XXXXX-XXXX`, up to 11 digits. `"11987654321"` → `"(11) 98765-4321"`.
pub fn phone(raw: &str) -> String {
    let d = digits(raw, 11);
    match d.len() {
        0..=2 => d,
        3..=7 => format!("({}) {}", &d[..2], &d[2..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

fn digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}
