//! Input validation and normalization.
//!
//! # Responsibilities
//! - Validate names against the allowed character set
//! - Validate phone numbers (separator check + digit count)
//! - Normalize display names (trim, collapse whitespace, capitalize)
//! - Strip phone numbers down to bare digits

/// Accented characters accepted in names, beyond ASCII letters and spaces.
const ACCENTED: &[char] = &[
    'á', 'é', 'í', 'ó', 'ú', 'Á', 'É', 'Í', 'Ó', 'Ú', 'ñ', 'Ñ',
];

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || ACCENTED.contains(&c)
}

/// A name is valid when its trimmed form is non-empty and every character
/// is a letter, a space, or part of the accented set.
pub fn valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().all(is_name_char)
}

/// A phone is valid when stripping separators (spaces, hyphens, parentheses,
/// one leading `+`) leaves a non-empty digit string, and stripping everything
/// non-digit leaves 7 to 15 digits. The first check rejects embedded letters
/// even when the digit count alone would pass.
pub fn valid_phone(raw: &str) -> bool {
    let stripped: String = raw
        .strip_prefix('+')
        .unwrap_or(raw)
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    (7..=15).contains(&clean_phone(raw).chars().count())
}

/// Trim, collapse runs of whitespace to single spaces, and capitalize each
/// word (first character uppercased, the rest lowercased). Idempotent.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim and collapse runs of whitespace to single spaces, preserving case.
/// This is the key form used by deletion.
pub fn collapse_whitespace(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every non-digit character.
pub fn clean_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
