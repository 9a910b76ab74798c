// Reserved vocabulary keys and the corpus word separator

/// Key of the vector used when no substitute can be found.
pub const UNKNOWN_TOKEN: &str = "<unk>";

/// Key of the vector shared by all numeric literals.
pub const NUMERIC_TOKEN: &str = "<num>";

/// Default separator placed between words in the corpus string.
///
/// Must never occur inside a vocabulary word.
pub const WORD_SEPARATOR: char = '\0';

/// Returns `true` for the reserved keys that never enter the corpus.
pub fn is_reserved(word: &str) -> bool {
    word == UNKNOWN_TOKEN || word == NUMERIC_TOKEN
}

/// Check whether a word is a numeric literal.
///
/// Accepts an optional leading sign followed by digits with `,` or `.`
/// group/decimal separators. At least one digit is required and the
/// literal may not end on a separator.
pub fn is_numeric_literal(word: &str) -> bool {
    let body = word.strip_prefix(['+', '-']).unwrap_or(word);
    let mut saw_digit = false;
    let mut last_was_separator = false;
    for c in body.chars() {
        match c {
            '0'..='9' => {
                saw_digit = true;
                last_was_separator = false;
            }
            ',' | '.' if saw_digit && !last_was_separator => last_was_separator = true,
            _ => return false,
        }
    }
    saw_digit && !last_was_separator
}
