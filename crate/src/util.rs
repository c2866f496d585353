use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static LOWERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\P{Lu}*\z").expect("Could not parse lowercase regex"));

static TITLECASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\p{Lu}\P{Lu}*\z").expect("Could not parse titlecase regex"));

static UPPERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\P{Ll}*\z").expect("Could not parse uppercase regex"));

#[derive(Debug, PartialEq)]
enum Shape {
    Lower,
    Title,
    Upper,
    Mixed,
}

fn shape(word: &str) -> Shape {
    if LOWERCASE_REGEX.is_match(word) {
        return Shape::Lower;
    }
    if TITLECASE_REGEX.is_match(word) {
        return Shape::Title;
    }
    if UPPERCASE_REGEX.is_match(word) {
        return Shape::Upper;
    }
    Shape::Mixed
}

/// Trims the word and lower-cases it, borrowing when nothing needs to change.
pub(crate) fn normalize(word: &str) -> Cow<'_, str> {
    let trimmed = word.trim();
    if is_lowercase(trimmed) {
        return Cow::Borrowed(trimmed);
    }
    Cow::Owned(trimmed.to_lowercase())
}

pub(crate) fn is_lowercase(word: &str) -> bool {
    !word.chars().any(char::is_uppercase)
}

pub(crate) fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Splits `word` into a stem and its last `n` characters. Returns `None`
/// when the word has fewer than `n` characters.
pub(crate) fn split_tail(word: &str, n: usize) -> Option<(&str, &str)> {
    if n == 0 {
        return Some((word, ""));
    }
    word.char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| word.split_at(i))
}

/// Gives `new` the same casing as `orig`. Lower-case, Title-case and
/// UPPER-case originals are handled; anything else leaves `new` alone.
pub(crate) fn fix_case<'a>(orig: &'a str, new: String) -> Cow<'a, str> {
    let orig = orig.trim();
    let fixed = match shape(orig) {
        Shape::Lower | Shape::Mixed => new,
        Shape::Title => titlecase_word(&new),
        Shape::Upper => new.to_uppercase(),
    };
    if fixed == orig {
        return Cow::Borrowed(orig);
    }
    Cow::Owned(fixed)
}

fn titlecase_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
