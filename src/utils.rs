use std::borrow::Cow;

/// The form every classifier table is keyed by: lower-cased, with all
/// periods removed, so "Jr.", "JR" and "jr" (or "St." and "st") compare equal.
pub fn lookup_key(word: &str) -> Cow<str> {
    if word
        .bytes()
        .all(|b| b != b'.' && !b.is_ascii_uppercase() && b.is_ascii())
    {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.chars().filter(|&c| c != '.').collect::<String>().to_lowercase())
    }
}
