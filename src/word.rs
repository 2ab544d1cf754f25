use smallvec::SmallVec;

pub type Words<'a> = SmallVec<[&'a str; 7]>;

/// Splits a raw name on runs of whitespace, discarding parenthetical asides
/// such as a nickname in "(Bob)". Only words containing an opening
/// parenthesis are dropped; a stray ")" is kept as a word.
pub fn tokenize(text: &str) -> Words<'_> {
    text.split_whitespace()
        .filter(|word| !word.contains('('))
        .collect()
}
