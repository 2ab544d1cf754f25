use super::utils::lookup_key;
use unicode_segmentation::UnicodeSegmentation;

/// A word that is exactly one character once periods are dropped: "R", "r.",
/// or a decomposed accented letter.
pub fn is_initial(word: &str) -> bool {
    lookup_key(word).graphemes(true).count() == 1
}
