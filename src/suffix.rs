use super::utils::lookup_key;

static CANONICAL_BY_SUFFIX: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/canonical_by_suffix.rs"));

/// The canonical casing of a recognized generational or post-nominal
/// suffix ("phd" -> "PhD", "JR." -> "Jr"), if any.
pub fn canonical_suffix(word: &str) -> Option<&'static str> {
    CANONICAL_BY_SUFFIX.get(&*lookup_key(word)).cloned()
}
